//! A value with synchronous change notification.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`Observable::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Inner<T> {
    value: RwLock<T>,
    subscribers: RwLock<Vec<(SubscriptionId, Subscriber<T>)>>,
    next_id: AtomicU64,
}

/// Shared value whose every `set` is immediately visible to readers and
/// delivered to subscribers before `set` returns.
///
/// Cloning yields another handle to the same value.
pub struct Observable<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    /// Creates an observable holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(value),
                subscribers: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.value.read().clone()
    }

    /// Replaces the value and notifies every subscriber.
    pub fn set(&self, value: T) {
        *self.inner.value.write() = value.clone();

        // Snapshot so subscribers may (un)subscribe while being notified.
        let subscribers: Vec<Subscriber<T>> = self
            .inner
            .subscribers
            .read()
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();
        for subscriber in subscribers {
            subscriber(&value);
        }
    }

    /// Registers `subscriber` for future changes.
    pub fn subscribe(&self, subscriber: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner
            .subscribers
            .write()
            .push((id, Arc::new(subscriber)));
        id
    }

    /// Removes a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .subscribers
            .write()
            .retain(|(existing, _)| *existing != id);
    }

    /// Number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.read().len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.inner.value.read())
            .field("subscribers", &self.inner.subscribers.read().len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn set_is_visible_on_next_read() {
        let value = Observable::new(1);
        value.set(2);
        assert_eq!(value.get(), 2);
        assert_eq!(value.clone().get(), 2);
    }

    #[test]
    fn subscribers_run_synchronously_in_order() {
        let value = Observable::new("light");
        let seen = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&seen);
        value.subscribe(move |v| first.lock().push(format!("a:{v}")));
        let second = Arc::clone(&seen);
        value.subscribe(move |v| second.lock().push(format!("b:{v}")));

        value.set("dark");

        assert_eq!(*seen.lock(), vec!["a:dark", "b:dark"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let value = Observable::new(0);
        let count = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&count);
        let id = value.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        value.set(1);
        value.unsubscribe(id);
        value.set(2);

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(value.subscriber_count(), 0);
    }
}
