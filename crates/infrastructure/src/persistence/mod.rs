//! Key-value storage adapters.

mod file_storage;
mod memory_storage;

pub use file_storage::{FileKeyValueStorage, STORAGE_FILE_NAME, default_state_dir};
pub use memory_storage::MemoryStorage;
