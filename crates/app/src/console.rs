//! The console host: runs commands against the stores and loaders.

use std::sync::Arc;

use imageer_application::context::ExecutionContext;
use imageer_application::error::LoadError;
use imageer_application::loaders::{LoadEvent, Redirect};
use imageer_application::ports::Transport;
use imageer_application::router::{LoadedPage, load_route};
use imageer_application::stores::{ImagePreferencesStore, ThemeStore, ToastStore};
use imageer_domain::{ImagePreferences, Theme, Toast};
use imageer_infrastructure::adapters::THEME_ATTRIBUTE;
use imageer_infrastructure::{AttributeSurface, ConsoleConfig, EnvSystemTheme, default_transport};
use serde::Serialize;
use url::Url;

use crate::cli::{Command, PrefsCommand, ThemeCommand};
use crate::error::{ConsoleError, ConsoleResult};

/// Origin pages are resolved against when none is configured.
const FALLBACK_ORIGIN: &str = "http://localhost";

/// Result of loading a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum PageOutcome {
    /// The page rendered.
    Loaded(LoadedPage),
    /// The host must navigate elsewhere.
    Redirect(Redirect),
}

/// A page outcome together with the toasts raised while loading it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// What happened.
    pub result: PageOutcome,
    /// Toasts currently visible.
    pub toasts: Vec<Toast>,
}

/// Theme state as the host renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeReport {
    /// Active theme.
    pub theme: Theme,
    /// Whether the theme was chosen explicitly.
    pub explicit: bool,
    /// `data-theme` attribute of the root element.
    pub data_theme: Option<String>,
}

/// Everything a console command needs.
#[derive(Clone)]
pub struct Console {
    /// Effective configuration.
    pub config: ConsoleConfig,
    /// Where pages are loaded.
    pub context: ExecutionContext,
    /// Transport for API requests.
    pub transport: Arc<dyn Transport>,
    /// Toast registry.
    pub toasts: ToastStore,
    /// Image list preferences.
    pub preferences: ImagePreferencesStore,
    /// Theme store.
    pub theme: ThemeStore,
    /// Root element the theme is applied to.
    pub surface: AttributeSurface,
}

impl Console {
    /// Wires a console from the process-wide stores.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be built.
    pub fn from_runtime(
        config: ConsoleConfig,
        cookie: Option<String>,
        context: ExecutionContext,
    ) -> ConsoleResult<Self> {
        let transport = default_transport(&config, cookie)?;
        let theme = imageer_infrastructure::runtime::theme().clone();
        theme.init(&EnvSystemTheme::from_env());

        Ok(Self::new(
            config,
            context,
            transport,
            imageer_infrastructure::runtime::toasts().clone(),
            imageer_infrastructure::runtime::preferences().clone(),
            theme,
        ))
    }

    /// Wires a console from explicit parts. The theme is attached to a
    /// fresh surface.
    #[must_use]
    pub fn new(
        config: ConsoleConfig,
        context: ExecutionContext,
        transport: Arc<dyn Transport>,
        toasts: ToastStore,
        preferences: ImagePreferencesStore,
        theme: ThemeStore,
    ) -> Self {
        let surface = AttributeSurface::new();
        theme.attach(Arc::new(surface.clone()));
        Self {
            config,
            context,
            transport,
            toasts,
            preferences,
            theme,
            surface,
        }
    }

    /// Runs `command` and returns its printable output.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn execute(&self, command: Command) -> ConsoleResult<serde_json::Value> {
        let value = match command {
            Command::Load { path } => serde_json::to_value(self.load_page(&path).await?),
            Command::Prefs(command) => serde_json::to_value(self.run_prefs(command)?),
            Command::Theme(command) => serde_json::to_value(self.run_theme(command)?),
        };
        value.map_err(|e| ConsoleError::Serialization(e.into()))
    }

    /// Loads the page at `path`, turning redirects into an outcome.
    ///
    /// # Errors
    ///
    /// Returns an error for failures other than redirects.
    pub async fn load_page(&self, path: &str) -> ConsoleResult<LoadReport> {
        let url = self.page_url(path)?;
        let event = LoadEvent::new(url, Arc::clone(&self.transport), self.toasts.clone())
            .with_base_url(self.config.base_url())
            .with_context(self.context);

        let result = match load_route(event).await {
            Ok(page) => PageOutcome::Loaded(page),
            Err(LoadError::Redirect(redirect)) => PageOutcome::Redirect(redirect),
            Err(e) => return Err(e.into()),
        };

        self.toasts.remove_expired();
        Ok(LoadReport {
            result,
            toasts: self.toasts.toasts(),
        })
    }

    fn page_url(&self, path: &str) -> ConsoleResult<Url> {
        let invalid = |source| ConsoleError::InvalidPath {
            path: path.to_string(),
            source,
        };
        let origin = match self.config.origin_url()? {
            Some(origin) => origin,
            None => Url::parse(FALLBACK_ORIGIN).map_err(invalid)?,
        };
        origin.join(path).map_err(invalid)
    }

    /// Runs a preference command.
    ///
    /// # Errors
    ///
    /// Returns an error if a change cannot be persisted.
    pub fn run_prefs(&self, command: PrefsCommand) -> ConsoleResult<ImagePreferences> {
        if let PrefsCommand::Set {
            sort_by,
            sort_order,
            per_page,
        } = command
        {
            if let Some(sort_by) = sort_by {
                self.preferences.sort_by.set(sort_by)?;
            }
            if let Some(sort_order) = sort_order {
                self.preferences.sort_order.set(sort_order)?;
            }
            if let Some(per_page) = per_page {
                self.preferences.per_page.set(per_page)?;
            }
        }
        Ok(self.preferences.snapshot())
    }

    /// Runs a theme command.
    ///
    /// # Errors
    ///
    /// Returns an error if a change cannot be persisted.
    pub fn run_theme(&self, command: ThemeCommand) -> ConsoleResult<ThemeReport> {
        match command {
            ThemeCommand::Show => {}
            ThemeCommand::Set { theme } => self.theme.set(theme)?,
            ThemeCommand::Toggle => {
                self.theme.toggle()?;
            }
            ThemeCommand::Clear => {
                self.theme.clear_choice()?;
            }
        }
        Ok(ThemeReport {
            theme: self.theme.current(),
            explicit: self.theme.has_choice(),
            data_theme: self.surface.attribute(THEME_ATTRIBUTE),
        })
    }
}
