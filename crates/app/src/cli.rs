//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use imageer_domain::{PerPage, SortBy, SortOrder, Theme};
use imageer_infrastructure::ConsoleConfig;

/// Imageer admin console
#[derive(Parser, Debug)]
#[command(name = "imageer-console", about = "Imageer admin console", version)]
pub struct Cli {
    /// API origin, e.g. https://api.imageer.example
    #[arg(long, env = "PUBLIC_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Origin of the console, used for same-origin requests
    #[arg(long)]
    pub origin: Option<String>,

    /// Cookie header forwarded with every credentialed request
    #[arg(long, env = "IMAGEER_COOKIE", hide_env_values = true)]
    pub cookie: Option<String>,

    /// Directory of the persisted preferences
    #[arg(long)]
    pub state_dir: Option<PathBuf>,

    /// Run as the interactive console instead of a server render
    #[arg(long)]
    pub interactive: bool,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Console commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load a console page and print its data or redirect
    Load {
        /// Page path, e.g. /projects?offset=10
        path: String,
    },
    /// Show or change the image list preferences
    #[command(subcommand)]
    Prefs(PrefsCommand),
    /// Show or change the color theme
    #[command(subcommand)]
    Theme(ThemeCommand),
}

/// Preference commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PrefsCommand {
    /// Print the current preferences
    Show,
    /// Change one or more preferences
    Set {
        /// createdAt or updatedAt
        #[arg(long)]
        sort_by: Option<SortBy>,
        /// ASC or DESC
        #[arg(long)]
        sort_order: Option<SortOrder>,
        /// 10, 20 or 50
        #[arg(long)]
        per_page: Option<PerPage>,
    },
}

/// Theme commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ThemeCommand {
    /// Print the active theme
    Show,
    /// Choose a theme explicitly
    Set {
        /// light or dark
        theme: Theme,
    },
    /// Switch between light and dark
    Toggle,
    /// Forget the explicit choice and follow the terminal
    Clear,
}

impl Cli {
    /// Applies the command-line overrides to `config`.
    #[must_use]
    pub fn apply(&self, mut config: ConsoleConfig) -> ConsoleConfig {
        if let Some(url) = &self.api_base_url {
            config.api_base_url = Some(url.clone());
        }
        if let Some(origin) = &self.origin {
            config.origin = Some(origin.clone());
        }
        if let Some(dir) = &self.state_dir {
            config.state_dir = Some(dir.clone());
        }
        config
    }
}
