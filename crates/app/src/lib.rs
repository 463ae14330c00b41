//! Imageer Console - command-line host of the admin console
//!
//! Plays the role of the UI layer: resolves configuration, wires the
//! process-wide stores and runs page loaders, printing their results.

pub mod cli;
pub mod console;
pub mod error;

pub use cli::{Cli, Command, PrefsCommand, ThemeCommand};
pub use console::{Console, LoadReport, PageOutcome, ThemeReport};
pub use error::{ConsoleError, ConsoleResult};
