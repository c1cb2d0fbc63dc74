//! Presentation layer for query-router
//!
//! This crate contains the CLI definition, presentation sinks (console
//! and JSON), progress reporters, and the interactive REPL.

pub mod cli;
pub mod interactive;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, ProfileArg};
pub use interactive::repl::InteractiveRepl;
pub use output::console::ConsoleRenderer;
pub use output::image_store::{ImageStore, ImageStoreError};
pub use output::json::JsonRenderer;
pub use progress::reporter::{SimpleProgress, SpinnerProgress, progress_for_terminal};
