//! REPL (Read-Eval-Print Loop) for interactive mode
//!
//! Each submitted line is one complete, independent request: nothing is
//! carried over from one query to the next.

use crate::progress::reporter::progress_for_terminal;
use router_application::{PresentationSink, RunQueryUseCase};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use tracing::debug;

/// What the REPL should do with a line of input
#[derive(Debug, PartialEq, Eq)]
enum ReplAction<'a> {
    Run(&'a str),
    Help,
    Profile,
    Quit,
    Unknown(&'a str),
}

impl<'a> ReplAction<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if !trimmed.starts_with('/') {
            return ReplAction::Run(line);
        }
        match trimmed {
            "/quit" | "/exit" | "/q" => ReplAction::Quit,
            "/help" | "/h" | "/?" => ReplAction::Help,
            "/profile" => ReplAction::Profile,
            other => ReplAction::Unknown(other),
        }
    }
}

/// Interactive query REPL
pub struct InteractiveRepl {
    use_case: RunQueryUseCase,
    sink: Box<dyn PresentationSink>,
    show_progress: bool,
}

impl InteractiveRepl {
    pub fn new(use_case: RunQueryUseCase, sink: Box<dyn PresentationSink>) -> Self {
        Self {
            use_case,
            sink,
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = Self::history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => match ReplAction::parse(&line) {
                    ReplAction::Quit => {
                        println!("Bye!");
                        break;
                    }
                    ReplAction::Help => Self::print_help(),
                    ReplAction::Profile => {
                        println!("Keyword profile: {}", self.use_case.classifier().profile());
                    }
                    ReplAction::Unknown(cmd) => {
                        println!("Unknown command: {} (type /help)", cmd);
                    }
                    ReplAction::Run(query) => {
                        if !query.trim().is_empty() {
                            let _ = rl.add_history_entry(query.trim());
                        }
                        self.process_query(query).await;
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    async fn process_query(&self, query: &str) {
        let events = if self.show_progress {
            let progress = progress_for_terminal();
            self.use_case
                .execute_with_progress(query, progress.as_ref())
                .await
        } else {
            self.use_case.execute(query).await
        };
        debug!("Rendering {} events", events.len());
        self.sink.render_all(&events);
        println!();
    }

    fn history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("query-router").join("history.txt"))
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Query Router - Interactive Mode      │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Ask for an image (\"draw a cat in a garden\") or anything else");
        println!("(\"what is the weather today\").");
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?   - Show this help");
        println!("  /profile        - Show the keyword profile in use");
        println!("  /quit, /exit    - Exit");
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplAction::parse("/quit"), ReplAction::Quit);
        assert_eq!(ReplAction::parse("  /q "), ReplAction::Quit);
        assert_eq!(ReplAction::parse("/?"), ReplAction::Help);
        assert_eq!(ReplAction::parse("/profile"), ReplAction::Profile);
        assert_eq!(ReplAction::parse("/nope"), ReplAction::Unknown("/nope"));
    }

    #[test]
    fn test_plain_lines_run_as_queries() {
        assert_eq!(ReplAction::parse("draw a cat"), ReplAction::Run("draw a cat"));
        assert_eq!(ReplAction::parse(""), ReplAction::Run(""));
        assert_eq!(ReplAction::parse("   "), ReplAction::Run("   "));
    }
}
