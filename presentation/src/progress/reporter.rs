//! Progress reporting while capabilities run

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use router_application::ProgressNotifier;
use router_domain::Capability;
use std::io::IsTerminal;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner when stderr is a terminal, plain lines otherwise
pub fn progress_for_terminal() -> Box<dyn ProgressNotifier> {
    if std::io::stderr().is_terminal() {
        Box::new(SpinnerProgress::new())
    } else {
        Box::new(SimpleProgress)
    }
}

/// Shows a spinner on stderr for each capability call
pub struct SpinnerProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_message(capability: Capability) -> &'static str {
        match capability {
            Capability::ImageGeneration => "Generating image...",
            Capability::WebSearch => "Searching the web...",
        }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for SpinnerProgress {
    fn on_capability_start(&self, capability: Capability) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(Self::start_message(capability));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_capability_complete(&self, capability: Capability, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        let status = if success {
            format!("{} {}", "v".green(), capability)
        } else {
            format!("{} {}", "x".red(), capability)
        };
        pb.finish_with_message(status);
    }
}

/// Plain-text progress (no spinner), for terminals that can't redraw
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_capability_start(&self, capability: Capability) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            SpinnerProgress::start_message(capability).bold()
        );
    }

    fn on_capability_complete(&self, capability: Capability, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), capability);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), capability);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_messages() {
        assert_eq!(
            SpinnerProgress::start_message(Capability::ImageGeneration),
            "Generating image..."
        );
        assert_eq!(
            SpinnerProgress::start_message(Capability::WebSearch),
            "Searching the web..."
        );
    }

    #[test]
    fn test_complete_without_start_is_noop() {
        let progress = SpinnerProgress::new();
        progress.on_capability_complete(Capability::WebSearch, true);
        assert!(progress.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_start_then_complete_clears_spinner() {
        let progress = SpinnerProgress::new();
        progress.on_capability_start(Capability::ImageGeneration);
        assert!(progress.spinner.lock().unwrap().is_some());
        progress.on_capability_complete(Capability::ImageGeneration, false);
        assert!(progress.spinner.lock().unwrap().is_none());
    }
}
