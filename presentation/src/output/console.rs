//! Console presentation sink

use crate::output::image_store::ImageStore;
use colored::Colorize;
use router_application::PresentationSink;
use router_domain::PresentationEvent;
use tracing::warn;

/// Renders presentation events as colored console output
///
/// Text goes to stdout; images are written to disk through an
/// [`ImageStore`] and reported by path.
pub struct ConsoleRenderer {
    images: ImageStore,
}

impl ConsoleRenderer {
    pub fn new(images: ImageStore) -> Self {
        Self { images }
    }

    /// Format one event as the text printed for it
    pub fn format_event(&self, event: &PresentationEvent) -> String {
        match event {
            PresentationEvent::Info(text) => {
                format!("\n{} {}", "==>".cyan().bold(), text.bold())
            }
            PresentationEvent::Warning(text) => {
                format!("{} {}", "warning:".yellow().bold(), text)
            }
            PresentationEvent::Error(text) => format!("{} {}", "error:".red().bold(), text),
            PresentationEvent::Success(text) => format!("{} {}", "v".green().bold(), text.green()),
            PresentationEvent::RenderText(text) => format!("\n{}\n", text),
            PresentationEvent::RenderImage(bytes) => match self.images.save(bytes) {
                Ok(path) => format!(
                    "{} {} ({} bytes)",
                    "Image saved to".cyan(),
                    path.display(),
                    bytes.len()
                ),
                Err(e) => {
                    warn!("Could not save image: {}", e);
                    format!("{} {}", "error:".red().bold(), e)
                }
            },
        }
    }
}

impl PresentationSink for ConsoleRenderer {
    fn render(&self, event: &PresentationEvent) {
        println!("{}", self.format_event(event));
    }
}
