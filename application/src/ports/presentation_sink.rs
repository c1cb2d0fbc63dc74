//! Presentation sink port
//!
//! Defines the interface the orchestrator's output is rendered through.

use router_domain::PresentationEvent;

/// Consumer of presentation events
///
/// Implementations live in the presentation layer (console, JSON, ...).
/// Events must be rendered strictly in the order they are given.
pub trait PresentationSink: Send + Sync {
    /// Render a single event
    fn render(&self, event: &PresentationEvent);

    /// Render a sequence of events in order
    fn render_all(&self, events: &[PresentationEvent]) {
        for event in events {
            self.render(event);
        }
    }
}
