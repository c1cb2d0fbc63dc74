//! Progress notification port
//!
//! Defines the interface for reporting progress while capabilities run.

use router_domain::Capability;

/// Callback for progress updates during a request
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called right before a capability is invoked
    fn on_capability_start(&self, capability: Capability);

    /// Called once the capability call has returned or faulted
    fn on_capability_complete(&self, capability: Capability, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_capability_start(&self, _capability: Capability) {}
    fn on_capability_complete(&self, _capability: Capability, _success: bool) {}
}
