//! Capability results and their conversion into presentation events

use super::Capability;
use crate::event::PresentationEvent;
use serde::{Deserialize, Serialize};

/// How a capability invocation went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityErrorKind {
    /// The collaborator raised a fault during the call
    Fault,
    /// The call succeeded but the payload had the wrong structure
    UnexpectedResultShape,
    /// The call succeeded but returned nothing usable
    EmptyResult,
}

/// A failed or unusable capability invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityError {
    pub capability: Capability,
    pub kind: CapabilityErrorKind,
    pub message: String,
}

impl CapabilityError {
    pub fn fault(capability: Capability, message: impl Into<String>) -> Self {
        Self {
            capability,
            kind: CapabilityErrorKind::Fault,
            message: message.into(),
        }
    }

    pub fn unexpected_shape(capability: Capability, message: impl Into<String>) -> Self {
        Self {
            capability,
            kind: CapabilityErrorKind::UnexpectedResultShape,
            message: message.into(),
        }
    }

    pub fn empty(capability: Capability) -> Self {
        Self {
            capability,
            kind: CapabilityErrorKind::EmptyResult,
            message: String::new(),
        }
    }

    /// Text shown to the user for this error
    pub fn user_message(&self) -> String {
        match self.kind {
            CapabilityErrorKind::Fault => {
                format!("{} failed: {}", self.capability, self.message)
            }
            CapabilityErrorKind::UnexpectedResultShape => format!(
                "{} returned an unexpected result: {}",
                self.capability, self.message
            ),
            CapabilityErrorKind::EmptyResult => {
                format!("{} returned no results.", self.capability)
            }
        }
    }

    /// Empty results are warnings; every other kind is an error
    pub fn into_event(self) -> PresentationEvent {
        match self.kind {
            CapabilityErrorKind::EmptyResult => PresentationEvent::Warning(self.user_message()),
            CapabilityErrorKind::Fault | CapabilityErrorKind::UnexpectedResultShape => {
                PresentationEvent::Error(self.user_message())
            }
        }
    }
}

impl std::fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

/// Outcome of one capability invocation, owned by the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityResult {
    Image { image_bytes: Vec<u8> },
    Search { text: String },
    Error(CapabilityError),
}

impl CapabilityResult {
    pub fn is_success(&self) -> bool {
        !matches!(self, CapabilityResult::Error(_))
    }

    pub fn into_events(self) -> Vec<PresentationEvent> {
        match self {
            CapabilityResult::Image { image_bytes } => vec![
                PresentationEvent::RenderImage(image_bytes),
                PresentationEvent::success("Image generated successfully."),
            ],
            CapabilityResult::Search { text } => vec![
                PresentationEvent::RenderText(text),
                PresentationEvent::success("Search completed successfully."),
            ],
            CapabilityResult::Error(error) => vec![error.into_event()],
        }
    }
}

impl From<CapabilityError> for CapabilityResult {
    fn from(error: CapabilityError) -> Self {
        CapabilityResult::Error(error)
    }
}
