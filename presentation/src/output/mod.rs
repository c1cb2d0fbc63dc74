//! Presentation sinks and image output

pub mod console;
pub mod image_store;
pub mod json;
