//! GST computation: per-line splits and document-level totals

pub mod document;
pub mod engine;

pub use document::*;
pub use engine::*;
