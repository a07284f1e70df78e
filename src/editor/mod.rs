//! Editor adapter - narrow bridge to the external code editor widget
//!
//! The widget owns its buffer. The core only reads it at the moment of a
//! run and writes it when a snippet is switched in, and tolerates the
//! widget not being mounted yet: both directions fail softly with
//! `EditorError::NotReady`.

pub mod dom;
#[cfg(test)]
pub mod fake;
pub mod push;

pub use dom::DomEditors;
pub use push::{BufferPush, PushOutcome};

use std::fmt;

use thiserror::Error;

use crate::registry::SourceLanguage;

/// Editor error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("editor `{0}` is not mounted yet")]
    NotReady(String),

    #[error("editor `{handle}` failed `{method}`: {reason}")]
    Widget {
        handle: String,
        method: &'static str,
        reason: String,
    },
}

pub type EditorResult<T> = Result<T, EditorError>;

/// Stable identifier of one widget instance
///
/// Doubles as the id of the DOM element the widget mounts into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditorHandle(String);

impl EditorHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EditorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Access to editor widgets by handle
pub trait EditorAdapter {
    /// Replace the widget's buffer.
    fn try_set_buffer(&self, handle: &EditorHandle, text: &str) -> EditorResult<()>;

    /// Read the widget's live buffer.
    fn try_get_buffer(&self, handle: &EditorHandle) -> EditorResult<String>;

    /// Switch syntax highlighting.
    fn try_set_language(&self, handle: &EditorHandle, language: SourceLanguage) -> EditorResult<()>;

    /// Ask the widget to re-measure and repaint. Best effort.
    fn refresh(&self, handle: &EditorHandle);
}
