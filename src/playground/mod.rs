//! Playground - state snapshot plus the two transitions that replace it
//!
//! State machine: a single `Ready` state with two self-transitions,
//! `switch(target)` and `run()`. No terminal state.

pub mod actions;
pub mod state;

pub use actions::{Actions, Switched};
pub use state::PlaygroundState;

use thiserror::Error;

use crate::editor::EditorError;
use crate::registry::RegistryError;

/// Playground error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaygroundError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

pub type PlaygroundResult<T> = Result<T, PlaygroundError>;
