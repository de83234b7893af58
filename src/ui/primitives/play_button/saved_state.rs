//! Instance state that survives widget recreation
//!
//! The widget's two scalars are appended after whatever base state the host
//! keeps, in a fixed order: button state, then progress.

use serde::{Deserialize, Serialize};

use super::ButtonState;

/// Base state plus the play button's button state and progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState<S> {
    pub super_state: S,
    pub button_state: ButtonState,
    pub progress: f32,
}

impl<S> SavedState<S> {
    pub fn new(super_state: S, button_state: ButtonState, progress: f32) -> Self {
        Self {
            super_state,
            button_state,
            progress,
        }
    }

    /// Drop the widget fields and keep the base state
    pub fn into_super_state(self) -> S {
        self.super_state
    }
}

/// Payload handed to `restore_state`
///
/// Anything that is not a [`SavedState`] is treated as a plain base state
/// and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstanceState<S> {
    Saved(SavedState<S>),
    Base(S),
}

impl<S> From<SavedState<S>> for InstanceState<S> {
    fn from(state: SavedState<S>) -> Self {
        Self::Saved(state)
    }
}
