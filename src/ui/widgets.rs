//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They should not depend on `crate::app` directly.

pub mod playback_controls;

pub use playback_controls::{progress_entry, toggle_button};
