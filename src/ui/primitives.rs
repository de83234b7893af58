//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `Widget` trait or draw directly into a canvas frame.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//!
//! # Contents
//!
//! - [`PlayButton`] - Play/pause button with circular progress ring
//! - [`ProgressRing`] - Progress arc painter used by the play button

pub mod play_button;
pub mod progress_ring;

pub use play_button::{ButtonState, InstanceState, PlayButton, PlayButtonStyle, SavedState};
