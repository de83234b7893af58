//! UI module for the play button demo
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Low-level Widget and canvas implementations
//! - **Widgets** (`widgets`): Composable controls without business logic
//! - **Animation** (`animation`): Tweens and hover transitions

pub mod animation;
pub mod primitives;
pub mod theme;
pub mod widgets;
