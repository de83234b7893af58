//! Animation helpers
//!
//! Two flavours live here:
//!
//! - [`Tween`]: explicit start/end/duration interpolation that the owner steps
//!   from its frame tick. Used where completion must commit state.
//! - [`SingleHoverAnimation`]: `iced_anim` transition for fire-and-forget
//!   hover feedback.

mod hover;
mod tween;

pub use hover::SingleHoverAnimation;
pub use tween::Tween;
