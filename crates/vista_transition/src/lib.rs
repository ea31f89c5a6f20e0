//! Vista Transition - Double-Buffered View Transitions
//!
//! This crate provides the visual hand-off between two still images.
//!
//! # Features
//!
//! - Front/back layer pair that never repaints the visible layer in place
//! - Tick-driven runs with an elapsed-time accumulator
//! - Exactly-once completion callbacks, dropped on cancel or teardown
//! - Fade, edge-wipe and instant-cut variants behind one trait
//!
//! # Example
//!
//! ```ignore
//! use vista_transition::prelude::*;
//!
//! let mut fade = FadeTransition::with_duration(0.5);
//! fade.display_immediately(Some(ImageHandle::new("hall/north.png")));
//!
//! fade.set_target(Some(ImageHandle::new("hall/east.png")));
//! fade.begin(Some(Box::new(|| log::info!("faded"))));
//! while fade.is_running() {
//!     fade.update(1.0 / 60.0);
//! }
//! ```

mod blend;
pub mod cut;
pub mod effect;
pub mod fade;
pub mod kind;
pub mod layer;
pub mod timeline;
pub mod wipe;

pub mod prelude {
    pub use crate::cut::CutTransition;
    pub use crate::effect::{CompletionCallback, TransitionEffect};
    pub use crate::fade::{FadeTransition, DEFAULT_FADE_DURATION};
    pub use crate::kind::{TransitionKind, TransitionSettings};
    pub use crate::layer::{Layer, LayerIndex, LayerStack};
    pub use crate::timeline::Timeline;
    pub use crate::wipe::{WipeEdge, WipeTransition};
    pub use vista_core::ImageHandle;
}

pub use prelude::*;
