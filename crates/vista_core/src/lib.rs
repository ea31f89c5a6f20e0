//! # vista_core - Vista Core
//!
//! Small shared primitives used by every other Vista crate:
//! - **Direction**: the four cardinal facings and the closed turn algebra
//! - **ImageHandle**: opaque key for a still image, resolved by the renderer
//! - **LocationId**: name of a node in the location graph

pub mod direction;
pub mod handle;

pub use direction::*;
pub use handle::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::direction::Direction;
    pub use crate::handle::{ImageHandle, LocationId};
}
