//! Vista World - Location Graph
//!
//! This crate provides the authored navigation graph.
//!
//! # Features
//!
//! - Locations with one view per cardinal direction (missing views are empty)
//! - Views carrying an optional image and an optional forward exit
//! - Single-hop exit lookup, no search
//! - TOML / JSON content files
//!
//! # Example
//!
//! ```ignore
//! use vista_world::prelude::*;
//!
//! let graph = LocationGraph::new()
//!     .with_location(
//!         Location::new("Start")
//!             .with_view(
//!                 Direction::North,
//!                 View::new().with_image("start_n.png").with_exit("Room2"),
//!             ),
//!     )?
//!     .with_location(Location::new("Room2"))?
//!     .with_start("Start");
//! ```

pub mod content;
pub mod error;
pub mod graph;
pub mod location;

pub mod prelude {
    pub use crate::content::{LocationEntry, WorldFile};
    pub use crate::error::{Result, WorldError};
    pub use crate::graph::{Edge, LocationGraph};
    pub use crate::location::{Location, View};
    pub use vista_core::{Direction, ImageHandle, LocationId};
}

pub use prelude::*;
