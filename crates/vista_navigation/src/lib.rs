//! Vista Navigation - First-Person Node Navigation
//!
//! This crate moves a player through a location graph one hop at a time and
//! plays a transition for every change of view.
//!
//! # Features
//!
//! - Turn left/right/around and move forward through the current view's exit
//! - Idle/transitioning state machine; requests while transitioning are dropped
//! - Synchronous notifications for transition start/finish and view changes
//! - Screen-zone pointer adapter with cursor hints
//!
//! # Example
//!
//! ```ignore
//! use vista_navigation::prelude::*;
//!
//! let mut nav = NavigationController::new(graph, Box::new(FadeTransition::new()))?;
//! nav.events().transition_finished.subscribe(|_| log::info!("ready"));
//!
//! nav.turn_right();
//! while nav.is_transitioning() {
//!     nav.update(1.0 / 60.0);
//! }
//! ```

pub mod controller;
pub mod error;
pub mod events;
pub mod state;
pub mod zones;

pub mod prelude {
    pub use crate::controller::NavigationController;
    pub use crate::error::{NavigationError, Result};
    pub use crate::events::{NavigationEvents, ViewChange};
    pub use crate::state::{NavigationPhase, NavigationState, RequestOutcome, Turn};
    pub use crate::zones::{CursorKind, ScreenZone, ZoneLayout, ZoneTracker};
    pub use vista_core::{Direction, ImageHandle, LocationId};
    pub use vista_transition::{FadeTransition, TransitionEffect};
    pub use vista_world::{Location, LocationGraph, View};
}

pub use prelude::*;
