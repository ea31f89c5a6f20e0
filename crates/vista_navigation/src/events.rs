//! Navigation notifications
//!
//! Four independent channels, all synchronous and all optional. For one
//! accepted request the order is:
//!
//! 1. `view_changed` with the new location and facing
//! 2. `transitioning_changed(true)`, then `transition_started`
//! 3. once the transition completes: `transitioning_changed(false)`, then
//!    `transition_finished`
//!
//! Handlers run inside the controller call that triggered them and must not
//! call back into the controller.

use serde::{Deserialize, Serialize};
use vista_core::{Direction, LocationId};
use vista_event::Signal;

/// Where the player now stands and faces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewChange {
    /// Current location
    pub location: LocationId,
    /// Current facing
    pub facing: Direction,
}

/// Observer channels published by the navigation controller
#[derive(Debug, Default)]
pub struct NavigationEvents {
    /// Carries the new transitioning flag each time it flips
    pub transitioning_changed: Signal<bool>,
    /// A transition has started
    pub transition_started: Signal<()>,
    /// A transition has finished
    pub transition_finished: Signal<()>,
    /// Location or facing changed
    pub view_changed: Signal<ViewChange>,
}

impl NavigationEvents {
    /// Create empty channels
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every subscriber from every channel
    pub fn clear(&self) {
        self.transitioning_changed.clear();
        self.transition_started.clear();
        self.transition_finished.clear();
        self.view_changed.clear();
    }
}
