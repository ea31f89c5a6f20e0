//! Navigation controller
//!
//! Owns the `(location, facing)` cursor into a shared location graph and
//! serializes every change of it through one transition effect. The
//! controller is either idle or transitioning. While transitioning, every
//! turn or move request is dropped (not queued) and reported as
//! [`RequestOutcome::Busy`].

use crate::error::{NavigationError, Result};
use crate::events::{NavigationEvents, ViewChange};
use crate::state::{NavigationPhase, NavigationState, RequestOutcome, Turn};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use vista_core::{Direction, LocationId};
use vista_transition::TransitionEffect;
use vista_world::{LocationGraph, View};

static EMPTY_VIEW: View = View::new();

/// State reachable from the transition's completion callback
#[derive(Debug, Default)]
struct Shared {
    transitioning: Cell<bool>,
    events: NavigationEvents,
}

impl Shared {
    fn start_transition(&self) {
        self.transitioning.set(true);
        self.events.transitioning_changed.emit(&true);
        self.events.transition_started.emit(&());
        log::debug!("Transition started");
    }

    fn finish_transition(&self) {
        self.transitioning.set(false);
        self.events.transitioning_changed.emit(&false);
        self.events.transition_finished.emit(&());
        log::debug!("Transition finished");
    }
}

/// Drives first-person navigation over a [`LocationGraph`]
pub struct NavigationController {
    graph: Arc<LocationGraph>,
    location: LocationId,
    facing: Direction,
    effect: Box<dyn TransitionEffect>,
    shared: Rc<Shared>,
    initial_content_loaded: bool,
}

impl NavigationController {
    /// Start a session at the graph's authored starting location
    pub fn new(graph: Arc<LocationGraph>, effect: Box<dyn TransitionEffect>) -> Result<Self> {
        let start = graph.start().cloned();
        Self::with_start(graph, start, effect)
    }

    /// Start a session at `start`, facing its default entry direction.
    ///
    /// The first view is shown immediately, without a transition. A missing
    /// or unknown start is fatal for the session and logged as an error.
    pub fn with_start(
        graph: Arc<LocationGraph>,
        start: Option<LocationId>,
        effect: Box<dyn TransitionEffect>,
    ) -> Result<Self> {
        let Some(start) = start else {
            log::error!("No starting location set for navigation");
            return Err(NavigationError::NoStartingLocation);
        };
        let Some(location) = graph.get(&start) else {
            log::error!("Starting location '{}' is not in the location graph", start);
            return Err(NavigationError::UnknownLocation(start));
        };
        let facing = location.default_entry_direction();

        let mut controller = Self {
            graph,
            location: start,
            facing,
            effect,
            shared: Rc::new(Shared::default()),
            initial_content_loaded: false,
        };
        log::info!(
            "Starting at {} facing {} ({} transition)",
            controller.location,
            controller.facing,
            controller.effect.name()
        );
        controller.refresh_view();
        Ok(controller)
    }

    // Queries

    /// The shared location graph
    pub fn graph(&self) -> &Arc<LocationGraph> {
        &self.graph
    }

    /// Current location
    pub fn current_location(&self) -> &LocationId {
        &self.location
    }

    /// Current facing
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// View for the current location and facing (empty if the graph has none)
    pub fn current_view(&self) -> &View {
        self.graph
            .view(&self.location, self.facing)
            .unwrap_or(&EMPTY_VIEW)
    }

    /// Check if the current view has an exit. Safe to call while transitioning.
    pub fn can_move_forward(&self) -> bool {
        self.current_view().has_exit()
    }

    /// Check if a transition is in flight
    pub fn is_transitioning(&self) -> bool {
        self.shared.transitioning.get()
    }

    /// Check if requests would be processed right now
    pub fn can_accept_input(&self) -> bool {
        !self.is_transitioning()
    }

    /// Current phase
    pub fn phase(&self) -> NavigationPhase {
        if self.is_transitioning() {
            NavigationPhase::Transitioning
        } else {
            NavigationPhase::Idle
        }
    }

    /// Snapshot of the cursor and phase
    pub fn state(&self) -> NavigationState {
        NavigationState {
            location: self.location.clone(),
            facing: self.facing,
            phase: self.phase(),
        }
    }

    /// Notification channels
    pub fn events(&self) -> &NavigationEvents {
        &self.shared.events
    }

    /// The transition effect, for renderers reading its layers
    pub fn effect(&self) -> &dyn TransitionEffect {
        self.effect.as_ref()
    }

    // Requests

    /// Step through the exit of the current view, keeping the facing
    pub fn move_forward(&mut self) -> RequestOutcome {
        if self.is_transitioning() {
            log::debug!("Cannot move forward - currently transitioning");
            return RequestOutcome::Busy;
        }

        let Some(exit) = self.current_view().exit().cloned() else {
            log::debug!(
                "Cannot move forward from {} facing {}: no exit",
                self.location,
                self.facing
            );
            return RequestOutcome::Blocked;
        };
        if !self.graph.contains(&exit) {
            log::warn!(
                "Exit from {} facing {} leads to unknown location '{}'",
                self.location,
                self.facing,
                exit
            );
            return RequestOutcome::Blocked;
        }

        self.location = exit;
        log::debug!("Moved to {} facing {}", self.location, self.facing);
        self.refresh_view();
        RequestOutcome::Accepted
    }

    /// Quarter turn counter-clockwise
    pub fn turn_left(&mut self) -> RequestOutcome {
        self.turn(Turn::Left)
    }

    /// Quarter turn clockwise
    pub fn turn_right(&mut self) -> RequestOutcome {
        self.turn(Turn::Right)
    }

    /// Half turn
    pub fn turn_around(&mut self) -> RequestOutcome {
        self.turn(Turn::Around)
    }

    /// Turn in place
    pub fn turn(&mut self, turn: Turn) -> RequestOutcome {
        if self.is_transitioning() {
            log::debug!("Cannot turn {:?} - currently transitioning", turn);
            return RequestOutcome::Busy;
        }

        self.facing = turn.apply(self.facing);
        log::debug!("Turned {:?}, now facing {}", turn, self.facing);
        self.refresh_view();
        RequestOutcome::Accepted
    }

    /// Jump to any location with the given facing
    pub fn load_location(&mut self, id: LocationId, facing: Direction) -> Result<RequestOutcome> {
        if !self.graph.contains(&id) {
            log::warn!("Attempted to load unknown location '{}'", id);
            return Err(NavigationError::UnknownLocation(id));
        }
        if self.is_transitioning() {
            log::debug!("Cannot load {} - currently transitioning", id);
            return Ok(RequestOutcome::Busy);
        }

        self.location = id;
        self.facing = facing;
        log::info!("Loaded location {} facing {}", self.location, self.facing);
        self.refresh_view();
        Ok(RequestOutcome::Accepted)
    }

    // Scheduling

    /// Advance the in-flight transition by one tick
    pub fn update(&mut self, delta_seconds: f32) {
        self.effect.update(delta_seconds);
    }

    /// Change the transition length for future runs
    pub fn set_transition_duration(&mut self, seconds: f32) {
        self.effect.set_duration(seconds);
    }

    /// Show the current view: immediately the first time, through a
    /// transition afterwards
    fn refresh_view(&mut self) {
        let image = self.current_view().image().cloned();
        if image.is_none() {
            log::debug!("No image for {} facing {}", self.location, self.facing);
        }

        self.shared.events.view_changed.emit(&ViewChange {
            location: self.location.clone(),
            facing: self.facing,
        });

        if !self.initial_content_loaded {
            self.effect.display_immediately(image);
            self.initial_content_loaded = true;
            return;
        }

        self.shared.start_transition();
        self.effect.set_target(image);
        let shared = Rc::clone(&self.shared);
        self.effect
            .begin(Some(Box::new(move || shared.finish_transition())));
    }
}

impl fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("location", &self.location)
            .field("facing", &self.facing)
            .field("phase", &self.phase())
            .field("effect", &self.effect.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_transition::{CutTransition, FadeTransition};
    use vista_world::Location;

    fn corridor() -> Arc<LocationGraph> {
        let graph = LocationGraph::new()
            .with_location(
                Location::new("A")
                    .with_view(Direction::North, View::new().with_image("a_n").with_exit("B"))
                    .with_view(Direction::South, View::new().with_image("a_s")),
            )
            .and_then(|g| {
                g.with_location(
                    Location::new("B")
                        .with_view(Direction::South, View::new().with_image("b_s").with_exit("A"))
                        .with_default_entry(Direction::South),
                )
            })
            .unwrap()
            .with_start("A");
        Arc::new(graph)
    }

    #[test]
    fn test_missing_start_is_fatal() {
        let graph = Arc::new(LocationGraph::new());
        let err = NavigationController::new(graph, Box::new(CutTransition::new())).unwrap_err();
        assert_eq!(err, NavigationError::NoStartingLocation);
    }

    #[test]
    fn test_unknown_start_is_fatal() {
        let err = NavigationController::with_start(
            corridor(),
            Some(LocationId::new("Z")),
            Box::new(CutTransition::new()),
        )
        .unwrap_err();
        assert_eq!(err, NavigationError::UnknownLocation(LocationId::new("Z")));
    }

    #[test]
    fn test_first_view_shown_without_transition() {
        let nav = NavigationController::new(corridor(), Box::new(FadeTransition::new())).unwrap();
        assert!(!nav.is_transitioning());
        assert!(nav.effect().layers().is_settled());
        assert_eq!(nav.effect().layers().visible_image().map(|i| i.key()), Some("a_n"));
    }

    #[test]
    fn test_start_uses_default_entry() {
        let nav = NavigationController::with_start(
            corridor(),
            Some(LocationId::new("B")),
            Box::new(CutTransition::new()),
        )
        .unwrap();
        assert_eq!(nav.facing(), Direction::South);
        assert!(nav.can_move_forward());
    }

    #[test]
    fn test_load_location() {
        let mut nav =
            NavigationController::new(corridor(), Box::new(CutTransition::new())).unwrap();
        assert_eq!(
            nav.load_location(LocationId::new("B"), Direction::West),
            Ok(RequestOutcome::Accepted)
        );
        assert_eq!(nav.current_location().as_str(), "B");
        assert_eq!(nav.facing(), Direction::West);
        assert!(nav.load_location(LocationId::new("Q"), Direction::North).is_err());
    }

    #[test]
    fn test_load_location_busy() {
        let mut nav =
            NavigationController::new(corridor(), Box::new(FadeTransition::new())).unwrap();
        nav.turn_around();
        assert_eq!(
            nav.load_location(LocationId::new("B"), Direction::West),
            Ok(RequestOutcome::Busy)
        );
        assert_eq!(nav.current_location().as_str(), "A");
    }

    #[test]
    fn test_dangling_exit_is_blocked() {
        let graph = LocationGraph::new()
            .with_location(
                Location::new("Edge").with_view(Direction::North, View::new().with_exit("Void")),
            )
            .unwrap()
            .with_start("Edge");
        let mut nav =
            NavigationController::new(Arc::new(graph), Box::new(CutTransition::new())).unwrap();

        assert!(nav.can_move_forward());
        assert_eq!(nav.move_forward(), RequestOutcome::Blocked);
        assert_eq!(nav.current_location().as_str(), "Edge");
    }
}
