//! Navigation state snapshot and request outcomes

use serde::{Deserialize, Serialize};
use vista_core::{Direction, LocationId};

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationPhase {
    /// Accepting requests
    Idle,
    /// A transition is in flight; requests are dropped
    Transitioning,
}

impl NavigationPhase {
    /// Check if input should be processed
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Point-in-time copy of the controller's cursor into the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Current location
    pub location: LocationId,
    /// Current facing
    pub facing: Direction,
    /// Current phase
    pub phase: NavigationPhase,
}

impl NavigationState {
    /// Check if a transition is in flight
    pub fn is_transitioning(&self) -> bool {
        self.phase == NavigationPhase::Transitioning
    }
}

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
    /// State changed and a transition started
    Accepted,
    /// No exit in the current facing; nothing changed
    Blocked,
    /// Dropped because a transition is in flight; nothing changed
    Busy,
}

impl RequestOutcome {
    /// Check if the request changed state
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Relative turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    Left,
    Right,
    Around,
}

impl Turn {
    /// Facing after turning from `facing`
    pub fn apply(self, facing: Direction) -> Direction {
        match self {
            Self::Left => facing.turn_left(),
            Self::Right => facing.turn_right(),
            Self::Around => facing.opposite(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_apply() {
        assert_eq!(Turn::Left.apply(Direction::North), Direction::West);
        assert_eq!(Turn::Right.apply(Direction::North), Direction::East);
        assert_eq!(Turn::Around.apply(Direction::East), Direction::West);
    }

    #[test]
    fn test_state_serializes() {
        let state = NavigationState {
            location: LocationId::new("Start"),
            facing: Direction::North,
            phase: NavigationPhase::Idle,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"location":"Start","facing":"north","phase":"idle"}"#);
        assert!(!state.is_transitioning());
        assert!(state.phase.accepts_input());
    }
}
