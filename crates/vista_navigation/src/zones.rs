//! Pointer screen zones
//!
//! Splits the screen into click zones the way point-and-click explorers
//! usually do: the left and right bands turn, the top band moves forward and
//! the bottom band turns around. Coordinates are in pixels with the origin at
//! the top-left corner.

use crate::controller::NavigationController;
use crate::state::{RequestOutcome, Turn};
use serde::{Deserialize, Serialize};

/// Click zone under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenZone {
    /// Not interactive
    None,
    /// Top band, only when the current view has an exit
    Forward,
    /// Left band
    TurnLeft,
    /// Right band
    TurnRight,
    /// Bottom band
    TurnAround,
}

impl Default for ScreenZone {
    fn default() -> Self {
        Self::None
    }
}

/// Cursor a renderer should show; resolved to an actual cursor image elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorKind {
    Default,
    Forward,
    TurnLeft,
    TurnRight,
    TurnAround,
}

impl ScreenZone {
    /// Cursor for this zone
    pub fn cursor(self) -> CursorKind {
        match self {
            Self::None => CursorKind::Default,
            Self::Forward => CursorKind::Forward,
            Self::TurnLeft => CursorKind::TurnLeft,
            Self::TurnRight => CursorKind::TurnRight,
            Self::TurnAround => CursorKind::TurnAround,
        }
    }

    /// Issue the request for this zone. `None` for the non-interactive zone.
    pub fn dispatch(self, controller: &mut NavigationController) -> Option<RequestOutcome> {
        match self {
            Self::None => None,
            Self::Forward => Some(controller.move_forward()),
            Self::TurnLeft => Some(controller.turn(Turn::Left)),
            Self::TurnRight => Some(controller.turn(Turn::Right)),
            Self::TurnAround => Some(controller.turn(Turn::Around)),
        }
    }
}

/// Zone sizes as fractions of the screen, each clamped to `0.0..=0.5`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneLayout {
    /// Width of each side band
    pub side_width: f32,
    /// Height of the forward band
    pub forward_height: f32,
    /// Height of the turn-around band
    pub turn_around_height: f32,
}

impl Default for ZoneLayout {
    fn default() -> Self {
        Self {
            side_width: 0.2,
            forward_height: 0.4,
            turn_around_height: 0.15,
        }
    }
}

impl ZoneLayout {
    /// Copy with every fraction clamped to `0.0..=0.5`
    pub fn clamped(self) -> Self {
        let clamp = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 0.5) };
        Self {
            side_width: clamp(self.side_width),
            forward_height: clamp(self.forward_height),
            turn_around_height: clamp(self.turn_around_height),
        }
    }

    /// Zone at `(x, y)` on a `width` x `height` screen.
    ///
    /// Side bands win over the top and bottom bands. Inside the top band the
    /// zone is `Forward` only when `can_move_forward` holds, `None` otherwise.
    pub fn classify(
        &self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        can_move_forward: bool,
    ) -> ScreenZone {
        let layout = self.clamped();

        if x < width * layout.side_width {
            ScreenZone::TurnLeft
        } else if x > width * (1.0 - layout.side_width) {
            ScreenZone::TurnRight
        } else if y < height * layout.forward_height {
            if can_move_forward {
                ScreenZone::Forward
            } else {
                ScreenZone::None
            }
        } else if y > height * (1.0 - layout.turn_around_height) {
            ScreenZone::TurnAround
        } else {
            ScreenZone::None
        }
    }
}

/// Tracks the hovered zone and turns clicks into controller requests
#[derive(Debug, Clone, Default)]
pub struct ZoneTracker {
    layout: ZoneLayout,
    hover: ScreenZone,
}

impl ZoneTracker {
    /// Create a tracker
    pub fn new(layout: ZoneLayout) -> Self {
        Self {
            layout: layout.clamped(),
            hover: ScreenZone::None,
        }
    }

    /// Zone currently under the pointer
    pub fn hover(&self) -> ScreenZone {
        self.hover
    }

    /// Update the hovered zone. Returns the new cursor when the zone changed.
    ///
    /// The forward band is offered only when the exit ahead leads to a known
    /// location.
    pub fn pointer_moved(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        controller: &NavigationController,
    ) -> Option<CursorKind> {
        let reachable = controller
            .current_view()
            .exit()
            .is_some_and(|exit| controller.graph().contains(exit));
        let zone = self.layout.classify(x, y, width, height, reachable);
        if zone == self.hover {
            return None;
        }
        self.hover = zone;
        Some(zone.cursor())
    }

    /// Primary click at the last pointer position
    pub fn click(&self, controller: &mut NavigationController) -> Option<RequestOutcome> {
        if !controller.can_accept_input() {
            return Some(RequestOutcome::Busy);
        }
        let outcome = self.hover.dispatch(controller);
        if outcome.is_none() {
            log::debug!("Clicked in a non-interactive zone");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 1000.0;
    const H: f32 = 500.0;

    #[test]
    fn test_classify() {
        let layout = ZoneLayout::default();
        assert_eq!(layout.classify(10.0, 250.0, W, H, true), ScreenZone::TurnLeft);
        assert_eq!(layout.classify(990.0, 250.0, W, H, true), ScreenZone::TurnRight);
        assert_eq!(layout.classify(500.0, 10.0, W, H, true), ScreenZone::Forward);
        assert_eq!(layout.classify(500.0, 10.0, W, H, false), ScreenZone::None);
        assert_eq!(layout.classify(500.0, 490.0, W, H, true), ScreenZone::TurnAround);
        assert_eq!(layout.classify(500.0, 300.0, W, H, true), ScreenZone::None);
    }

    #[test]
    fn test_sides_win_over_bands() {
        let layout = ZoneLayout::default();
        assert_eq!(layout.classify(5.0, 5.0, W, H, true), ScreenZone::TurnLeft);
        assert_eq!(layout.classify(995.0, 495.0, W, H, true), ScreenZone::TurnRight);
    }

    #[test]
    fn test_layout_clamps() {
        let layout = ZoneLayout {
            side_width: 0.9,
            forward_height: -1.0,
            turn_around_height: f32::NAN,
        }
        .clamped();
        assert_eq!(layout.side_width, 0.5);
        assert_eq!(layout.forward_height, 0.0);
        assert_eq!(layout.turn_around_height, 0.0);
    }

    #[test]
    fn test_cursor_mapping() {
        assert_eq!(ScreenZone::None.cursor(), CursorKind::Default);
        assert_eq!(ScreenZone::TurnAround.cursor(), CursorKind::TurnAround);
    }
}
