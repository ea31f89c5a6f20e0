//! Locations and their directional views

use serde::{Deserialize, Serialize};
use vista_core::{Direction, ImageHandle, LocationId};

/// What the player sees facing one direction, and where stepping forward leads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    /// Image shown for this facing
    #[serde(default)]
    image: Option<ImageHandle>,
    /// Location reached by moving forward
    #[serde(default)]
    exit: Option<LocationId>,
}

impl View {
    /// Create an empty view: nothing to show, no exit
    pub const fn new() -> Self {
        Self {
            image: None,
            exit: None,
        }
    }

    /// Set the image
    pub fn with_image(mut self, image: impl Into<ImageHandle>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the forward exit
    pub fn with_exit(mut self, exit: impl Into<LocationId>) -> Self {
        self.exit = Some(exit.into());
        self
    }

    /// Image for this facing
    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    /// Forward exit
    pub fn exit(&self) -> Option<&LocationId> {
        self.exit.as_ref()
    }

    /// Check if moving forward is possible
    pub fn has_exit(&self) -> bool {
        self.exit.is_some()
    }
}

/// A node of the location graph with one view per cardinal direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    id: LocationId,
    views: [View; 4],
    default_entry_direction: Direction,
}

impl Location {
    /// Create a location whose four views are all empty
    pub fn new(name: impl Into<LocationId>) -> Self {
        Self {
            id: name.into(),
            views: Default::default(),
            default_entry_direction: Direction::North,
        }
    }

    /// Set the view for one direction
    pub fn with_view(mut self, direction: Direction, view: View) -> Self {
        self.views[direction.index()] = view;
        self
    }

    /// Set the facing used when this location is the session start
    pub fn with_default_entry(mut self, direction: Direction) -> Self {
        self.default_entry_direction = direction;
        self
    }

    /// Location identifier
    pub fn id(&self) -> &LocationId {
        &self.id
    }

    /// Location name
    pub fn name(&self) -> &str {
        self.id.as_str()
    }

    /// Facing used when entering at session start
    pub fn default_entry_direction(&self) -> Direction {
        self.default_entry_direction
    }

    /// View for a direction. Always present, possibly empty.
    pub fn view(&self, direction: Direction) -> &View {
        &self.views[direction.index()]
    }

    /// All views with their directions
    pub fn views(&self) -> impl Iterator<Item = (Direction, &View)> + '_ {
        Direction::ALL.into_iter().map(move |d| (d, self.view(d)))
    }

    /// Outgoing edges as `(direction, target)`
    pub fn exits(&self) -> impl Iterator<Item = (Direction, &LocationId)> + '_ {
        self.views()
            .filter_map(|(direction, view)| view.exit().map(|exit| (direction, exit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_views_are_empty() {
        let location = Location::new("Clearing")
            .with_view(
                Direction::North,
                View::new().with_image("clearing_n.png").with_exit("Path"),
            );

        assert_eq!(location.name(), "Clearing");
        assert!(location.view(Direction::North).has_exit());
        for direction in [Direction::East, Direction::South, Direction::West] {
            let view = location.view(direction);
            assert!(view.image().is_none());
            assert!(!view.has_exit());
        }
    }

    #[test]
    fn test_exits() {
        let location = Location::new("Hub")
            .with_view(Direction::East, View::new().with_exit("A"))
            .with_view(Direction::West, View::new().with_exit("B"))
            .with_default_entry(Direction::South);

        let exits: Vec<_> = location.exits().map(|(d, id)| (d, id.as_str())).collect();
        assert_eq!(exits, vec![(Direction::East, "A"), (Direction::West, "B")]);
        assert_eq!(location.default_entry_direction(), Direction::South);
    }
}
