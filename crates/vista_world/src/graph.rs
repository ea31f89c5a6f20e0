//! The location graph
//!
//! Nodes are locations, edges are `(location, direction, exit)` triples. The
//! graph need not be symmetric and may contain cycles. Once built it is shared
//! read-only; navigation only ever does single-hop lookups.

use crate::error::{Result, WorldError};
use crate::location::{Location, View};
use std::collections::BTreeMap;
use vista_core::{Direction, LocationId};

/// One directed edge of the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Source location
    pub from: LocationId,
    /// Facing at the source
    pub direction: Direction,
    /// Target location
    pub to: LocationId,
}

/// Immutable-after-load set of locations
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    locations: BTreeMap<LocationId, Location>,
    start: Option<LocationId>,
}

impl LocationGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location
    pub fn insert(&mut self, location: Location) -> Result<()> {
        if location.id().is_empty() {
            return Err(WorldError::EmptyName);
        }
        if self.locations.contains_key(location.id()) {
            return Err(WorldError::DuplicateLocation(location.id().clone()));
        }
        self.locations.insert(location.id().clone(), location);
        Ok(())
    }

    /// Add a location (builder form)
    pub fn with_location(mut self, location: Location) -> Result<Self> {
        self.insert(location)?;
        Ok(self)
    }

    /// Set the authored starting location
    pub fn with_start(mut self, start: impl Into<LocationId>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Set or clear the authored starting location
    pub fn set_start(&mut self, start: Option<LocationId>) {
        self.start = start;
    }

    /// Authored starting location, if any
    pub fn start(&self) -> Option<&LocationId> {
        self.start.as_ref()
    }

    /// Get a location
    pub fn get(&self, id: &LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Check if a location exists
    pub fn contains(&self, id: &LocationId) -> bool {
        self.locations.contains_key(id)
    }

    /// View of `id` facing `direction`
    pub fn view(&self, id: &LocationId, direction: Direction) -> Option<&View> {
        self.get(id).map(|location| location.view(direction))
    }

    /// Single-hop lookup: where moving forward from `id` facing `direction` leads
    pub fn exit(&self, id: &LocationId, direction: Direction) -> Option<&LocationId> {
        self.view(id, direction).and_then(View::exit)
    }

    /// Number of locations
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate locations in name order
    pub fn iter(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.values()
    }

    /// All edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.iter().flat_map(|location| {
            location.exits().map(move |(direction, to)| Edge {
                from: location.id().clone(),
                direction,
                to: to.clone(),
            })
        })
    }

    /// Edges whose target is not in the graph
    pub fn dangling_exits(&self) -> Vec<Edge> {
        self.edges().filter(|edge| !self.contains(&edge.to)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> LocationGraph {
        LocationGraph::new()
            .with_location(
                Location::new("Start").with_view(Direction::North, View::new().with_exit("Room2")),
            )
            .and_then(|g| g.with_location(Location::new("Room2")))
            .map(|g| g.with_start("Start"))
            .unwrap()
    }

    #[test]
    fn test_single_hop_lookup() {
        let graph = two_rooms();
        let start = LocationId::new("Start");

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.start(), Some(&start));
        assert_eq!(graph.exit(&start, Direction::North), Some(&LocationId::new("Room2")));
        assert_eq!(graph.exit(&start, Direction::South), None);
        assert!(graph.view(&LocationId::new("Nowhere"), Direction::North).is_none());
    }

    #[test]
    fn test_asymmetric_edges() {
        let graph = two_rooms();
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from.as_str(), "Start");
        assert_eq!(edges[0].to.as_str(), "Room2");
    }

    #[test]
    fn test_duplicate_and_empty_names() {
        let mut graph = two_rooms();
        assert!(matches!(
            graph.insert(Location::new("Room2")),
            Err(WorldError::DuplicateLocation(_))
        ));
        assert!(matches!(graph.insert(Location::new("")), Err(WorldError::EmptyName)));
    }

    #[test]
    fn test_dangling_exits() {
        let graph = LocationGraph::new()
            .with_location(
                Location::new("Loop")
                    .with_view(Direction::North, View::new().with_exit("Loop"))
                    .with_view(Direction::South, View::new().with_exit("Missing")),
            )
            .unwrap();

        let dangling = graph.dangling_exits();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].to.as_str(), "Missing");
        assert_eq!(dangling[0].direction, Direction::South);
    }
}
