//! Authored content files
//!
//! A world file lists locations by name; exits refer to other locations by
//! name. TOML example:
//!
//! ```toml
//! start = "Beach"
//!
//! [[locations]]
//! name = "Beach"
//! default_entry_direction = "north"
//! north = { image = "beach_n.png", exit = "Jungle" }
//! south = { image = "beach_s.png" }
//!
//! [[locations]]
//! name = "Jungle"
//! south = { image = "jungle_s.png", exit = "Beach" }
//! ```
//!
//! Directions left out become empty views. Files ending in `.json` are read
//! as JSON with the same shape; everything else is read as TOML.

use crate::error::{Result, WorldError};
use crate::graph::LocationGraph;
use crate::location::{Location, View};
use serde::{Deserialize, Serialize};
use std::path::Path;
use vista_core::{Direction, LocationId};

/// Serialized form of a whole world
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldFile {
    /// Starting location
    #[serde(default)]
    pub start: Option<LocationId>,
    /// Locations
    #[serde(default)]
    pub locations: Vec<LocationEntry>,
}

/// Serialized form of one location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationEntry {
    /// Location name
    pub name: String,
    /// Facing used at session start
    #[serde(default)]
    pub default_entry_direction: Direction,
    #[serde(default)]
    pub north: Option<View>,
    #[serde(default)]
    pub east: Option<View>,
    #[serde(default)]
    pub south: Option<View>,
    #[serde(default)]
    pub west: Option<View>,
}

impl LocationEntry {
    fn into_location(self) -> Location {
        let mut location =
            Location::new(self.name).with_default_entry(self.default_entry_direction);
        let views = [
            (Direction::North, self.north),
            (Direction::East, self.east),
            (Direction::South, self.south),
            (Direction::West, self.west),
        ];
        for (direction, view) in views {
            if let Some(view) = view {
                location = location.with_view(direction, view);
            }
        }
        location
    }
}

impl WorldFile {
    /// Build the graph, warning about exits to unknown locations
    pub fn into_graph(self) -> Result<LocationGraph> {
        let mut graph = LocationGraph::new();
        for entry in self.locations {
            graph.insert(entry.into_location())?;
        }
        graph.set_start(self.start);

        for edge in graph.dangling_exits() {
            log::warn!(
                "Location '{}' facing {} exits to unknown location '{}'",
                edge.from,
                edge.direction,
                edge.to
            );
        }
        if let Some(start) = graph.start() {
            if !graph.contains(start) {
                log::warn!("Starting location '{}' is not defined", start);
            }
        }

        Ok(graph)
    }
}

impl LocationGraph {
    /// Parse a TOML world
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: WorldFile = toml::from_str(source).map_err(|e| WorldError::Parse {
            path: "<toml>".into(),
            message: e.to_string(),
        })?;
        file.into_graph()
    }

    /// Parse a JSON world
    pub fn from_json_str(source: &str) -> Result<Self> {
        let file: WorldFile = serde_json::from_str(source).map_err(|e| WorldError::Parse {
            path: "<json>".into(),
            message: e.to_string(),
        })?;
        file.into_graph()
    }

    /// Load a world file, picking the format by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let parsed = if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_toml_str(&source)
        };

        let graph = parsed.map_err(|e| match e {
            WorldError::Parse { message, .. } => WorldError::Parse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;

        log::info!("Loaded {} locations from {}", graph.len(), path.display());
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISLE: &str = r#"
        start = "Beach"

        [[locations]]
        name = "Beach"
        north = { image = "beach_n.png", exit = "Jungle" }
        south = { image = "beach_s.png" }

        [[locations]]
        name = "Jungle"
        default_entry_direction = "south"
        south = { image = "jungle_s.png", exit = "Beach" }
    "#;

    #[test]
    fn test_toml_world() {
        let graph = LocationGraph::from_toml_str(ISLE).unwrap();
        let beach = LocationId::new("Beach");
        let jungle = LocationId::new("Jungle");

        assert_eq!(graph.start(), Some(&beach));
        assert_eq!(graph.exit(&beach, Direction::North), Some(&jungle));
        assert_eq!(
            graph.view(&beach, Direction::South).and_then(View::image).map(|i| i.key()),
            Some("beach_s.png")
        );
        assert!(graph.view(&beach, Direction::East).unwrap().image().is_none());
        assert_eq!(graph.get(&jungle).unwrap().default_entry_direction(), Direction::South);
    }

    #[test]
    fn test_json_world() {
        let source = r#"{
            "start": "Hall",
            "locations": [
                { "name": "Hall", "west": { "image": "hall_w.png", "exit": "Hall" } }
            ]
        }"#;
        let graph = LocationGraph::from_json_str(source).unwrap();
        let hall = LocationId::new("Hall");
        assert_eq!(graph.exit(&hall, Direction::West), Some(&hall));
    }

    #[test]
    fn test_parse_error() {
        let err = LocationGraph::from_toml_str("locations = 3").unwrap_err();
        assert!(matches!(err, WorldError::Parse { .. }));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let source = r#"
            [[locations]]
            name = "A"
            [[locations]]
            name = "A"
        "#;
        assert!(matches!(
            LocationGraph::from_toml_str(source),
            Err(WorldError::DuplicateLocation(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = LocationGraph::load("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, WorldError::Io(_)));
    }
}
