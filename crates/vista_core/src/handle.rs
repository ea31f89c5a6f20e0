//! Opaque handles shared across crates
//!
//! Neither handle is inspected by navigation code. An [`ImageHandle`] is a key
//! the rendering collaborator resolves to a texture. A [`LocationId`] names a
//! node of the location graph.

use std::string::String;
use std::sync::Arc;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Opaque reference to a still image, understood only by the renderer
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ImageHandle(Arc<str>);

impl ImageHandle {
    /// Create a handle from a renderer key (usually an asset path)
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(Arc::from(key.as_ref()))
    }

    /// The renderer key
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl From<String> for ImageHandle {
    fn from(key: String) -> Self {
        Self(Arc::from(key))
    }
}

impl From<&str> for ImageHandle {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<ImageHandle> for String {
    fn from(handle: ImageHandle) -> Self {
        handle.0.as_ref().to_owned()
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageHandle({})", self.0)
    }
}

/// Identifier of a location, equal to the location's authored name
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LocationId(Arc<str>);

impl LocationId {
    /// Create an id from a location name
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// The location name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the name is empty (never valid for a stored location)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for LocationId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&str> for LocationId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<LocationId> for String {
    fn from(id: LocationId) -> Self {
        id.0.as_ref().to_owned()
    }
}

impl fmt::Debug for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationId({})", self.0)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_compare_by_key() {
        let a = ImageHandle::new("forest/north.png");
        let b = ImageHandle::from("forest/north.png");
        assert_eq!(a, b);
        assert_eq!(a.key(), "forest/north.png");
        assert_ne!(a, ImageHandle::new("forest/south.png"));
    }

    #[test]
    fn test_location_id() {
        let id = LocationId::new("Start");
        assert_eq!(id.as_str(), "Start");
        assert_eq!(id.to_string(), "Start");
        assert!(!id.is_empty());
        assert!(LocationId::new("").is_empty());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let id: LocationId = serde_json::from_str("\"Room2\"").unwrap();
        assert_eq!(id, LocationId::new("Room2"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"Room2\"");
    }
}
