//! Route reference data.
//!
//! Segments present the routes that can serve a ride by their display
//! names. Names come from a route lookup owned by the caller and shared
//! read-only between option builds.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::stop::{InvalidId, check_id};

/// A route identifier from the schedule feed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RouteId(Arc<str>);

impl RouteId {
    /// Parse a route identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        check_id(s)?;
        Ok(RouteId(Arc::from(s)))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.as_str())
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RouteId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RouteId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RouteId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Short description of a route for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteShort {
    pub id: RouteId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
}

impl RouteShort {
    /// Create a route description.
    pub fn new(id: RouteId, short_name: Option<String>, long_name: Option<String>) -> Self {
        Self {
            id,
            short_name,
            long_name,
        }
    }

    /// Create a description for a route the lookup does not know.
    pub fn unnamed(id: RouteId) -> Self {
        Self::new(id, None, None)
    }

    /// Returns the name to show: short name, else long name, else the id.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_options::domain::{RouteId, RouteShort};
    ///
    /// let id = RouteId::parse("R1").unwrap();
    /// let red = RouteShort::new(id.clone(), None, Some("Red Line".into()));
    /// assert_eq!(red.display_name(), "Red Line");
    ///
    /// let bus = RouteShort::new(id.clone(), Some("42".into()), Some("Mount Pleasant".into()));
    /// assert_eq!(bus.display_name(), "42");
    ///
    /// assert_eq!(RouteShort::unnamed(id).display_name(), "R1");
    /// ```
    pub fn display_name(&self) -> &str {
        self.short_name
            .as_deref()
            .or(self.long_name.as_deref())
            .unwrap_or(self.id.as_str())
    }
}

/// Resolves route identifiers to their display names.
///
/// Implementations are shared between threads building options in parallel.
pub trait RouteLookup: Send + Sync {
    /// Look up a route, returning `None` if it is unknown.
    fn route(&self, id: &RouteId) -> Option<RouteShort>;
}

/// In-memory route lookup keyed by route id.
#[derive(Debug, Clone, Default)]
pub struct RouteIndex {
    routes: HashMap<RouteId, RouteShort>,
}

impl RouteIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a route.
    pub fn insert(&mut self, route: RouteShort) {
        self.routes.insert(route.id.clone(), route);
    }

    /// Returns the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if there are no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteLookup for RouteIndex {
    fn route(&self, id: &RouteId) -> Option<RouteShort> {
        self.routes.get(id).cloned()
    }
}

impl FromIterator<RouteShort> for RouteIndex {
    fn from_iter<I: IntoIterator<Item = RouteShort>>(iter: I) -> Self {
        let mut index = RouteIndex::new();
        for route in iter {
            index.insert(route);
        }
        index
    }
}

/// Builder for creating route indexes.
///
/// Entries with invalid ids are skipped.
#[derive(Debug, Default)]
pub struct RouteIndexBuilder {
    inner: RouteIndex,
}

impl RouteIndexBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route by id with optional short and long names.
    pub fn add(mut self, id: &str, short_name: Option<&str>, long_name: Option<&str>) -> Self {
        if let Ok(id) = RouteId::parse(id) {
            self.inner.insert(RouteShort::new(
                id,
                short_name.map(str::to_string),
                long_name.map(str::to_string),
            ));
        }
        self
    }

    /// Build the index.
    pub fn build(self) -> RouteIndex {
        self.inner
    }
}
