//! # Destinations
//!
//! A link target is either a literal path string or a structured route that
//! renders to one. Both collapse to a single string through
//! [`Destination::normalize`], which is what gets written as the pending path.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    RawPath(String),
    Route(Route),
}

impl Destination {
    pub fn normalize(&self) -> String {
        match self {
            Destination::RawPath(path) => path.clone(),
            Destination::Route(route) => route.to_string(),
        }
    }

    /// The path portion, without query string or fragment.
    pub fn pathname(&self) -> &str {
        match self {
            Destination::RawPath(path) => path
                .split(['?', '#'])
                .next()
                .unwrap_or(path.as_str()),
            Destination::Route(route) => &route.pathname,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::RawPath(path) => f.write_str(path),
            Destination::Route(route) => route.fmt(f),
        }
    }
}

impl From<&str> for Destination {
    fn from(path: &str) -> Self {
        Destination::RawPath(path.to_string())
    }
}

impl From<String> for Destination {
    fn from(path: String) -> Self {
        Destination::RawPath(path)
    }
}

impl From<Route> for Destination {
    fn from(route: Route) -> Self {
        Destination::Route(route)
    }
}

/// Structured route: `pathname[?key=value&...][#hash]`.
///
/// Query parameters are kept in a `BTreeMap` so the rendered string is stable
/// regardless of insertion order. Values are written verbatim, not escaped.
///
/// In config files the pathname is spelled `href`, matching `[[links]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Route {
    #[serde(rename = "href")]
    pub pathname: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub query: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl Route {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Default::default()
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pathname)?;

        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }

        if let Some(hash) = self.hash.as_deref() {
            let hash = hash.trim_start_matches('#');
            if !hash.is_empty() {
                write!(f, "#{hash}")?;
            }
        }
        Ok(())
    }
}
