//! Host-declared middleware capability set.
//!
//! The router never executes middleware — that is the host framework's
//! pipeline. What the router *does* owe the host is early validation:
//! a route referencing a middleware nobody registered is a typo that
//! should fail at registration time, not at the first request.
//!
//! The host declares the identifiers it can resolve, up front, and hands
//! the registry to the [`Router`](crate::Router). No reflection, no
//! global lookup.

use std::collections::HashSet;

/// The set of middleware identifiers the host application can resolve.
///
/// ```
/// use strada::MiddlewareRegistry;
///
/// let known = MiddlewareRegistry::new()
///     .with("auth")
///     .with("rate-limit");
///
/// assert!(known.contains("auth"));
/// assert!(!known.contains("cors"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MiddlewareRegistry {
    known: HashSet<String>,
}

impl MiddlewareRegistry {
    /// An empty registry — every middleware reference is rejected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares one identifier. Returns `self` for chaining.
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.known.insert(name.into());
        self
    }

    /// Declares one identifier on an existing registry.
    pub fn declare(&mut self, name: impl Into<String>) {
        self.known.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.known.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for MiddlewareRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { known: iter.into_iter().map(Into::into).collect() }
    }
}
