//! The route entity and its declarative definition.
//!
//! A [`Route`] is built exactly once, during registration, from a
//! [`RouteDefinition`]. After that its identity — method, name, path — is
//! immutable; per-dispatch parameter bindings live on the
//! [`RouteMatch`](crate::RouteMatch) produced by the matcher, never on the
//! registry-owned route itself.

use std::collections::HashMap;

use crate::action::Action;
use crate::error::Error;
use crate::method::HttpMethod;
use crate::middleware::MiddlewareRegistry;

/// Everything needed to register one route, minus its name (the name is
/// the registry key and travels next to the definition).
///
/// The builder-style setters return `self` so a definition reads as one
/// expression:
///
/// ```
/// use strada::{Action, HttpMethod, RouteDefinition};
///
/// let def = RouteDefinition::new(HttpMethod::Get, "/users/{id}", Action::controller("UserController", "show"))
///     .constraint("id", r"\d+")
///     .middleware("auth");
/// ```
#[derive(Clone, Debug)]
pub struct RouteDefinition {
    pub method: HttpMethod,
    pub path: String,
    pub action: Action,
    /// Placeholder name → regex fragment. Empty means "default token
    /// pattern for every placeholder".
    pub constraints: HashMap<String, String>,
    /// Ordered middleware identifiers, validated against the host's
    /// [`MiddlewareRegistry`] at registration.
    pub middlewares: Vec<String>,
}

impl RouteDefinition {
    pub fn new(method: HttpMethod, path: impl Into<String>, action: Action) -> Self {
        Self {
            method,
            path: path.into(),
            action,
            constraints: HashMap::new(),
            middlewares: Vec::new(),
        }
    }

    /// Restricts one placeholder to a regex fragment.
    pub fn constraint(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.constraints.insert(name.into(), pattern.into());
        self
    }

    /// Replaces the whole constraint map.
    pub fn constraints(mut self, constraints: HashMap<String, String>) -> Self {
        self.constraints = constraints;
        self
    }

    /// Appends one middleware reference.
    pub fn middleware(mut self, name: impl Into<String>) -> Self {
        self.middlewares.push(name.into());
        self
    }

    /// Appends several middleware references, preserving order.
    pub fn middlewares<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middlewares.extend(names.into_iter().map(Into::into));
        self
    }
}

/// A registered route: a named binding of an HTTP method and a path
/// pattern to an opaque [`Action`].
///
/// Path patterns use `{name}` placeholders, optionally with a qualifier
/// the matcher ignores when extracting names (`{id:int}` binds `id`).
#[derive(Clone, Debug)]
pub struct Route {
    method: HttpMethod,
    name: String,
    path: String,
    action: Action,
    constraints: HashMap<String, String>,
    middlewares: Vec<String>,
}

impl Route {
    /// Builds the route, validating every middleware reference against the
    /// host's registry. All-or-nothing: one unknown identifier fails the
    /// whole construction and nothing is kept.
    pub(crate) fn build(
        name: String,
        def: RouteDefinition,
        known: &MiddlewareRegistry,
    ) -> Result<Self, Error> {
        for middleware in &def.middlewares {
            if !known.contains(middleware) {
                return Err(Error::MiddlewareNotFound { name: middleware.clone() });
            }
        }

        Ok(Self {
            method: def.method,
            name,
            path: def.path,
            action: def.action,
            constraints: def.constraints,
            middlewares: def.middlewares,
        })
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The unique registry key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The canonical pattern, e.g. `/users/{id}`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn constraints(&self) -> &HashMap<String, String> {
        &self.constraints
    }

    pub fn middlewares(&self) -> &[String] {
        &self.middlewares
    }
}
