//! The named-route registry and dispatcher.
//!
//! Registration appends to an insertion-ordered list keyed by unique route
//! name; dispatch walks that list and returns the first route the matcher
//! accepts. First-registered wins when several routes could structurally
//! match the same path, so registration order *is* the precedence order.
//!
//! The router is single-threaded by contract: finish registering before
//! you start dispatching, or wrap the instance in your own lock if the
//! host mutates it concurrently.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::action::Action;
use crate::error::Error;
use crate::matcher::{Matcher, PatternMatcher};
use crate::method::HttpMethod;
use crate::middleware::MiddlewareRegistry;
use crate::request::RouteRequest;
use crate::route::{Route, RouteDefinition};
use crate::route_match::RouteMatch;

/// The route registry.
///
/// Every registration method returns `Result<&mut Self>`, so a route
/// table reads as one chain:
///
/// ```
/// use strada::{Action, Router};
///
/// # fn main() -> Result<(), strada::Error> {
/// let mut router = Router::new();
/// router
///     .get("users.index", "/users", Action::controller("UserController", "index"))?
///     .post("users.store", "/users", Action::controller("UserController", "store"))?;
/// # Ok(())
/// # }
/// ```
pub struct Router {
    routes: Vec<Route>,
    matcher: Box<dyn Matcher + Send + Sync>,
    middlewares: MiddlewareRegistry,
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("middlewares", &self.middlewares)
            .finish_non_exhaustive()
    }
}

impl Router {
    /// A router backed by the default [`PatternMatcher`], with no known
    /// middlewares.
    pub fn new() -> Self {
        Self::with_matcher(PatternMatcher)
    }

    /// A router backed by an explicit matcher — the seam for substituting
    /// a test double or a caching wrapper.
    pub fn with_matcher(matcher: impl Matcher + Send + Sync + 'static) -> Self {
        Self {
            routes: Vec::new(),
            matcher: Box::new(matcher),
            middlewares: MiddlewareRegistry::new(),
        }
    }

    /// Installs the host's middleware capability set. Routes registered
    /// afterwards may only reference identifiers declared here.
    pub fn known_middlewares(mut self, middlewares: MiddlewareRegistry) -> Self {
        self.middlewares = middlewares;
        self
    }

    /// Registers one route. Fails with [`Error::DuplicateRoute`] if `name`
    /// is taken, leaving the registry unchanged.
    pub fn register(
        &mut self,
        method: HttpMethod,
        name: impl Into<String>,
        path: impl Into<String>,
        action: Action,
        constraints: Option<HashMap<String, String>>,
    ) -> Result<&mut Self, Error> {
        let mut def = RouteDefinition::new(method, path, action);
        if let Some(constraints) = constraints {
            def.constraints = constraints;
        }
        self.insert(name.into(), def)?;
        Ok(self)
    }

    /// Registers one route from a full [`RouteDefinition`], including
    /// middleware references.
    pub fn add(&mut self, name: impl Into<String>, def: RouteDefinition) -> Result<&mut Self, Error> {
        self.insert(name.into(), def)?;
        Ok(self)
    }

    pub fn get(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        action: Action,
    ) -> Result<&mut Self, Error> {
        self.register(HttpMethod::Get, name, path, action, None)
    }

    pub fn post(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        action: Action,
    ) -> Result<&mut Self, Error> {
        self.register(HttpMethod::Post, name, path, action, None)
    }

    pub fn put(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        action: Action,
    ) -> Result<&mut Self, Error> {
        self.register(HttpMethod::Put, name, path, action, None)
    }

    pub fn patch(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        action: Action,
    ) -> Result<&mut Self, Error> {
        self.register(HttpMethod::Patch, name, path, action, None)
    }

    pub fn delete(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        action: Action,
    ) -> Result<&mut Self, Error> {
        self.register(HttpMethod::Delete, name, path, action, None)
    }

    pub fn head(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        action: Action,
    ) -> Result<&mut Self, Error> {
        self.register(HttpMethod::Head, name, path, action, None)
    }

    pub fn options(
        &mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        action: Action,
    ) -> Result<&mut Self, Error> {
        self.register(HttpMethod::Options, name, path, action, None)
    }

    /// Bulk-registers a declarative table of name → definition pairs.
    ///
    /// Every entry goes through the same single-route routine, so
    /// duplicate-name and unknown-middleware failures surface exactly as
    /// they do for programmatic registration. Registration stops at the
    /// first failure; entries registered before it **stay registered** —
    /// there is no rollback. Callers needing atomicity validate the whole
    /// table before loading it.
    pub fn from_table<I, S>(&mut self, table: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = (S, RouteDefinition)>,
        S: Into<String>,
    {
        for (name, def) in table {
            self.insert(name.into(), def)?;
        }
        Ok(self)
    }

    /// Looks up a route by its unique name. No matching logic involved.
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name() == name)
    }

    /// All registered routes in registration (= precedence) order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolves a request to the first matching route and its captured
    /// parameters.
    ///
    /// Walks the registry in insertion order, delegating each route to the
    /// matcher. An exhausted registry yields [`Error::NotFound`] — the
    /// "404" signal the host translates at its boundary. Matcher
    /// configuration errors (invalid constraint fragments) propagate
    /// as-is; they are route-definition bugs, not misses.
    pub fn dispatch<'s>(&'s self, request: &impl RouteRequest) -> Result<RouteMatch<'s>, Error> {
        let method = request.method();
        let path = request.path();

        for route in &self.routes {
            trace!(route = route.name(), method, path, "trying route");
            if let Some(matched) = self.matcher.matches(method, path, route)? {
                debug!(route = route.name(), method, path, "request dispatched");
                return Ok(matched);
            }
        }

        debug!(method, path, "no route matched");
        Err(Error::NotFound { method: method.to_owned(), path: path.to_owned() })
    }

    /// The single registration routine every public entry point funnels
    /// through: duplicate-name check first, then route construction (which
    /// validates middlewares), then append.
    fn insert(&mut self, name: String, def: RouteDefinition) -> Result<(), Error> {
        if self.route(&name).is_some() {
            return Err(Error::DuplicateRoute { name });
        }

        let route = Route::build(name, def, &self.middlewares)?;
        debug!(
            route = route.name(),
            method = %route.method(),
            path = route.path(),
            "route registered"
        );
        self.routes.push(route);
        Ok(())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
