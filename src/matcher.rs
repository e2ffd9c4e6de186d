//! Pattern matching: one (method, path) pair against one route.
//!
//! # How a pattern becomes a regex
//!
//! The route's path pattern is compiled on every match call — no cache, by
//! design: the registry stays a dumb list and the matcher stays stateless.
//! Callers needing more throughput can front this with a compiled-pattern
//! cache keyed by route name without changing observable behavior.
//!
//! Compilation turns every placeholder into a *named* capture group:
//!
//! ```text
//! /users/{id}/posts/{slug}        pattern as registered
//!        ↓  constraint: id → \d+
//! ^/users/(?P<id>\d+)/posts/(?P<slug>[a-zA-Z0-9_-]+)$
//! ```
//!
//! - A placeholder with a registered constraint gets that fragment as its
//!   group body, inserted **verbatim** — the matcher does not sanitize it.
//!   A malformed fragment therefore surfaces as
//!   [`Error::InvalidPattern`], a configuration failure distinct from an
//!   ordinary miss.
//! - A placeholder without a constraint gets the default token pattern
//!   `[a-zA-Z0-9_-]+`.
//! - A `{name:qualifier}` qualifier is ignored entirely; only `name` is
//!   used, both for constraint lookup and for the binding.
//! - The compiled pattern is anchored `^…$`: whole-path matches only,
//!   `/resource` never matches `/resource/extra`.
//!
//! Named groups are what keep extraction honest when a constraint fragment
//! contains capture groups of its own — bindings are read back by name, so
//! inner groups cannot shift them. A path reusing one placeholder name
//! twice fails compilation (duplicate group name), which is the right
//! outcome for a malformed route definition.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::error::Error;
use crate::route::Route;
use crate::route_match::RouteMatch;

/// What a placeholder captures when no constraint narrows it: one or more
/// letters, digits, underscores, or hyphens.
const DEFAULT_TOKEN: &str = "[a-zA-Z0-9_-]+";

/// Recognizes `{name}` and `{name:qualifier}` placeholders.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)(?::[^}]*)?\}").expect("placeholder pattern is valid"));

/// The matching seam between [`Router`](crate::Router) and the pattern
/// engine.
///
/// The router is constructed with its matcher passed explicitly, so tests
/// (and exotic hosts) can substitute their own implementation.
pub trait Matcher {
    /// Matches a request's method + path against one route.
    ///
    /// `Ok(None)` is an ordinary miss. `Err` is reserved for
    /// configuration failures such as an invalid constraint fragment.
    fn matches<'r>(
        &self,
        method: &str,
        path: &str,
        route: &'r Route,
    ) -> Result<Option<RouteMatch<'r>>, Error>;
}

/// The default regex-backed matcher.
///
/// Stateless and `Copy`; the `regex` engine it builds on is linear-time,
/// so a hostile request path cannot trigger pathological backtracking.
#[derive(Clone, Copy, Debug, Default)]
pub struct PatternMatcher;

impl Matcher for PatternMatcher {
    fn matches<'r>(
        &self,
        method: &str,
        path: &str,
        route: &'r Route,
    ) -> Result<Option<RouteMatch<'r>>, Error> {
        // Cheap rejection before any regex work.
        if !route.method().matches(method) {
            return Ok(None);
        }

        let mut names = Vec::new();
        let pattern = PLACEHOLDER.replace_all(route.path(), |caps: &regex::Captures<'_>| {
            let name = caps[1].to_owned();
            let body = route
                .constraints()
                .get(&name)
                .map_or(DEFAULT_TOKEN, String::as_str);
            let group = format!("(?P<{name}>{body})");
            names.push(name);
            group
        });

        let anchored = format!("^{pattern}$");
        trace!(route = route.name(), pattern = %anchored, "compiled route pattern");

        let compiled = Regex::new(&anchored).map_err(|source| Error::InvalidPattern {
            route: route.name().to_owned(),
            source,
        })?;

        let Some(captures) = compiled.captures(path) else {
            return Ok(None);
        };

        // Zip placeholder names with their captures in pattern order;
        // set_param coerces numeric values on the way in.
        let mut matched = RouteMatch::new(route);
        for name in names {
            if let Some(capture) = captures.name(&name) {
                matched.set_param(name, capture.as_str());
            }
        }

        Ok(Some(matched))
    }
}
