//! Unified error type.

use std::fmt;

/// The error type returned by strada's fallible operations.
///
/// Two of these are configuration errors that should abort startup
/// ([`InvalidPattern`](Error::InvalidPattern) and
/// [`UnknownMethod`](Error::UnknownMethod)); the rest are ordinary
/// outcomes the caller handles per request or per registration.
/// [`NotFound`](Error::NotFound) in particular is the expected "404"
/// signal — the host translates it into an HTTP response, it is never
/// swallowed inside the router.
#[derive(Debug)]
pub enum Error {
    /// A route with this name is already registered. The registry is
    /// left unchanged.
    DuplicateRoute { name: String },

    /// No registered route matched the request's method + path.
    NotFound { method: String, path: String },

    /// A middleware reference does not resolve to anything the host
    /// declared in its [`MiddlewareRegistry`](crate::MiddlewareRegistry).
    /// The whole middleware set for the route is rejected.
    MiddlewareNotFound { name: String },

    /// A route's path pattern (or one of its constraint fragments)
    /// compiled to an invalid regular expression. This is a malformed
    /// route definition, not a per-request miss.
    InvalidPattern { route: String, source: regex::Error },

    /// A method string matched no known HTTP method.
    UnknownMethod { value: String },
}

impl Error {
    /// `true` for the dispatch-time "no route matched" condition.
    ///
    /// The framework boundary uses this to tell a legitimate 404 apart
    /// from a misconfigured route table.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRoute { name } => {
                write!(f, "another route named `{name}` is already registered")
            }
            Self::NotFound { method, path } => {
                write!(f, "no route matches {method} {path}")
            }
            Self::MiddlewareNotFound { name } => {
                write!(f, "middleware `{name}` is not known to the host")
            }
            Self::InvalidPattern { route, source } => {
                write!(f, "route `{route}` compiles to an invalid pattern: {source}")
            }
            Self::UnknownMethod { value } => {
                write!(f, "unknown HTTP method `{value}`")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}
