//! HTTP method as a typed enum.
//!
//! Covers the nine RFC 9110 standard methods. This is a closed set: a
//! request arriving with anything else fails method parsing and can never
//! match a route.
//!
//! Parsing is **case-insensitive** — wire-level method strings reach the
//! matching boundary in whatever case the transport reported, and a route
//! registered as `GET` must match a request reporting `get`.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A known HTTP method.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Connect,
    Options,
    Trace,
}

impl HttpMethod {
    /// Returns the uppercase wire representation (e.g. `"GET"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get     => "GET",
            Self::Post    => "POST",
            Self::Put     => "PUT",
            Self::Patch   => "PATCH",
            Self::Delete  => "DELETE",
            Self::Head    => "HEAD",
            Self::Connect => "CONNECT",
            Self::Options => "OPTIONS",
            Self::Trace   => "TRACE",
        }
    }

    /// Case-insensitive comparison against a wire-level method string.
    pub fn matches(self, raw: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(raw)
    }
}

/// Parses a method string in any case (`"GET"`, `"get"`, `"Get"`).
impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET"     => Ok(Self::Get),
            "POST"    => Ok(Self::Post),
            "PUT"     => Ok(Self::Put),
            "PATCH"   => Ok(Self::Patch),
            "DELETE"  => Ok(Self::Delete),
            "HEAD"    => Ok(Self::Head),
            "CONNECT" => Ok(Self::Connect),
            "OPTIONS" => Ok(Self::Options),
            "TRACE"   => Ok(Self::Trace),
            _         => Err(Error::UnknownMethod { value: s.to_owned() }),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interop with hosts built on the `http` crate.
///
/// Fallible because `http::Method` admits extension methods outside the
/// nine-variant closed set.
impl TryFrom<&http::Method> for HttpMethod {
    type Error = Error;

    fn try_from(method: &http::Method) -> Result<Self, Error> {
        method.as_str().parse()
    }
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get     => http::Method::GET,
            HttpMethod::Post    => http::Method::POST,
            HttpMethod::Put     => http::Method::PUT,
            HttpMethod::Patch   => http::Method::PATCH,
            HttpMethod::Delete  => http::Method::DELETE,
            HttpMethod::Head    => http::Method::HEAD,
            HttpMethod::Connect => http::Method::CONNECT,
            HttpMethod::Options => http::Method::OPTIONS,
            HttpMethod::Trace   => http::Method::TRACE,
        }
    }
}
