//! The result of a successful dispatch attempt.
//!
//! A [`RouteMatch`] borrows the matched [`Route`] from the registry and
//! carries the captured path parameters in the order their placeholders
//! appear in the pattern. It is created fresh per dispatch attempt and
//! discarded once the caller has consumed it.

use std::fmt;

use crate::route::Route;

/// A captured path parameter value.
///
/// Purely numeric captures are coerced to integers on insertion; anything
/// else stays a string. So `/users/35/name/amir` against
/// `/users/{id}/name/{name}` binds `id` to `Int(35)` and `name` to
/// `Str("amir")`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Str(String),
}

impl ParamValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(s) => Some(s),
        }
    }
}

/// Coercing conversion: numeric strings become [`ParamValue::Int`].
impl From<&str> for ParamValue {
    fn from(raw: &str) -> Self {
        raw.parse::<i64>().map_or_else(|_| Self::Str(raw.to_owned()), Self::Int)
    }
}

impl From<String> for ParamValue {
    fn from(raw: String) -> Self {
        raw.parse::<i64>().map_or(Self::Str(raw), Self::Int)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl PartialEq<i64> for ParamValue {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<&str> for ParamValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// One matched route plus its extracted parameters.
#[derive(Debug)]
pub struct RouteMatch<'r> {
    route: &'r Route,
    // Vec keeps placeholder order; registries see a handful of params per
    // route, so linear lookup beats a map here.
    params: Vec<(String, ParamValue)>,
}

impl<'r> RouteMatch<'r> {
    /// An empty match for `route`. Public so substitute
    /// [`Matcher`](crate::Matcher) implementations can produce results.
    pub fn new(route: &'r Route) -> Self {
        Self { route, params: Vec::new() }
    }

    /// The matched route, borrowed from the registry.
    pub fn route(&self) -> &'r Route {
        self.route
    }

    /// All parameters in placeholder order.
    pub fn params(&self) -> &[(String, ParamValue)] {
        &self.params
    }

    /// Reads one named parameter. Absent keys read as `None` — never a
    /// panic.
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Writes one named parameter, coercing numeric strings on the way in.
    /// An existing key is overwritten in place, keeping its position.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name, value)),
        }
        self
    }

    /// Replaces the whole parameter map.
    pub fn set_params(&mut self, params: Vec<(String, ParamValue)>) -> &mut Self {
        self.params = params;
        self
    }
}
