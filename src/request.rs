//! The dispatch-input abstraction.
//!
//! Dispatch depends on exactly two observable values of a request: its
//! method string and its URI path. Anything that can surface those two —
//! a full `http::Request`, a test probe, a host framework's own request
//! type — can be dispatched.

/// A request as the router sees it: a method string and a path.
pub trait RouteRequest {
    /// The wire-level method string, any case.
    fn method(&self) -> &str;

    /// The path component of the request target, e.g. `/users/35`.
    fn path(&self) -> &str;
}

/// Hosts built on the `http` crate dispatch their requests directly.
impl<T> RouteRequest for http::Request<T> {
    fn method(&self) -> &str {
        http::Request::method(self).as_str()
    }

    fn path(&self) -> &str {
        self.uri().path()
    }
}
