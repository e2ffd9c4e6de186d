//! Opaque action references.
//!
//! An [`Action`] is what a route ultimately points at. The router only
//! stores and returns it — invocation belongs to the host framework's
//! handler layer, which knows its own handler signature and controller
//! resolution rules. Keeping the reference opaque is what lets the same
//! routing core sit under sync and async hosts alike.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A reference to the application-level work a route maps to.
///
/// Two closed variants, mirroring the two ways hosts wire handlers:
///
/// - [`Handler`](Action::Handler): an inline value (usually a closure or a
///   host-specific handler struct), type-erased behind `Arc<dyn Any>`. The
///   host downcasts it back to its concrete handler type at call time.
/// - [`Controller`](Action::Controller): a `[controller, method]`-style
///   descriptor the host resolves by name.
///
/// Cloning is cheap — the handler variant shares one allocation.
#[derive(Clone)]
pub enum Action {
    /// An inline handler supplied at registration time.
    Handler(Arc<dyn Any + Send + Sync>),
    /// A named handler descriptor resolved by the host.
    Controller { controller: String, method: String },
}

impl Action {
    /// Wraps an inline handler value.
    ///
    /// The host recovers it with
    /// [`Arc::downcast`](std::sync::Arc::downcast) (via
    /// [`as_handler`](Action::as_handler)):
    ///
    /// ```
    /// use strada::Action;
    ///
    /// type Greeter = fn() -> &'static str;
    /// let action = Action::handler::<Greeter>(|| "hello");
    ///
    /// let f = action.as_handler().unwrap().downcast_ref::<Greeter>().unwrap();
    /// assert_eq!(f(), "hello");
    /// ```
    pub fn handler<T: Any + Send + Sync>(value: T) -> Self {
        Self::Handler(Arc::new(value))
    }

    /// Builds a named `[controller, method]` descriptor.
    pub fn controller(controller: impl Into<String>, method: impl Into<String>) -> Self {
        Self::Controller { controller: controller.into(), method: method.into() }
    }

    /// Returns the erased inline handler, if this is the inline variant.
    pub fn as_handler(&self) -> Option<&Arc<dyn Any + Send + Sync>> {
        match self {
            Self::Handler(value) => Some(value),
            Self::Controller { .. } => None,
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handler(_) => f.write_str("Action::Handler(<erased>)"),
            Self::Controller { controller, method } => {
                write!(f, "Action::Controller({controller}::{method})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_round_trips_through_erasure() {
        let action = Action::handler::<fn() -> i32>(|| 7);
        let f = action
            .as_handler()
            .unwrap()
            .downcast_ref::<fn() -> i32>()
            .unwrap();
        assert_eq!(f(), 7);
    }

    #[test]
    fn controller_descriptor_is_not_a_handler() {
        let action = Action::controller("UserController", "show");
        assert!(action.as_handler().is_none());
        assert_eq!(format!("{action:?}"), "Action::Controller(UserController::show)");
    }
}
