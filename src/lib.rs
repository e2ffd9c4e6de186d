//! # strada
//!
//! A named-route registry and URL matcher for modular web frameworks.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! The surrounding framework owns the middleware pipeline, dependency
//! injection, HTTP parsing, and configuration loading. strada does not —
//! by design. What's left is the only part with real algorithmic content:
//!
//! - A **registry** of named routes (method + `{name}` path pattern +
//!   opaque action + per-placeholder regex constraints + middleware
//!   references), insertion-ordered, duplicate names rejected.
//! - A **matcher** that compiles a pattern to an anchored regex with named
//!   capture groups and resolves an incoming (method, path) pair to the
//!   first matching route.
//! - A **match result** carrying the route and its extracted parameters,
//!   numeric captures coerced to integers.
//!
//! ## Quick start
//!
//! ```
//! use strada::{Action, HttpMethod, Router};
//!
//! fn main() -> Result<(), strada::Error> {
//!     let mut router = Router::new();
//!     router
//!         .get("users.index", "/users", Action::controller("UserController", "index"))?
//!         .register(
//!             HttpMethod::Get,
//!             "users.show",
//!             "/users/{id}",
//!             Action::controller("UserController", "show"),
//!             Some([("id".to_owned(), r"\d+".to_owned())].into()),
//!         )?;
//!
//!     let request = http::Request::builder()
//!         .method("GET")
//!         .uri("/users/35")
//!         .body(())
//!         .unwrap();
//!
//!     let matched = router.dispatch(&request)?;
//!     assert_eq!(matched.route().name(), "users.show");
//!     assert_eq!(matched.param("id").unwrap().as_int(), Some(35));
//!     Ok(())
//! }
//! ```
//!
//! Dispatch accepts anything implementing [`RouteRequest`] — two string
//! accessors, `method()` and `path()`. `http::Request` implements it out
//! of the box.
//!
//! ## Concurrency
//!
//! Single-threaded by contract: registration completes before dispatch
//! begins. A router shared across worker threads needs external
//! synchronization (or finish building it first and share it immutably —
//! dispatch only takes `&self`).

mod action;
mod error;
mod matcher;
mod method;
mod middleware;
mod request;
mod route;
mod route_match;
mod router;

pub use action::Action;
pub use error::Error;
pub use matcher::{Matcher, PatternMatcher};
pub use method::HttpMethod;
pub use middleware::MiddlewareRegistry;
pub use request::RouteRequest;
pub use route::{Route, RouteDefinition};
pub use route_match::{ParamValue, RouteMatch};
pub use router::Router;
