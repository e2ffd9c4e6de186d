//! Registry and dispatch behavior through the public API.

use std::collections::HashMap;

use strada::{
    Action, Error, HttpMethod, Matcher, MiddlewareRegistry, ParamValue, Route, RouteDefinition,
    RouteMatch, RouteRequest, Router,
};

/// Minimal dispatch input: the router only ever reads method + path.
struct Probe {
    method: &'static str,
    path: &'static str,
}

impl RouteRequest for Probe {
    fn method(&self) -> &str {
        self.method
    }

    fn path(&self) -> &str {
        self.path
    }
}

fn probe(method: &'static str, path: &'static str) -> Probe {
    Probe { method, path }
}

fn action() -> Action {
    Action::controller("TestController", "handle")
}

#[test]
fn dispatch_against_empty_registry_is_not_found() {
    let router = Router::new();
    let err = router.dispatch(&probe("GET", "/anything")).unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, Error::NotFound { method, path } if method == "GET" && path == "/anything"));
}

#[test]
fn literal_instantiation_of_a_pattern_matches_with_exact_bindings() {
    let mut router = Router::new();
    router
        .get("users.show", "/users/{id}/name/{name}", action())
        .unwrap();

    let matched = router.dispatch(&probe("GET", "/users/35/name/amir")).unwrap();
    assert_eq!(matched.route().name(), "users.show");
    assert_eq!(matched.params().len(), 2);
    assert_eq!(matched.param("id").unwrap(), &ParamValue::Int(35));
    assert_eq!(matched.param("name").unwrap(), &ParamValue::Str("amir".into()));
}

#[test]
fn duplicate_name_fails_second_registration_and_keeps_registry_intact() {
    let mut router = Router::new();
    router.get("dup", "/first", action()).unwrap();

    // Different method and path — the name alone collides.
    let err = router.post("dup", "/second", action()).unwrap_err();
    assert!(matches!(err, Error::DuplicateRoute { name } if name == "dup"));

    assert_eq!(router.routes().len(), 1);
    assert_eq!(router.route("dup").unwrap().path(), "/first");
}

#[test]
fn same_path_under_two_methods_is_fine_when_names_differ() {
    let mut router = Router::new();
    router
        .get("users.index", "/users", action())
        .unwrap()
        .post("users.store", "/users", action())
        .unwrap();

    assert_eq!(router.dispatch(&probe("GET", "/users")).unwrap().route().name(), "users.index");
    assert_eq!(router.dispatch(&probe("POST", "/users")).unwrap().route().name(), "users.store");
}

#[test]
fn lowercase_request_method_matches() {
    let mut router = Router::new();
    router.get("home", "/", action()).unwrap();

    let matched = router.dispatch(&probe("get", "/")).unwrap();
    assert_eq!(matched.route().name(), "home");
}

#[test]
fn wrong_method_is_not_found() {
    let mut router = Router::new();
    router.post("users.store", "/users", action()).unwrap();

    assert!(router.dispatch(&probe("GET", "/users")).unwrap_err().is_not_found());
}

#[test]
fn first_registered_route_wins() {
    let mut router = Router::new();
    router
        .get("specific", "/users/{id}", action())
        .unwrap()
        .get("catchall", "/users/{anything}", action())
        .unwrap();

    let matched = router.dispatch(&probe("GET", "/users/7")).unwrap();
    assert_eq!(matched.route().name(), "specific");
}

#[test]
fn constraint_rejects_outside_its_language() {
    let mut router = Router::new();
    router
        .register(
            HttpMethod::Get,
            "users.show",
            "/users/{id}",
            action(),
            Some(HashMap::from([("id".to_owned(), r"\d+".to_owned())])),
        )
        .unwrap();

    assert!(router.dispatch(&probe("GET", "/users/abc")).unwrap_err().is_not_found());
    let matched = router.dispatch(&probe("GET", "/users/123")).unwrap();
    assert_eq!(matched.param("id").unwrap(), &123);
}

#[test]
fn invalid_constraint_surfaces_as_configuration_error_not_404() {
    let mut router = Router::new();
    router
        .register(
            HttpMethod::Get,
            "broken",
            "/users/{id}",
            action(),
            Some(HashMap::from([("id".to_owned(), r"(\d+".to_owned())])),
        )
        .unwrap();

    let err = router.dispatch(&probe("GET", "/users/1")).unwrap_err();
    assert!(matches!(err, Error::InvalidPattern { ref route, .. } if route == "broken"));
    assert!(!err.is_not_found());
}

#[test]
fn route_lookup_by_name_never_matches() {
    let mut router = Router::new();
    router.get("existing", "/existing", action()).unwrap();

    assert!(router.route("existing").is_some());
    assert!(router.route("missing").is_none());
}

#[test]
fn routes_snapshot_preserves_registration_order() {
    let mut router = Router::new();
    router
        .get("a", "/a", action())
        .unwrap()
        .put("b", "/b", action())
        .unwrap()
        .delete("c", "/c", action())
        .unwrap();

    let names: Vec<_> = router.routes().iter().map(Route::name).collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(router.routes()[1].method(), HttpMethod::Put);
}

#[test]
fn middleware_references_validate_against_the_host_registry() {
    let mut router = Router::new()
        .known_middlewares(MiddlewareRegistry::new().with("auth").with("throttle"));

    router
        .add(
            "guarded",
            RouteDefinition::new(HttpMethod::Get, "/admin", action())
                .middlewares(["auth", "throttle"]),
        )
        .unwrap();
    assert_eq!(router.route("guarded").unwrap().middlewares(), ["auth", "throttle"]);

    // One unknown reference rejects the whole route, not just that entry.
    let err = router
        .add(
            "broken",
            RouteDefinition::new(HttpMethod::Get, "/other", action())
                .middlewares(["auth", "csrf"]),
        )
        .unwrap_err();
    assert!(matches!(err, Error::MiddlewareNotFound { name } if name == "csrf"));
    assert!(router.route("broken").is_none());
}

#[test]
fn bulk_table_registers_in_order_through_the_same_routine() {
    let mut router = Router::new();
    let table = vec![
        (
            "users.index",
            RouteDefinition::new(HttpMethod::Get, "/users", action()),
        ),
        (
            "users.show",
            RouteDefinition::new(HttpMethod::Get, "/users/{id}", action())
                .constraint("id", r"\d+"),
        ),
    ];

    router.from_table(table).unwrap();
    assert_eq!(router.routes().len(), 2);
    assert_eq!(router.dispatch(&probe("GET", "/users/9")).unwrap().route().name(), "users.show");
}

#[test]
fn bulk_table_stops_at_first_failure_without_rollback() {
    let mut router = Router::new();
    let table = vec![
        ("first", RouteDefinition::new(HttpMethod::Get, "/first", action())),
        ("first", RouteDefinition::new(HttpMethod::Post, "/dup", action())),
        ("never", RouteDefinition::new(HttpMethod::Get, "/never", action())),
    ];

    let err = router.from_table(table).unwrap_err();
    assert!(matches!(err, Error::DuplicateRoute { name } if name == "first"));

    // The entry before the duplicate stays; the one after was never tried.
    assert_eq!(router.routes().len(), 1);
    assert!(router.route("first").is_some());
    assert!(router.route("never").is_none());
}

#[test]
fn dispatches_http_crate_requests_directly() {
    let mut router = Router::new();
    router.delete("users.destroy", "/users/{id}", action()).unwrap();

    let request = http::Request::builder()
        .method("DELETE")
        .uri("http://example.test/users/35?force=true")
        .body(())
        .unwrap();

    let matched = router.dispatch(&request).unwrap();
    assert_eq!(matched.route().name(), "users.destroy");
    assert_eq!(matched.param("id").unwrap(), &35);
}

/// A matcher double that accepts everything, proving the router depends
/// only on the [`Matcher`] seam.
struct MatchEverything;

impl Matcher for MatchEverything {
    fn matches<'r>(
        &self,
        _method: &str,
        _path: &str,
        route: &'r Route,
    ) -> Result<Option<RouteMatch<'r>>, Error> {
        Ok(Some(RouteMatch::new(route)))
    }
}

#[test]
fn router_delegates_matching_to_the_injected_matcher() {
    let mut router = Router::with_matcher(MatchEverything);
    router.get("anything", "/registered/path", action()).unwrap();

    // Method and path that could never match the registered pattern.
    let matched = router.dispatch(&probe("BREW", "/completely/else")).unwrap();
    assert_eq!(matched.route().name(), "anything");
}
