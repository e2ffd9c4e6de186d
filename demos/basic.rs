//! Minimal strada example — build a route table, dispatch a few requests.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example basic

use strada::{Action, HttpMethod, MiddlewareRegistry, RouteDefinition, Router};

fn main() -> Result<(), strada::Error> {
    tracing_subscriber::fmt::init();

    let mut router =
        Router::new().known_middlewares(MiddlewareRegistry::new().with("auth").with("throttle"));

    // Programmatic registration, chained.
    router
        .get("users.index", "/users", Action::controller("UserController", "index"))?
        .post("users.store", "/users", Action::controller("UserController", "store"))?;

    // Declarative table, the shape a host would assemble from its own config.
    router.from_table(vec![
        (
            "users.show",
            RouteDefinition::new(
                HttpMethod::Get,
                "/users/{id}",
                Action::controller("UserController", "show"),
            )
            .constraint("id", r"\d+")
            .middleware("auth"),
        ),
        (
            "users.posts",
            RouteDefinition::new(
                HttpMethod::Get,
                "/users/{id}/posts/{slug}",
                Action::controller("PostController", "show"),
            )
            .constraint("id", r"\d+"),
        ),
    ])?;

    // Dispatch works against anything exposing method() + path();
    // http::Request does out of the box.
    let request = http::Request::builder()
        .method("GET")
        .uri("/users/35/posts/hello-world")
        .body(())
        .unwrap();

    let matched = router.dispatch(&request)?;
    println!("matched route: {}", matched.route().name());
    for (name, value) in matched.params() {
        println!("  {name} = {value:?}");
    }

    // A miss is an Error::NotFound the host maps to a 404.
    let miss = http::Request::builder()
        .method("GET")
        .uri("/users/not-a-number")
        .body(())
        .unwrap();
    match router.dispatch(&miss) {
        Err(e) if e.is_not_found() => println!("as expected: {e}"),
        other => println!("unexpected: {other:?}"),
    }

    Ok(())
}
