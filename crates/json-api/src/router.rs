//! App Router

use salvo::Router;

use crate::{auth, carts, catalog, healthcheck, users};

/// Every documented route. Catalog reads, registration and login are public;
/// the session check and every cart or catalog write need a session token.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(public_routes())
        .push(authenticated_routes())
}

fn public_routes() -> Router {
    Router::new()
        .push(
            Router::with_path("users")
                .push(Router::with_path("register").post(users::register::handler))
                .push(Router::with_path("login").post(users::login::handler)),
        )
        .push(
            Router::with_path("destinations")
                .get(catalog::destinations::index::handler)
                .push(
                    Router::with_path("{destination:num}").get(catalog::destinations::get::handler),
                ),
        )
        .push(
            Router::with_path("market-items")
                .get(catalog::market_items::index::handler)
                .push(Router::with_path("{item:num}").get(catalog::market_items::get::handler)),
        )
}

fn authenticated_routes() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(Router::with_path("session").get(users::session::handler))
        .push(
            Router::with_path("cart")
                .push(Router::with_path("add").post(carts::add::handler))
                .push(Router::with_path("checkout").get(carts::checkout::handler))
                .push(Router::with_path("clear").delete(carts::clear::handler))
                .push(Router::with_path("update/{line_id:num}").put(carts::update::handler))
                .push(Router::with_path("remove/{line_id:num}").delete(carts::remove::handler))
                .push(Router::with_path("{user_id:num}").get(carts::list::handler)),
        )
        .push(
            Router::with_path("destinations")
                .post(catalog::destinations::create::handler)
                .push(
                    Router::with_path("{destination:num}")
                        .put(catalog::destinations::update::handler),
                ),
        )
        .push(
            Router::with_path("market-items")
                .post(catalog::market_items::create::handler)
                .push(Router::with_path("{item:num}").put(catalog::market_items::update::handler)),
        )
}
