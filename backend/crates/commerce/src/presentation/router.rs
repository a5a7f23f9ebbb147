//! Commerce Router
//!
//! Catalog reads are public; cart and order routes sit behind the
//! authentication gate, with admin-only routes behind the role gate
//! on top.

use axum::handler::Handler;
use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::infra::postgres::PgAuthRepository;
use auth::presentation::middleware::{AuthGateState, require_admin, require_auth};

use crate::domain::repository::{CartRepository, OrderRepository, ProductRepository};
use crate::infra::postgres::PgCommerceRepository;
use crate::presentation::handlers::{self, CommerceAppState};

/// Create the Commerce router with PostgreSQL repositories
pub fn commerce_router(
    repo: PgCommerceRepository,
    auth_repo: PgAuthRepository,
    config: AuthConfig,
) -> Router {
    commerce_router_generic(repo, auth_repo, config)
}

/// Create a generic Commerce router for any repository implementation
pub fn commerce_router_generic<R, A>(repo: R, auth_repo: A, config: AuthConfig) -> Router
where
    R: ProductRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
    A: UserRepository + Clone + Send + Sync + 'static,
{
    let state = CommerceAppState {
        repo: Arc::new(repo),
    };
    let gate = AuthGateState {
        repo: Arc::new(auth_repo),
        config: Arc::new(config),
    };

    // 商品一覧と詳細は未ログインでも見える
    let catalog = Router::new()
        .route(
            "/products",
            get(handlers::list_products::<R>).post(
                handlers::create_product::<R>
                    .layer(middleware::from_fn(require_admin))
                    .layer(middleware::from_fn_with_state(
                        gate.clone(),
                        require_auth::<A>,
                    )),
            ),
        )
        .route("/products/{id}", get(handlers::get_product::<R>));

    let account = Router::new()
        .route(
            "/cart",
            get(handlers::get_cart::<R>).delete(handlers::clear_cart::<R>),
        )
        .route("/cart/items", post(handlers::add_cart_item::<R>))
        .route(
            "/cart/items/{product_id}",
            patch(handlers::update_cart_item::<R>).delete(handlers::remove_cart_item::<R>),
        )
        .route(
            "/orders",
            post(handlers::place_order::<R>).get(handlers::list_orders::<R>),
        )
        .route("/orders/{id}", get(handlers::get_order::<R>))
        .route(
            "/orders/{id}/status",
            patch(handlers::update_order_status::<R>.layer(middleware::from_fn(require_admin))),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_auth::<A>));

    Router::new().merge(catalog).merge(account).with_state(state)
}
