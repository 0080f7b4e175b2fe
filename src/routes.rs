// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{admin, auth, data, results, user},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, data, admin, user, results).
/// * Applies global middleware (Trace, CORS, body limit).
/// * Injects global state (Database Pool, Config).
pub fn create_router(state: AppState) -> Router {
    // The client is served from arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let admin_routes = Router::new().route("/sync", post(admin::sync_data));

    let user_routes = Router::new().route("/{user_id}/sync", post(user::sync_user));

    let results_routes = Router::new().route(
        "/{user_id}",
        get(results::list_results).post(results::create_result),
    );

    Router::new()
        .route("/api/data", get(data::get_all_data))
        .nest("/api/auth", auth_routes)
        .nest("/api/admin", admin_routes)
        .nest("/api/user", user_routes)
        .nest("/api/results", results_routes)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(state.config.max_body_bytes)),
        )
        .with_state(state)
}
