use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{health, teams, users};
use super::SharedRegistry;

/// Build the application router around a shared registry
pub fn router(registry: SharedRegistry) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team routes
        .route("/teams", post(teams::create_team).get(teams::get_teams))
        .route("/teams/:team_id", get(teams::get_team))
        .route("/teams/:team_id/counters", get(teams::get_counter))
        // User routes
        .route(
            "/teams/:team_id/users",
            post(users::add_user).get(users::get_users),
        )
        .route("/teams/:team_id/users/:user_id", get(users::get_user))
        .route(
            "/teams/:team_id/users/:user_id/counters",
            post(users::increment_counter),
        )
        .route(
            "/teams/:team_id/users/:user_id/counters/increment",
            post(users::increment_counter_by_value),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(registry)
}
