//! # m2dg-server
//!
//! REST API for the M2DG basketball platform.

pub mod api;
pub mod config;
pub mod error;
pub mod extractors;
pub mod seed;
pub mod state;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

pub use config::Config;
pub use state::AppState;

pub fn create_router(state: Arc<AppState>, allowed_origins: Option<&[String]>) -> Router {
    let api = Router::new()
        .route("/", get(api::health::root))
        // Accounts
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        .route("/users/me", get(api::users::get_me).put(api::users::update_me))
        // Courts
        .route(
            "/courts",
            get(api::courts::list_courts).post(api::courts::create_court),
        )
        .route("/courts/:court_id", get(api::courts::get_court))
        // Bookings
        .route("/bookings", post(api::bookings::create_booking))
        .route("/bookings/me", get(api::bookings::my_bookings))
        // Tournaments
        .route(
            "/tournaments",
            get(api::tournaments::list_tournaments).post(api::tournaments::create_tournament),
        )
        .route(
            "/tournaments/:tournament_id/register",
            post(api::tournaments::register_for_tournament),
        )
        // Challenges
        .route(
            "/challenges",
            get(api::challenges::list_challenges).post(api::challenges::create_challenge),
        )
        .route(
            "/challenges/:challenge_id/accept",
            post(api::challenges::accept_challenge),
        )
        // Teams
        .route(
            "/teams",
            get(api::teams::list_teams).post(api::teams::create_team),
        )
        .route("/teams/join-by-code", post(api::teams::join_team_by_code))
        .route("/teams/:team_id/join", post(api::teams::join_team))
        // Coaches
        .route(
            "/coaches",
            get(api::coaches::list_coaches).post(api::coaches::create_coach_profile),
        )
        // Games
        .route("/games", post(api::games::create_game))
        .route("/games/me", get(api::games::my_games))
        .route("/games/:game_id/score", put(api::games::update_score));

    Router::new()
        .route("/", get(api::health::root))
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Nested "/" only matches "/api"
        .route("/api/", get(api::health::root))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(build_cors_layer(allowed_origins))
        .with_state(state)
}

/// Restrict CORS to `allowed_origins`, or allow any origin when unset
fn build_cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    let Some(allowed_origins) = allowed_origins else {
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true)
        .allow_origin(AllowOrigin::list(origins))
}
