pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod repository;
pub mod state;
pub mod store;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

use config::ServerConfig;
use state::AppState;
use store::SharedStore;

/// Build the Axum router and application state from a config.
pub fn build_app(config: ServerConfig) -> (Router<()>, AppState) {
    let state = AppState::new(config);
    (router(state.clone()), state)
}

/// Same as [`build_app`] but around an explicitly constructed store.
pub fn build_app_with_store(config: ServerConfig, store: SharedStore) -> (Router<()>, AppState) {
    let state = AppState::with_store(config, store);
    (router(state.clone()), state)
}

fn router(state: AppState) -> Router<()> {
    let api_routes = Router::new()
        .route("/game-result", post(api::post_game_result))
        .route("/leaderboard", get(api::get_leaderboard))
        .route(
            "/notifications/{fid}",
            get(api::get_notifications)
                .put(api::put_notifications)
                .delete(api::delete_notifications),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
