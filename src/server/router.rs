use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{
        status::{get_guilds, get_health, get_status},
        template::{
            apply_template, capture_template, delete_template, get_all_templates, get_template,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_status))
        .route("/health", get(get_health))
        .route("/api/guilds", get(get_guilds))
        .route(
            "/api/templates",
            get(get_all_templates).post(capture_template),
        )
        .route(
            "/api/templates/{name}",
            get(get_template).delete(delete_template),
        )
        .route("/api/templates/{name}/apply", post(apply_template))
        .layer(TraceLayer::new_for_http())
}
