pub mod cli;
pub mod config;
pub mod email;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod session;
pub mod template;

use std::sync::Arc;

use axum::Router;
use fiverings_contact::EmailDelivery;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub use config::Config;
pub use routes::AppState;
pub use session::ContactSessions;

rust_i18n::i18n!("locales", fallback = "en");

/// Application state with one contact flow per visitor, all delivering
/// through `delivery`.
pub fn create_state(config: Config, delivery: Arc<dyn EmailDelivery>) -> AppState {
    let sessions = ContactSessions::new(
        delivery,
        config.email.credentials(),
        config.email.reset_after(),
    );

    AppState { config, sessions }
}

/// Router with every route and middleware layer the server runs with.
pub fn create_app(state: AppState) -> Router {
    routes::router(state)
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        // Minify before compressing
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
