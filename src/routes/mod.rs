use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    session::ContactSessions,
    template::{NotFoundTemplate, Template},
};

mod assets;
mod contact;
mod health;
mod index;

pub use assets::AssetsService;
pub use contact::{ContactFormTemplate, SportOption};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub sessions: ContactSessions,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    let theme = template.theme;

    (
        StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate { theme }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .route("/contact/status", get(contact::status))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
