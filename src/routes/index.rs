use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use fiverings_shared::{
    Sport,
    site::{self, Company, Feature, Founder, Milestone, Stat, Upcoming},
};
use strum::VariantArray;

use crate::{
    config::Theme,
    routes::{AppState, ContactFormTemplate},
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub theme: Theme,
    pub immersive: bool,
    pub company: &'static Company,
    pub stats: &'static [Stat],
    pub timeline: &'static [Milestone],
    pub vision: &'static str,
    pub mission: &'static str,
    pub sports: &'static [Sport],
    pub features: &'static [Feature],
    pub upcoming: &'static [Upcoming],
    pub partners: &'static [&'static str],
    pub founder: &'static Founder,
    /// Pre-rendered contact fragment, also served alone by `POST /contact`.
    pub contact: String,
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let snapshot = match app.sessions.existing(&jar).await {
        Some(flow) => flow.snapshot(),
        None => Default::default(),
    };

    render(&template, ContactFormTemplate::from(snapshot))
}

/// Full landing page around the given contact fragment.
pub fn render(template: &Template, contact: ContactFormTemplate) -> Response {
    let contact = template.to_string(contact);
    let theme = template.theme;

    template.render(IndexTemplate {
        theme,
        immersive: theme == Theme::Immersive,
        company: &site::COMPANY,
        stats: site::STATS,
        timeline: site::TIMELINE,
        vision: site::VISION,
        mission: site::MISSION,
        sports: Sport::VARIANTS,
        features: site::FEATURES,
        upcoming: site::UPCOMING,
        partners: site::PARTNERS,
        founder: &site::FOUNDER,
        contact,
    })
}
