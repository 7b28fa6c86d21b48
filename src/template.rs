use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

use crate::{config::Theme, routes::AppState};

pub(crate) mod filters {
    #[askama::filter_fn]
    pub fn t(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let preferred_language = askama::get_value::<String>(values, "preferred_language")
            .map(String::as_str)
            .unwrap_or("en");

        Ok(rust_i18n::t!(value, locale = preferred_language).to_string())
    }
}

/// Renders askama templates with the request's language and the site theme.
pub struct Template {
    preferred_language: String,
    pub theme: Theme,
}

impl Template {
    pub fn new(preferred_language: impl Into<String>, theme: Theme) -> Self {
        Self {
            preferred_language: preferred_language.into(),
            theme,
        }
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert(
            "preferred_language",
            Box::new(self.preferred_language.to_owned()),
        );

        #[cfg(debug_assertions)]
        {
            values.insert("is_dev", Box::new(true));
        }
        #[cfg(not(debug_assertions))]
        {
            values.insert("is_dev", Box::new(false));
        }

        template.render_with_values(&values)
    }

    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match self.render_with_values(template) {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

/// First language tag of an `Accept-Language` header, without quality.
fn preferred_language(parts: &Parts) -> String {
    parts
        .headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|tag| tag.split(';').next().unwrap_or_default().trim())
        .filter(|tag| !tag.is_empty() && *tag != "*")
        .map(|tag| {
            tag.split_once('-')
                .map(|(lang, _)| lang)
                .unwrap_or(tag)
                .to_lowercase()
        })
        .unwrap_or_else(|| "en".to_owned())
}

impl FromRequestParts<AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(
            preferred_language(parts),
            state.config.site.theme,
        ))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub theme: Theme,
}

#[derive(askama::Template)]
#[template(path = "partials/toast-error.html")]
pub struct ToastErrorTemplate<'a> {
    pub message: &'a str,
    /// Form labels listed under the message.
    pub fields: &'a [&'static str],
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn parts(accept_language: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = accept_language {
            builder = builder.header(header::ACCEPT_LANGUAGE, value);
        }

        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_preferred_language_from_header() {
        assert_eq!(preferred_language(&parts(Some("ta-IN,ta;q=0.9,en;q=0.8"))), "ta");
        assert_eq!(preferred_language(&parts(Some("en;q=0.8"))), "en");
        assert_eq!(preferred_language(&parts(Some("FR"))), "fr");
    }

    #[test]
    fn test_preferred_language_defaults_to_english() {
        assert_eq!(preferred_language(&parts(None)), "en");
        assert_eq!(preferred_language(&parts(Some("*"))), "en");
        assert_eq!(preferred_language(&parts(Some(""))), "en");
    }
}
