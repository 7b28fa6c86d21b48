#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use fiverings::{
    AppState, Config,
    config::{EmailConfig, ObservabilityConfig, ServerConfig, SiteConfig, Theme},
};
use fiverings_contact::{Credentials, DeliveryError, EmailDelivery, TemplateParams};
use http_body_util::BodyExt;
use tokio::sync::Notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accept,
    Reject,
    Hold,
}

/// Delivery backend that records calls instead of sending email.
pub struct MockDelivery {
    outcome: Outcome,
    calls: AtomicUsize,
    release: Notify,
}

impl MockDelivery {
    pub fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            release: Notify::new(),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailDelivery for MockDelivery {
    async fn deliver(
        &self,
        _credentials: &Credentials,
        _params: &TemplateParams,
    ) -> Result<(), DeliveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.outcome {
            Outcome::Accept => Ok(()),
            Outcome::Reject => Err(DeliveryError::Rejected("400: bad template".to_owned())),
            Outcome::Hold => {
                self.release.notified().await;
                Ok(())
            }
        }
    }
}

pub fn config(configured: bool, theme: Theme) -> Config {
    let mut email = EmailConfig::default();
    if configured {
        email.service_id = "service_test".to_owned();
        email.template_id = "template_test".to_owned();
        email.key = "public_test".to_owned();
    } else {
        email.service_id = "your_service_id".to_owned();
    }

    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        email,
        observability: ObservabilityConfig::default(),
        site: SiteConfig { theme },
    }
}

pub fn create_test_app(config: Config, delivery: Arc<MockDelivery>) -> Router {
    fiverings::create_app(fiverings::create_state(config, delivery))
}

pub fn create_test_state(config: Config, delivery: Arc<MockDelivery>) -> AppState {
    fiverings::create_state(config, delivery)
}

pub fn get_status(cookie: &str, sending: bool) -> Request<Body> {
    let uri = if sending {
        "/contact/status?sending=true"
    } else {
        "/contact/status"
    };

    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn form_body(email: &str) -> Body {
    let body = serde_urlencoded::to_string([
        ("user_name", "Priya"),
        ("user_email", email),
        ("user_phone", "+91 90000 00000"),
        ("sport", "Table Tennis"),
        ("message", "Do you have evening batches?"),
    ])
    .unwrap();

    Body::from(body)
}

pub fn post_contact(body: Body, partial: bool, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

    if partial {
        builder = builder.header("ts-request", "true");
    }
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(body).unwrap()
}

/// `name=value` pair of the session cookie set by `response`.
pub fn session_cookie(response: &Response<Body>) -> String {
    response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_owned()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
