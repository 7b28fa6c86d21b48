use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use fiverings::config::Theme;
use tower::ServiceExt;

mod common;

use common::{MockDelivery, Outcome};

#[tokio::test]
async fn test_partial_submit_renders_sending_state() {
    let delivery = MockDelivery::new(Outcome::Hold);
    let app = common::create_test_app(common::config(true, Theme::Immersive), delivery.clone());

    let response = app
        .oneshot(common::post_contact(
            common::form_body("priya@example.com"),
            true,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::SET_COOKIE));

    let body = common::body_string(response).await;
    assert!(body.contains("Sending..."));
    assert!(body.contains("disabled"));
    assert!(body.contains("ts-req=\"/contact/status?sending=true\""));
    assert!(body.contains("value=\"Priya\""));
}

#[tokio::test]
async fn test_status_shows_success_then_clears_form() {
    let delivery = MockDelivery::new(Outcome::Accept);
    let app = common::create_test_app(common::config(true, Theme::Immersive), delivery.clone());

    let response = app
        .clone()
        .oneshot(common::post_contact(
            common::form_body("priya@example.com"),
            true,
            None,
        ))
        .await
        .unwrap();
    let cookie = common::session_cookie(&response);

    let mut body = String::new();
    for _ in 0..100 {
        let response = app
            .clone()
            .oneshot(common::get_status(&cookie, true))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        body = common::body_string(response).await;
        if body.contains("Message sent successfully!") {
            break;
        }

        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert!(body.contains("Message sent successfully!"));
    assert!(body.contains("ts-swap-push=\"replace: #contact-fields\""));
    assert!(body.contains("Send Message"));
    assert!(!body.contains("value=\"Priya\""));
    assert_eq!(delivery.calls(), 1);

    let response = app.oneshot(common::get_status(&cookie, false)).await.unwrap();
    let body = common::body_string(response).await;
    assert!(body.contains("Message sent successfully!"));
    assert!(!body.contains("<form"));
}

#[tokio::test]
async fn test_rejected_delivery_shows_generic_failure() {
    let delivery = MockDelivery::new(Outcome::Reject);
    let app = common::create_test_app(common::config(true, Theme::Immersive), delivery.clone());

    let response = app
        .clone()
        .oneshot(common::post_contact(
            common::form_body("priya@example.com"),
            true,
            None,
        ))
        .await
        .unwrap();
    let cookie = common::session_cookie(&response);

    let mut body = String::new();
    for _ in 0..100 {
        let response = app
            .clone()
            .oneshot(common::get_status(&cookie, true))
            .await
            .unwrap();

        body = common::body_string(response).await;
        if body.contains("Failed to send. Please try again.") {
            break;
        }

        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert!(body.contains("Failed to send. Please try again."));
    assert!(body.contains("ts-swap-push=\"replace: #contact-submit\""));
    assert!(!body.contains("<form"));
}

#[tokio::test]
async fn test_settled_poll_leaves_fields_alone() {
    let delivery = MockDelivery::new(Outcome::Reject);
    let app = common::create_test_app(common::config(true, Theme::Immersive), delivery);

    let response = app
        .clone()
        .oneshot(common::post_contact(
            common::form_body("priya@example.com"),
            true,
            None,
        ))
        .await
        .unwrap();
    let cookie = common::session_cookie(&response);

    let mut body = String::new();
    for _ in 0..100 {
        let response = app
            .clone()
            .oneshot(common::get_status(&cookie, false))
            .await
            .unwrap();

        body = common::body_string(response).await;
        if body.contains("Failed to send. Please try again.") {
            break;
        }

        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert!(body.contains("Failed to send. Please try again."));
    assert!(body.contains("ts-trigger=\"load delay 1000\""));
    assert!(!body.contains("<form"));
    assert!(!body.contains("contact-submit"));
}

#[tokio::test]
async fn test_missing_credentials_fail_without_delivery() {
    let delivery = MockDelivery::new(Outcome::Accept);
    let app = common::create_test_app(common::config(false, Theme::Immersive), delivery.clone());

    let response = app
        .oneshot(common::post_contact(
            common::form_body("priya@example.com"),
            true,
            None,
        ))
        .await
        .unwrap();

    let body = common::body_string(response).await;
    assert!(body.contains("Failed to send. Please try again."));
    assert!(!body.contains("Sending..."));
    assert_eq!(delivery.calls(), 0);
}

#[tokio::test]
async fn test_invalid_form_renders_toast_and_keeps_state() {
    let delivery = MockDelivery::new(Outcome::Accept);
    let app = common::create_test_app(common::config(true, Theme::Immersive), delivery.clone());

    let response = app
        .oneshot(common::post_contact(
            common::form_body("not-an-email"),
            true,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.headers()["ts-swap"], "skip");

    let body = common::body_string(response).await;
    assert!(body.contains("Please fill in every field correctly."));
    assert!(body.contains("Your Email"));
    assert_eq!(delivery.calls(), 0);
}

#[tokio::test]
async fn test_invalid_form_without_javascript_keeps_values() {
    let delivery = MockDelivery::new(Outcome::Accept);
    let app = common::create_test_app(common::config(true, Theme::Immersive), delivery.clone());

    let response = app
        .oneshot(common::post_contact(
            common::form_body("not-an-email"),
            false,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = common::body_string(response).await;
    assert!(body.contains("FIVERINGS SPORTS PVT LTD"));
    assert!(body.contains("Please fill in every field correctly."));
    assert!(body.contains("Your Email"));
    assert!(body.contains("value=\"Priya\""));
    assert!(body.contains("value=\"not-an-email\""));
    assert!(body.contains("<option value=\"Table Tennis\" selected>"));
    assert_eq!(delivery.calls(), 0);
}

#[tokio::test]
async fn test_second_submit_while_sending_is_ignored() {
    let delivery = MockDelivery::new(Outcome::Hold);
    let app = common::create_test_app(common::config(true, Theme::Immersive), delivery.clone());

    let response = app
        .clone()
        .oneshot(common::post_contact(
            common::form_body("priya@example.com"),
            true,
            None,
        ))
        .await
        .unwrap();
    let cookie = common::session_cookie(&response);

    let response = app
        .oneshot(common::post_contact(
            common::form_body("other@example.com"),
            true,
            Some(&cookie),
        ))
        .await
        .unwrap();

    let body = common::body_string(response).await;
    assert!(body.contains("Sending..."));
    assert!(body.contains("value=\"priya@example.com\""));
}

#[tokio::test]
async fn test_submit_without_javascript_redirects_to_contact() {
    let delivery = MockDelivery::new(Outcome::Hold);
    let app = common::create_test_app(common::config(true, Theme::Immersive), delivery);

    let response = app
        .oneshot(common::post_contact(
            common::form_body("priya@example.com"),
            false,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/#contact");
}

#[tokio::test]
async fn test_visitors_do_not_share_a_flow() {
    let delivery = MockDelivery::new(Outcome::Hold);
    let app = common::create_test_app(common::config(true, Theme::Immersive), delivery);

    let _ = app
        .clone()
        .oneshot(common::post_contact(
            common::form_body("priya@example.com"),
            true,
            None,
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/contact/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = common::body_string(response).await;
    assert!(body.contains("id=\"contact-status\""));
    assert!(!body.contains("Sending..."));
    assert!(!body.contains("ts-trigger"));
}

#[tokio::test]
async fn test_anonymous_views_do_not_create_sessions() {
    let state = common::create_test_state(
        common::config(true, Theme::Immersive),
        MockDelivery::new(Outcome::Accept),
    );
    let app = fiverings::create_app(state.clone());

    for uri in ["/", "/contact/status", "/contact/status?sending=true"] {
        for _ in 0..10 {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert!(!response.headers().contains_key(header::SET_COOKIE));
        }
    }

    assert_eq!(state.sessions.len().await, 0);

    let _ = app
        .oneshot(common::post_contact(
            common::form_body("priya@example.com"),
            true,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(state.sessions.len().await, 1);
}
