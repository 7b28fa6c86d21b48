//! Contact form delivery through the EmailJS REST API

use std::time::Duration;

use async_trait::async_trait;
use fiverings_contact::{Credentials, DeliveryError, EmailDelivery, TemplateParams};
use serde::Serialize;

pub const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Sends the form payload to an EmailJS template, which mails it to the
/// business inbox.
#[derive(Clone)]
pub struct EmailJsDelivery {
    client: reqwest::Client,
    api_url: String,
    access_token: Option<String>,
}

impl EmailJsDelivery {
    pub fn new(api_url: impl Into<String>, access_token: Option<String>) -> anyhow::Result<Self> {
        let api_url = api_url.into();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;

        tracing::info!(api_url = %api_url, "EmailJS delivery initialized");

        Ok(Self {
            client,
            api_url,
            access_token: access_token.filter(|token| !token.trim().is_empty()),
        })
    }
}

#[async_trait]
impl EmailDelivery for EmailJsDelivery {
    async fn deliver(
        &self,
        credentials: &Credentials,
        params: &TemplateParams,
    ) -> Result<(), DeliveryError> {
        tracing::info!(
            service_id = %credentials.service_id,
            template_id = %credentials.template_id,
            "Sending contact email through EmailJS"
        );

        let request = SendRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.key,
            template_params: params,
            access_token: self.access_token.as_deref(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|err| DeliveryError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let reason = response.text().await.unwrap_or_default();

        Err(DeliveryError::Rejected(format!(
            "{}: {}",
            status.as_u16(),
            reason.trim()
        )))
    }
}
