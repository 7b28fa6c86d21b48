//! Contact form delivery through an SMTP relay using lettre

use askama::Template;
use async_trait::async_trait;
use fiverings_contact::{Credentials, DeliveryError, EmailDelivery, TemplateParams};
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials as SmtpCredentials,
};

use crate::template::{ContactHtml, ContactPlain};

/// The only message template the SMTP backend knows how to render.
pub const CONTACT_TEMPLATE: &str = "contact";

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub tls: bool,
    pub from_address: String,
    pub contact_address: String,
}

/// Mails the contact form to the business inbox.
///
/// The SMTP username travels as `service_id` and the password as `key`;
/// `template_id` names the message template.
#[derive(Clone)]
pub struct SmtpDelivery {
    config: SmtpConfig,
}

impl SmtpDelivery {
    pub fn new(config: SmtpConfig) -> Self {
        tracing::info!(
            smtp_host = %config.host,
            smtp_port = config.port,
            from = %config.from_address,
            to = %config.contact_address,
            "SMTP delivery initialized"
        );

        Self { config }
    }

    fn mailer(&self, credentials: &Credentials) -> Result<SmtpTransport, DeliveryError> {
        let creds = SmtpCredentials::new(credentials.service_id.clone(), credentials.key.clone());

        let builder = if self.config.tls {
            SmtpTransport::relay(&self.config.host)
                .map_err(|err| DeliveryError::Transport(err.to_string()))?
        } else {
            SmtpTransport::builder_dangerous(&self.config.host)
        };

        Ok(builder.port(self.config.port).credentials(creds).build())
    }

    pub fn message(
        &self,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<Message, DeliveryError> {
        if template_id != CONTACT_TEMPLATE {
            return Err(DeliveryError::InvalidMessage(format!(
                "unknown template '{template_id}'"
            )));
        }

        let html = ContactHtml { params }
            .render()
            .map_err(|err| DeliveryError::InvalidMessage(err.to_string()))?;
        let plain = ContactPlain { params }
            .render()
            .map_err(|err| DeliveryError::InvalidMessage(err.to_string()))?;

        let reply_to = Mailbox::new(
            Some(params.user_name.clone()),
            params
                .user_email
                .parse()
                .map_err(|err| DeliveryError::InvalidMessage(format!("reply-to: {err}")))?,
        );

        Message::builder()
            .from(
                self.config
                    .from_address
                    .parse()
                    .map_err(|err| DeliveryError::InvalidMessage(format!("from: {err}")))?,
            )
            .to(self
                .config
                .contact_address
                .parse()
                .map_err(|err| DeliveryError::InvalidMessage(format!("to: {err}")))?)
            .reply_to(reply_to)
            .subject(format!(
                "New message from {} ({})",
                params.user_name, params.sport
            ))
            .multipart(MultiPart::alternative_plain_html(plain, html))
            .map_err(|err| DeliveryError::InvalidMessage(err.to_string()))
    }
}

#[async_trait]
impl EmailDelivery for SmtpDelivery {
    async fn deliver(
        &self,
        credentials: &Credentials,
        params: &TemplateParams,
    ) -> Result<(), DeliveryError> {
        let message = self.message(&credentials.template_id, params)?;
        let mailer = self.mailer(credentials)?;

        tracing::info!(
            to = %self.config.contact_address,
            sport = %params.sport,
            "Sending contact email through SMTP"
        );

        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .map_err(|err| DeliveryError::Transport(err.to_string()))?
            .map_err(|err| {
                if err.is_permanent() {
                    DeliveryError::Rejected(err.to_string())
                } else {
                    DeliveryError::Transport(err.to_string())
                }
            })?;

        Ok(())
    }
}
