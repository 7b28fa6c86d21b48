use std::sync::Arc;

use anyhow::Result;
use fiverings_contact::EmailDelivery;
use fiverings_notification::{EmailJsDelivery, SmtpConfig, SmtpDelivery};

use crate::config::{EmailConfig, EmailProvider};

/// Build the delivery backend selected by `email.provider`.
pub fn create_delivery(config: &EmailConfig) -> Result<Arc<dyn EmailDelivery>> {
    let credentials = config.credentials();
    if !credentials.is_configured() {
        tracing::warn!(
            provider = ?config.provider,
            missing = ?credentials.missing(),
            "Email credentials are not configured, contact form submissions will fail"
        );
    }

    let delivery: Arc<dyn EmailDelivery> = match config.provider {
        EmailProvider::Emailjs => Arc::new(EmailJsDelivery::new(
            &config.emailjs.api_url,
            Some(config.emailjs.access_token.clone()),
        )?),
        EmailProvider::Smtp => Arc::new(SmtpDelivery::new(SmtpConfig {
            host: config.smtp.host.clone(),
            port: config.smtp.port,
            tls: config.smtp.tls,
            from_address: config.smtp.from_address.clone(),
            contact_address: config.smtp.contact_address.clone(),
        })),
    };

    Ok(delivery)
}
