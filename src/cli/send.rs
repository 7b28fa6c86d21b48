use anyhow::Result;
use clap::Args;
use fiverings_contact::{ContactFlow, ContactForm, SubmissionState};

use crate::config::Config;

/// Contact form fields, as a visitor would fill them in.
#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    /// Sender name
    #[arg(long)]
    pub name: String,

    /// Sender email address
    #[arg(long)]
    pub email: String,

    /// Sender phone number
    #[arg(long)]
    pub phone: String,

    /// One of the offered sports, e.g. "Table Tennis"
    #[arg(long)]
    pub sport: String,

    #[arg(long)]
    pub message: String,
}

impl From<SendArgs> for ContactForm {
    fn from(args: SendArgs) -> Self {
        Self {
            user_name: args.name,
            user_email: args.email,
            user_phone: args.phone,
            sport: args.sport,
            message: args.message,
        }
    }
}

/// Submits one form through the configured backend and waits for it to
/// settle. Anything but a delivered message is an error.
pub async fn send(config: Config, args: SendArgs) -> Result<()> {
    let delivery = crate::email::create_delivery(&config.email)?;
    let flow = ContactFlow::new(delivery, config.email.credentials())
        .reset_after(config.email.reset_after());

    let submission = flow.submit(args.into())?;
    tracing::info!(attempt = submission.attempt(), "Contact form submitted");

    match submission.finished().await {
        SubmissionState::Succeeded => {
            tracing::info!("Contact form delivered");

            Ok(())
        }
        state => anyhow::bail!("contact form was not delivered, flow settled as {state}"),
    }
}
