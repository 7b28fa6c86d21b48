/// Why a form could not be turned into a [`crate::SubmissionRequest`].
#[derive(Debug, thiserror::Error)]
pub enum InvalidForm {
    #[error("{0}")]
    Fields(#[from] validator::ValidationErrors),

    #[error("unknown sport '{0}'")]
    Sport(String),
}

impl InvalidForm {
    /// Names of the offending fields, sorted.
    pub fn fields(&self) -> Vec<String> {
        match self {
            InvalidForm::Fields(errors) => {
                let mut fields = errors
                    .field_errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect::<Vec<_>>();
                fields.sort();
                fields
            }
            InvalidForm::Sport(_) => vec!["sport".to_owned()],
        }
    }
}

/// Outcome of a [`crate::ContactFlow::submit`] call that did not start a delivery.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already being sent")]
    Busy,

    #[error("{0}")]
    Invalid(#[from] InvalidForm),

    #[error("email delivery credentials are not configured ({})", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
}

/// Failure reported by an email delivery backend.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("delivery rejected: {0}")]
    Rejected(String),

    #[error("delivery transport error: {0}")]
    Transport(String),

    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
