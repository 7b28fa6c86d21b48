use std::str::FromStr;

use fiverings_shared::Sport;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::InvalidForm;

/// Field values as the visitor typed them into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub user_phone: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A contact form that passed the required-field checks.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct SubmissionRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 32))]
    pub phone: String,
    pub sport: Sport,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

impl TryFrom<&ContactForm> for SubmissionRequest {
    type Error = InvalidForm;

    fn try_from(form: &ContactForm) -> Result<Self, Self::Error> {
        let sport = form.sport.trim();
        let sport = Sport::from_str(sport).map_err(|_| InvalidForm::Sport(sport.to_owned()))?;

        let request = Self {
            name: form.user_name.trim().to_owned(),
            email: form.user_email.trim().to_owned(),
            phone: form.user_phone.trim().to_owned(),
            sport,
            message: form.message.trim().to_owned(),
        };

        request.validate()?;

        Ok(request)
    }
}

/// Key-value payload the delivery backend fills its message template with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub sport: String,
    pub message: String,
}

impl From<SubmissionRequest> for TemplateParams {
    fn from(request: SubmissionRequest) -> Self {
        Self {
            user_name: request.name,
            user_email: request.email,
            user_phone: request.phone,
            sport: request.sport.to_string(),
            message: request.message,
        }
    }
}
