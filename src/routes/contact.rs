use axum::{
    extract::{Form, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use fiverings_contact::{ContactForm, Snapshot, SubmissionState, SubmitError};
use fiverings_shared::Sport;
use serde::Deserialize;
use strum::VariantArray;

use crate::{
    routes::{AppState, index},
    template::{Template, ToastErrorTemplate, filters},
};

/// Header twinspark sets on requests it sends on the page's behalf.
const PARTIAL_REQUEST_HEADER: &str = "ts-request";

const INVALID_FORM_MESSAGE: &str = "Please fill in every field correctly.";

pub struct SportOption {
    pub label: &'static str,
    pub selected: bool,
}

/// Banner plus form, rendered on the page and after each submission.
#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub form: ContactForm,
    pub sports: Vec<SportOption>,
    pub sending: bool,
    pub succeeded: bool,
    pub failed: bool,
    /// Labels of the fields a page-reloading submission got wrong.
    pub invalid: Option<Vec<&'static str>>,
}

impl ContactFormTemplate {
    pub fn new(form: ContactForm, state: SubmissionState) -> Self {
        let sports = Sport::VARIANTS
            .iter()
            .map(|sport| {
                let label: &'static str = sport.as_ref();

                SportOption {
                    label,
                    selected: form.sport == label,
                }
            })
            .collect();

        Self {
            form,
            sports,
            sending: state == SubmissionState::Sending,
            succeeded: state == SubmissionState::Succeeded,
            failed: state == SubmissionState::Failed,
            invalid: None,
        }
    }
}

impl From<Snapshot> for ContactFormTemplate {
    fn from(snapshot: Snapshot) -> Self {
        Self::new(snapshot.form, snapshot.state)
    }
}

/// Status banner answering a poll. The fields are only pushed along when the
/// poll sees the delivery finish, so edits made under a banner survive.
#[derive(askama::Template)]
#[template(path = "partials/contact-poll.html")]
pub struct ContactPollTemplate {
    pub form: ContactForm,
    pub sports: Vec<SportOption>,
    pub sending: bool,
    pub succeeded: bool,
    pub failed: bool,
    pub settled_now: bool,
}

impl ContactPollTemplate {
    pub fn new(snapshot: Snapshot, was_sending: bool) -> Self {
        let contact = ContactFormTemplate::from(snapshot);

        Self {
            settled_now: was_sending && !contact.sending,
            form: contact.form,
            sports: contact.sports,
            sending: contact.sending,
            succeeded: contact.succeeded,
            failed: contact.failed,
        }
    }
}

/// Form label shown for a field named by [`fiverings_contact::InvalidForm::fields`].
fn field_label(field: &str) -> &'static str {
    match field {
        "name" => "Your Name",
        "email" => "Your Email",
        "phone" => "Phone Number",
        "sport" => "Select Sport",
        "message" => "Your Message",
        _ => "Contact",
    }
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> Response {
    let (jar, flow) = app.sessions.flow(jar).await;
    let partial = headers.contains_key(PARTIAL_REQUEST_HEADER);

    match flow.submit(form.clone()) {
        Ok(submission) => {
            tracing::info!(attempt = submission.attempt(), "contact form accepted");
        }
        Err(SubmitError::Invalid(err)) => {
            let fields = err.fields();
            tracing::info!(fields = %fields.join(", "), "contact form has invalid fields");

            let labels = fields
                .iter()
                .map(|field| field_label(field))
                .collect::<Vec<_>>();

            if partial {
                return (
                    jar,
                    [("ts-swap", "skip")],
                    template.render(ToastErrorTemplate {
                        message: INVALID_FORM_MESSAGE,
                        fields: &labels,
                    }),
                )
                    .into_response();
            }

            let mut contact = ContactFormTemplate::new(form, flow.state());
            contact.invalid = Some(labels);

            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                jar,
                index::render(&template, contact),
            )
                .into_response();
        }
        Err(SubmitError::Busy) => {}
        Err(SubmitError::MissingCredentials(_)) => {}
    }

    if !partial {
        return (jar, Redirect::to("/#contact")).into_response();
    }

    (
        jar,
        template.render(ContactFormTemplate::from(flow.snapshot())),
    )
        .into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    /// The polling page last saw the form sending.
    #[serde(default)]
    pub sending: bool,
}

pub async fn status(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
    Query(query): Query<StatusQuery>,
) -> impl IntoResponse {
    let snapshot = match app.sessions.existing(&jar).await {
        Some(flow) => flow.snapshot(),
        None => Snapshot::default(),
    };

    template.render(ContactPollTemplate::new(snapshot, query.sending))
}
