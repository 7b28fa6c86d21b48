use std::{sync::Arc, time::Duration};

use strum::{AsRefStr, Display};
use tokio::{sync::watch, task::JoinHandle};
use tracing::Instrument;

use crate::{
    ContactForm, Credentials, DeliveryError, EmailDelivery, SubmissionRequest, SubmitError,
    TemplateParams,
};

/// How long a success or failure banner stays up before the flow goes idle.
pub const DEFAULT_RESET_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// `Succeeded` and `Failed` revert to `Idle` on their own.
    pub fn is_settled(&self) -> bool {
        matches!(self, SubmissionState::Succeeded | SubmissionState::Failed)
    }
}

/// Operator-facing reason behind a `Failed` state. Visitors see the same
/// generic message for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum Failure {
    MissingCredentials,
    DeliveryRejected,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub state: SubmissionState,
    pub form: ContactForm,
    pub failure: Option<Failure>,
    /// Number of submissions started so far.
    pub attempt: u64,
}

/// State machine driving one contact form.
///
/// Cloning is cheap and every clone drives the same form. `submit` spawns
/// onto the current tokio runtime and must be called from within one.
#[derive(Clone)]
pub struct ContactFlow {
    delivery: Arc<dyn EmailDelivery>,
    credentials: Arc<Credentials>,
    reset_after: Duration,
    snapshot: Arc<watch::Sender<Snapshot>>,
}

impl ContactFlow {
    pub fn new(delivery: Arc<dyn EmailDelivery>, credentials: Credentials) -> Self {
        let (snapshot, _) = watch::channel(Snapshot::default());

        Self {
            delivery,
            credentials: Arc::new(credentials),
            reset_after: DEFAULT_RESET_AFTER,
            snapshot: Arc::new(snapshot),
        }
    }

    pub fn reset_after(mut self, reset_after: Duration) -> Self {
        self.reset_after = reset_after;
        self
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.borrow().clone()
    }

    pub fn state(&self) -> SubmissionState {
        self.snapshot.borrow().state
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot.subscribe()
    }

    /// Starts delivering `form`.
    ///
    /// Moves to `Sending` before returning and resolves to `Succeeded` or
    /// `Failed` in the background. Unconfigured credentials short-circuit to
    /// `Failed` without contacting the backend. A call made while a delivery
    /// is in flight, or with a form that fails validation, leaves the state
    /// untouched.
    pub fn submit(&self, form: ContactForm) -> Result<Submission, SubmitError> {
        if self.state() == SubmissionState::Sending {
            tracing::debug!("contact form submitted while sending, ignored");

            return Err(SubmitError::Busy);
        }

        let request = match SubmissionRequest::try_from(&form) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(err = %err, "contact form rejected by validation");

                return Err(err.into());
            }
        };

        let missing = self.credentials.missing();
        if !missing.is_empty() {
            let attempt = self
                .begin(form, SubmissionState::Failed, Some(Failure::MissingCredentials))
                .ok_or(SubmitError::Busy)?;

            tracing::error!(
                attempt,
                missing = ?missing,
                "email delivery credentials are not configured, contact form not sent"
            );

            self.arm_reset(attempt);

            return Err(SubmitError::MissingCredentials(missing));
        }

        let attempt = self
            .begin(form, SubmissionState::Sending, None)
            .ok_or(SubmitError::Busy)?;

        tracing::info!(attempt, sport = %request.sport, "sending contact form");

        let flow = self.clone();
        let params = TemplateParams::from(request);
        let handle = tokio::spawn(async move {
            let delivery = flow.delivery.clone();
            let credentials = flow.credentials.clone();

            // A panicking backend must still settle the flow.
            let outcome = match tokio::spawn(
                async move { delivery.deliver(&credentials, &params).await }.in_current_span(),
            )
            .await
            {
                Ok(outcome) => outcome,
                Err(err) => Err(DeliveryError::Transport(format!(
                    "delivery task aborted: {err}"
                ))),
            };

            flow.settle(attempt, outcome)
        }
        .in_current_span());

        Ok(Submission { attempt, handle })
    }

    /// Opens a new attempt unless one is still sending.
    fn begin(
        &self,
        form: ContactForm,
        state: SubmissionState,
        failure: Option<Failure>,
    ) -> Option<u64> {
        let mut attempt = None;

        self.snapshot.send_if_modified(|snapshot| {
            if snapshot.state == SubmissionState::Sending {
                return false;
            }

            snapshot.attempt += 1;
            snapshot.state = state;
            snapshot.form = form;
            snapshot.failure = failure;
            attempt = Some(snapshot.attempt);

            true
        });

        attempt
    }

    fn settle(&self, attempt: u64, outcome: Result<(), DeliveryError>) -> SubmissionState {
        let (state, failure) = match outcome {
            Ok(()) => {
                tracing::info!(attempt, "contact form delivered");

                (SubmissionState::Succeeded, None)
            }
            Err(err) => {
                tracing::error!(attempt, err = %err, "contact form delivery failed");

                (SubmissionState::Failed, Some(Failure::DeliveryRejected))
            }
        };

        let applied = self.snapshot.send_if_modified(|snapshot| {
            if snapshot.attempt != attempt || snapshot.state != SubmissionState::Sending {
                return false;
            }

            snapshot.state = state;
            snapshot.failure = failure;

            if state == SubmissionState::Succeeded {
                snapshot.form = ContactForm::default();
            }

            true
        });

        if applied {
            self.arm_reset(attempt);
        }

        state
    }

    /// Reverts to `Idle` after `reset_after`, unless a newer attempt started.
    fn arm_reset(&self, attempt: u64) {
        let snapshot = self.snapshot.clone();
        let reset_after = self.reset_after;

        tokio::spawn(async move {
            tokio::time::sleep(reset_after).await;

            let reset = snapshot.send_if_modified(|snapshot| {
                if snapshot.attempt != attempt || !snapshot.state.is_settled() {
                    return false;
                }

                snapshot.state = SubmissionState::Idle;
                snapshot.failure = None;

                true
            });

            if !reset {
                tracing::debug!(attempt, "stale contact form reset skipped");
            }
        }
        .in_current_span());
    }
}

/// Handle on a delivery started by [`ContactFlow::submit`].
#[derive(Debug)]
pub struct Submission {
    attempt: u64,
    handle: JoinHandle<SubmissionState>,
}

impl Submission {
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Waits for the delivery to resolve and returns the state it settled in.
    pub async fn finished(self) -> SubmissionState {
        match self.handle.await {
            Ok(state) => state,
            Err(err) => {
                tracing::error!(attempt = self.attempt, err = %err, "contact form task failed");

                SubmissionState::Failed
            }
        }
    }
}
