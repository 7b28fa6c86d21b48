use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use fiverings_contact::{ContactFlow, Credentials, EmailDelivery, SubmissionState};
use tokio::sync::Mutex;

pub const SESSION_COOKIE: &str = "fiverings_session";

/// How long an untouched contact form is kept around.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

struct Entry {
    flow: ContactFlow,
    last_seen: Instant,
}

/// One [`ContactFlow`] per visitor, keyed by the session cookie.
#[derive(Clone)]
pub struct ContactSessions {
    delivery: Arc<dyn EmailDelivery>,
    credentials: Credentials,
    reset_after: Duration,
    idle_ttl: Duration,
    flows: Arc<Mutex<HashMap<String, Entry>>>,
}

impl ContactSessions {
    pub fn new(
        delivery: Arc<dyn EmailDelivery>,
        credentials: Credentials,
        reset_after: Duration,
    ) -> Self {
        Self {
            delivery,
            credentials,
            reset_after,
            idle_ttl: DEFAULT_IDLE_TTL,
            flows: Arc::default(),
        }
    }

    pub fn idle_ttl(mut self, idle_ttl: Duration) -> Self {
        self.idle_ttl = idle_ttl;
        self
    }

    /// Flow of the visitor behind `jar`, issuing a session cookie when the
    /// request carries none or an unreadable one.
    pub async fn flow(&self, jar: CookieJar) -> (CookieJar, ContactFlow) {
        let (jar, id) = match session_id(&jar) {
            Some(id) => (jar, id),
            None => {
                let id = ulid::Ulid::new().to_string();
                let cookie = Cookie::build((SESSION_COOKIE, id.to_owned()))
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .build();

                (jar.add(cookie), id)
            }
        };

        let now = Instant::now();
        let mut flows = self.flows.lock().await;

        if let Some(entry) = flows.get_mut(&id) {
            entry.last_seen = now;

            return (jar, entry.flow.clone());
        }

        let before = flows.len();
        flows.retain(|_, entry| {
            entry.flow.state() == SubmissionState::Sending
                || now.duration_since(entry.last_seen) < self.idle_ttl
        });
        if flows.len() < before {
            tracing::debug!(evicted = before - flows.len(), "idle contact sessions evicted");
        }

        let flow = ContactFlow::new(self.delivery.clone(), self.credentials.clone())
            .reset_after(self.reset_after);
        flows.insert(
            id,
            Entry {
                flow: flow.clone(),
                last_seen: now,
            },
        );

        (jar, flow)
    }

    /// Flow of a visitor who already submitted the form. Never creates one.
    pub async fn existing(&self, jar: &CookieJar) -> Option<ContactFlow> {
        let id = session_id(jar)?;
        let mut flows = self.flows.lock().await;
        let entry = flows.get_mut(&id)?;
        entry.last_seen = Instant::now();

        Some(entry.flow.clone())
    }

    pub async fn len(&self) -> usize {
        self.flows.lock().await.len()
    }
}

fn session_id(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_owned())
        .filter(|id| ulid::Ulid::from_string(id).is_ok())
}
