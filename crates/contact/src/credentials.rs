use std::fmt;

const PLACEHOLDER_MARKER: &str = "your_";

/// Identifiers handed to the email delivery backend on every call.
///
/// They come from deployment configuration, so an unset value or one still
/// carrying the sample `your_...` marker means the site was deployed without
/// a working mail setup.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub service_id: String,
    pub template_id: String,
    pub key: String,
}

impl Credentials {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            key: key.into(),
        }
    }

    /// Names of the identifiers that are unset or placeholders.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("key", &self.key),
        ]
        .into_iter()
        .filter(|(_, value)| is_unset(value))
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_configured(&self) -> bool {
        self.missing().is_empty()
    }
}

fn is_unset(value: &str) -> bool {
    let value = value.trim();

    value.is_empty() || value.contains(PLACEHOLDER_MARKER)
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("key", &"***")
            .finish()
    }
}
