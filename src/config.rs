use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use fiverings_contact::Credentials;
use serde::Deserialize;
use std::{env, time::Duration};
use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    #[default]
    Emailjs,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: EmailProvider,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub key: String,
    /// Seconds a success or failure banner stays on screen.
    #[serde(default = "default_reset_after_secs")]
    pub reset_after_secs: u64,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::default(),
            service_id: String::new(),
            template_id: String::new(),
            key: String::new(),
            reset_after_secs: default_reset_after_secs(),
            emailjs: EmailJsConfig::default(),
            smtp: SmtpConfig::default(),
        }
    }
}

impl EmailConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.service_id, &self.template_id, &self.key)
    }

    pub fn reset_after(&self) -> Duration {
        Duration::from_secs(self.reset_after_secs)
    }
}

fn default_reset_after_secs() -> u64 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default = "default_emailjs_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub access_token: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            api_url: default_emailjs_api_url(),
            access_token: String::new(),
        }
    }
}

fn default_emailjs_api_url() -> String {
    fiverings_notification::EMAILJS_API_URL.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default = "default_smtp_tls")]
    pub tls: bool,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            tls: default_smtp_tls(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_tls() -> bool {
    true
}

fn default_from_address() -> String {
    "noreply@5rings.in".to_string()
}

fn default_contact_address() -> String {
    "info@5rings.in".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Visual variant of the landing page.
#[derive(
    Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr,
)]
pub enum Theme {
    #[default]
    #[serde(rename = "3d")]
    #[strum(serialize = "3d")]
    Immersive,
    #[serde(rename = "minimal")]
    #[strum(serialize = "minimal")]
    Minimal,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub theme: Theme,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy EmailJS variables (EMAILJS_SERVICE_ID, ...)
    /// 2. Environment variables (FIVERINGS__EMAIL__SERVICE_ID, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FIVERINGS")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("EMAILJS_SERVICE_ID", "email.service_id"),
            ("EMAILJS_TEMPLATE_ID", "email.template_id"),
            ("EMAILJS_PUBLIC_KEY", "email.key"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Unset email credentials are accepted here; the contact form reports
    /// them when a visitor submits.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.reset_after_secs == 0 {
            return Err("Email reset_after_secs must be at least 1".to_string());
        }
        if self.email.provider == EmailProvider::Emailjs && self.email.emailjs.api_url.is_empty()
        {
            return Err("EmailJS api_url must not be empty".to_string());
        }
        Ok(())
    }
}
