//! Tests for configuration system

use fiverings::{
    Config,
    config::{EmailProvider, Theme},
};

#[test]
fn test_config_loads_from_default_toml() {
    let config =
        Config::load(Some("config/default.toml".to_owned())).expect("Failed to load config");

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.email.provider, EmailProvider::Emailjs);
    assert_eq!(config.email.reset_after_secs, 5);
    assert_eq!(config.site.theme, Theme::Immersive);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.child("fiverings.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[email]
provider = "smtp"
service_id = "mailer"
template_id = "contact"
key = "secret"
reset_after_secs = 8

[email.smtp]
host = "smtp.example.com"
port = 465

[site]
theme = "minimal"
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.to_string_lossy().into_owned())).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.email.provider, EmailProvider::Smtp);
    assert_eq!(config.email.smtp.host, "smtp.example.com");
    assert_eq!(config.email.smtp.port, 465);
    assert_eq!(config.email.smtp.contact_address, "info@5rings.in");
    assert_eq!(config.email.reset_after().as_secs(), 8);
    assert_eq!(config.site.theme, Theme::Minimal);
}

#[test]
fn test_placeholder_credentials_are_not_configured() {
    let config = Config::load(Some("config/default.toml".to_owned())).unwrap();
    let credentials = config.email.credentials();

    if std::env::var("EMAILJS_SERVICE_ID").is_err()
        && std::env::var("FIVERINGS__EMAIL__SERVICE_ID").is_err()
    {
        assert!(!credentials.is_configured());
        assert!(credentials.missing().contains(&"service_id"));
    }
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.child("absent.toml");

    let config = Config::load(Some(path.to_string_lossy().into_owned())).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.email.reset_after_secs, 5);
}
