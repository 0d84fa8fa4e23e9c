use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    insta::assert_snapshot!(res, @r###"
    # Time to wait in milliseconds before timing out when probing the quiz service.
    health-check-timeout = 1000

    # Base URL of the quiz service.
    service-url = "http://localhost:8000"
    "###);
}

#[test]
fn it_uses_kebab_case_keys() {
    assert_eq!(ConfigKey::ServiceURL.to_string(), "service-url");
    assert_eq!(ConfigKey::HealthCheckTimeout.to_string(), "health-check-timeout");
    assert_eq!(ConfigKey::AttemptID.to_string(), "attempt-id");
}

#[test]
fn it_rejects_invalid_values() {
    assert!(Config::validate(ConfigKey::HealthCheckTimeout, "soon").is_err());
    assert!(Config::validate(ConfigKey::ServiceURL, "localhost:8000").is_err());
    assert!(Config::validate(ConfigKey::AttemptID, "seven").is_err());

    assert!(Config::validate(ConfigKey::HealthCheckTimeout, "250").is_ok());
    assert!(Config::validate(ConfigKey::ServiceURL, "https://quiz.example.com").is_ok());
    assert!(Config::validate(ConfigKey::AttemptID, "").is_ok());
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["wikiquiz", "-c", "./config.example.toml"])?;
    Config::load(vec![&matches]).await?;
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["wikiquiz", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}

#[tokio::test]
async fn it_rejects_invalid_flags() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "wikiquiz",
        "-c",
        "./config.example.toml",
        "--health-check-timeout",
        "soon",
    ])?;
    let res = Config::load(vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}
