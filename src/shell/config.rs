use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::modules::profiles::use_cases::list_profiles::handler::DEFAULT_PROFILE_PAGE_SIZE;
use crate::modules::profiles::use_cases::view_profile_permissions::handler::DEFAULT_PERMISSION_PAGE_SIZE;
use crate::modules::users::use_cases::list_users::handler::DEFAULT_USER_PAGE_SIZE;
use crate::shared::infrastructure::graphql_client::http::DEFAULT_TIMEOUT_MS;

pub const DEFAULT_GRAPHQL_API_URL: &str = "https://127.0.0.1:8000/api/graphql";
pub const DEFAULT_TOKEN_PATH: &str = ".forseti/token";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be true or false, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub graphql_api_url: String,
    pub accept_invalid_certs: bool,
    pub token_path: PathBuf,
    pub request_timeout: Duration,
    pub user_page_size: i64,
    pub profile_page_size: i64,
    pub permission_page_size: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or blank variables take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).map(|value| value.trim().to_string()).filter(|v| !v.is_empty());

        Ok(Self {
            graphql_api_url: read("FORSETI_GRAPHQL_API_URL")
                .unwrap_or_else(|| DEFAULT_GRAPHQL_API_URL.to_string()),
            accept_invalid_certs: match read("FORSETI_ACCEPT_INVALID_CERTS") {
                Some(value) => parse_flag("FORSETI_ACCEPT_INVALID_CERTS", value)?,
                None => false,
            },
            token_path: read("FORSETI_TOKEN_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TOKEN_PATH)),
            request_timeout: Duration::from_millis(number(
                "FORSETI_REQUEST_TIMEOUT_MS",
                read("FORSETI_REQUEST_TIMEOUT_MS"),
                DEFAULT_TIMEOUT_MS as i64,
            )? as u64),
            user_page_size: number("FORSETI_USER_PAGE_SIZE", read("FORSETI_USER_PAGE_SIZE"), DEFAULT_USER_PAGE_SIZE)?,
            profile_page_size: number(
                "FORSETI_PROFILE_PAGE_SIZE",
                read("FORSETI_PROFILE_PAGE_SIZE"),
                DEFAULT_PROFILE_PAGE_SIZE,
            )?,
            permission_page_size: number(
                "FORSETI_PERMISSION_PAGE_SIZE",
                read("FORSETI_PERMISSION_PAGE_SIZE"),
                DEFAULT_PERMISSION_PAGE_SIZE,
            )?,
        })
    }
}

fn number(key: &'static str, value: Option<String>, default: i64) -> Result<i64, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.parse::<i64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ConfigError::InvalidNumber { key, value }),
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value }),
    }
}
