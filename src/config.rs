//! Runtime configuration for the authenticator.
//!
//! Values come from CLI flags or environment variables (`AUTH0_SUBDOMAIN`,
//! `OAUTH_CLIENT_ID`, `OAUTH_CLIENT_SECRET`, `OAUTH_CALLBACK_URI`), with a
//! `.env` file loaded first. Nothing here is read at module load; the
//! authenticator is built from an explicit [`Config`] value so tests can point
//! it at arbitrary tenants or a mock server.

use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;

/// Default timeout for each outbound provider request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The subdomain of the Auth0 tenant to authenticate against.
    #[arg(long, env)]
    auth0_subdomain: Option<String>,

    /// The OAuth client id issued by the Auth0 tenant.
    #[arg(long, env)]
    oauth_client_id: Option<String>,

    /// The OAuth client secret issued by the Auth0 tenant.
    #[arg(long, env)]
    oauth_client_secret: Option<String>,

    /// The callback URI the provider redirects the browser back to.
    #[arg(long, env)]
    oauth_callback_uri: Option<String>,

    /// Base URL override for all provider endpoints, replacing the
    /// subdomain-derived URLs. Override in tests to point at a mock server.
    #[arg(long, env)]
    auth0_base_url: Option<String>,

    /// Timeout in seconds for each outbound provider request
    #[arg(long, env, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn auth0_subdomain(&self) -> Option<String> {
        self.auth0_subdomain.clone()
    }

    pub fn oauth_client_id(&self) -> Option<String> {
        self.oauth_client_id.clone()
    }

    pub fn oauth_client_secret(&self) -> Option<String> {
        self.oauth_client_secret.clone()
    }

    pub fn oauth_callback_uri(&self) -> Option<String> {
        self.oauth_callback_uri.clone()
    }

    pub fn auth0_base_url(&self) -> Option<String> {
        self.auth0_base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["auth0-authenticator"]).unwrap();

        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(config.log_level_filter, LevelFilter::Info);
        assert_eq!(config.auth0_subdomain(), None);
        assert_eq!(config.oauth_client_id(), None);
    }

    #[test]
    fn test_flags_populate_accessors() {
        let config = Config::try_parse_from([
            "auth0-authenticator",
            "--auth0-subdomain",
            "example",
            "--oauth-client-id",
            "client-123",
            "--oauth-client-secret",
            "sekrit",
            "--oauth-callback-uri",
            "https://hub.example.com/oauth/callback",
            "--request-timeout-secs",
            "5",
        ])
        .unwrap();

        assert_eq!(config.auth0_subdomain(), Some("example".to_string()));
        assert_eq!(config.oauth_client_id(), Some("client-123".to_string()));
        assert_eq!(config.oauth_client_secret(), Some("sekrit".to_string()));
        assert_eq!(
            config.oauth_callback_uri(),
            Some("https://hub.example.com/oauth/callback".to_string())
        );
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_base_url_override() {
        let config = Config::try_parse_from([
            "auth0-authenticator",
            "--auth0-base-url",
            "http://127.0.0.1:5000",
        ])
        .unwrap();

        assert_eq!(
            config.auth0_base_url(),
            Some("http://127.0.0.1:5000".to_string())
        );
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let result = Config::try_parse_from(["auth0-authenticator", "--log-level-filter", "LOUD"]);
        assert!(result.is_err());
    }
}
