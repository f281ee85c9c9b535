//! Error types for the `auth0-authenticator` crate.
//!
//! Modeled as a root `Error` struct holding a tree of `error_kind` enums plus an
//! optional `source` for error chaining. The host translates each kind into an
//! HTTP response for the browser; a `MissingAuthorizationCode` callback is a
//! client error (400-equivalent), everything else in `OAuthErrorKind` is a
//! failed conversation with the provider.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for the authenticator.
/// Holds an error kind and optional source for error chaining.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors in this crate.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    OAuth(OAuthErrorKind),
    Config(ConfigErrorKind),
    Provisioning(ProvisioningErrorKind),
    Http(HttpErrorKind),
}

/// Errors from the authorization-code exchange flow.
///
/// Each variant is terminal for its `authenticate` invocation; the engine never
/// retries internally and never falls back to a default identity.
#[derive(Debug, PartialEq)]
pub enum OAuthErrorKind {
    /// The OAuth callback arrived without a usable `code` argument.
    MissingAuthorizationCode,
    /// The token endpoint was unreachable or answered non-2xx.
    TokenExchangeFailed,
    /// The token endpoint answered 2xx but the body was not JSON with an
    /// `access_token` string field.
    MalformedTokenResponse,
    /// The userinfo endpoint was unreachable or answered non-2xx.
    UserinfoFetchFailed,
    /// The userinfo endpoint answered 2xx but the body was not JSON with an
    /// `email` string field.
    MalformedUserinfoResponse,
}

/// Errors from assembling the authenticator out of configuration.
#[derive(Debug, PartialEq)]
pub enum ConfigErrorKind {
    Missing,
}

/// Errors from the post-authentication provisioning hook.
#[derive(Debug, PartialEq)]
pub enum ProvisioningErrorKind {
    Failed,
}

/// Errors from HTTP client construction and transport.
#[derive(Debug, PartialEq)]
pub enum HttpErrorKind {
    BuilderFailed,
    RequestFailed,
    Network,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::OAuth(kind) => write!(f, "OAuth error: {:?}", kind),
            ErrorKind::Config(kind) => write!(f, "Config error: {:?}", kind),
            ErrorKind::Provisioning(kind) => write!(f, "Provisioning error: {:?}", kind),
            ErrorKind::Http(kind) => write!(f, "HTTP error: {:?}", kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let error_kind = if err.is_builder() {
            ErrorKind::Http(HttpErrorKind::BuilderFailed)
        } else if err.is_request() {
            ErrorKind::Http(HttpErrorKind::RequestFailed)
        } else {
            ErrorKind::Http(HttpErrorKind::Network)
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

/// Helper function to create OAuth errors.
pub fn oauth_error(kind: OAuthErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::OAuth(kind),
    }
}

/// Helper function to create config errors.
pub fn config_error(message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Config(ConfigErrorKind::Missing),
    }
}

/// Helper function to create provisioning errors.
pub fn provisioning_error(message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Provisioning(ProvisioningErrorKind::Failed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_error_display() {
        let err = oauth_error(OAuthErrorKind::MissingAuthorizationCode, "no code");
        assert_eq!(
            err.to_string(),
            "OAuth error: MissingAuthorizationCode".to_string()
        );
        assert_eq!(
            err.error_kind,
            ErrorKind::OAuth(OAuthErrorKind::MissingAuthorizationCode)
        );
    }

    #[test]
    fn test_error_source_chain() {
        let err = oauth_error(OAuthErrorKind::TokenExchangeFailed, "HTTP 401");
        let source = err.source().expect("source should be set");
        assert_eq!(source.to_string(), "HTTP 401");
    }

    #[test]
    fn test_config_error_kind() {
        let err = config_error("OAUTH_CLIENT_ID is not set");
        assert_eq!(err.error_kind, ErrorKind::Config(ConfigErrorKind::Missing));
    }
}
