//! Auth0 OAuth HTTP client.
//!
//! This module provides the HTTP client for the two outbound calls of the
//! authorization-code grant: exchanging the code for an access token and
//! fetching identity claims with it. Provider responses are parsed as generic
//! JSON and the known fields validated explicitly, so an externally-controlled
//! payload surfaces a typed malformed-response error instead of a decode panic.

use std::time::Duration;

use log::*;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;

use crate::credentials::ClientCredentials;
use crate::endpoints::Auth0Endpoints;
use crate::error::{oauth_error, Error, ErrorKind, OAuthErrorKind};
use crate::oauth::UserIdentity;

/// Request body for exchanging an authorization code.
/// These five fields are the entire body; the token endpoint rejects extras.
#[derive(Serialize)]
struct TokenExchangeRequest {
    grant_type: String,
    client_id: String,
    client_secret: String,
    code: String,
    redirect_uri: String,
}

/// Auth0 OAuth client for code exchange and userinfo lookup.
///
/// Holds a shared connection pool; safe to use from concurrent `authenticate`
/// invocations. All state is read-only after construction.
#[derive(Debug)]
pub struct Auth0Client {
    client: reqwest::Client,
    credentials: ClientCredentials,
    endpoints: Auth0Endpoints,
}

impl Auth0Client {
    /// Create a new Auth0 OAuth client.
    ///
    /// `request_timeout` bounds each outbound call; a timed-out call is
    /// reported as the transport failure of the step it happened in.
    pub fn new(
        credentials: ClientCredentials,
        endpoints: Auth0Endpoints,
        request_timeout: Duration,
    ) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(request_timeout)
            .user_agent(format!(
                "auth0-authenticator/{}",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            client,
            credentials,
            endpoints,
        })
    }

    pub fn endpoints(&self) -> &Auth0Endpoints {
        &self.endpoints
    }

    /// Build the authorization URL the host redirects the browser to.
    pub fn authorization_url(&self, state: Option<&str>) -> String {
        let mut url = format!(
            "{}?client_id={}&redirect_uri={}&response_type=code",
            self.endpoints.authorize_url,
            urlencoding::encode(&self.credentials.client_id),
            urlencoding::encode(&self.credentials.redirect_uri),
        );

        if let Some(state) = state {
            url.push_str("&state=");
            url.push_str(&urlencoding::encode(state));
        }

        url
    }

    /// Exchange a one-time authorization code for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<SecretString, Error> {
        let request = TokenExchangeRequest {
            grant_type: "authorization_code".to_string(),
            client_id: self.credentials.client_id.clone(),
            client_secret: self.credentials.client_secret.expose_secret().to_string(),
            code: code.to_string(),
            redirect_uri: self.credentials.redirect_uri.clone(),
        };

        debug!(
            "Exchanging authorization code at {}",
            self.endpoints.token_url
        );

        let response = self
            .client
            .post(&self.endpoints.token_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to reach the token endpoint: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: ErrorKind::OAuth(OAuthErrorKind::TokenExchangeFailed),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!("Token endpoint returned HTTP {}", status);
            return Err(oauth_error(
                OAuthErrorKind::TokenExchangeFailed,
                &format!("HTTP {}: {}", status, error_text),
            ));
        }

        let body = response.text().await.map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: ErrorKind::OAuth(OAuthErrorKind::TokenExchangeFailed),
        })?;

        let token_json: Value = serde_json::from_str(&body).map_err(|e| {
            warn!("Token response was not valid JSON: {:?}", e);
            Error {
                source: Some(Box::new(e)),
                error_kind: ErrorKind::OAuth(OAuthErrorKind::MalformedTokenResponse),
            }
        })?;

        let access_token = token_json
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                warn!("Token response did not contain an access_token field");
                oauth_error(
                    OAuthErrorKind::MalformedTokenResponse,
                    "token response missing access_token",
                )
            })?;

        info!("Successfully exchanged authorization code for an access token");
        Ok(SecretString::from(access_token.to_string()))
    }

    /// Fetch identity claims for an access token and extract the email.
    pub async fn get_user_info(&self, access_token: &SecretString) -> Result<UserIdentity, Error> {
        debug!("Fetching userinfo from {}", self.endpoints.userinfo_url);

        let response = self
            .client
            .get(&self.endpoints.userinfo_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .bearer_auth(access_token.expose_secret())
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to reach the userinfo endpoint: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: ErrorKind::OAuth(OAuthErrorKind::UserinfoFetchFailed),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!("Userinfo endpoint returned HTTP {}", status);
            return Err(oauth_error(
                OAuthErrorKind::UserinfoFetchFailed,
                &format!("HTTP {}: {}", status, error_text),
            ));
        }

        let body = response.text().await.map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: ErrorKind::OAuth(OAuthErrorKind::UserinfoFetchFailed),
        })?;

        let claims: Value = serde_json::from_str(&body).map_err(|e| {
            warn!("Userinfo response was not valid JSON: {:?}", e);
            Error {
                source: Some(Box::new(e)),
                error_kind: ErrorKind::OAuth(OAuthErrorKind::MalformedUserinfoResponse),
            }
        })?;

        let email = claims.get("email").and_then(Value::as_str).ok_or_else(|| {
            warn!("Userinfo response did not contain an email field");
            oauth_error(
                OAuthErrorKind::MalformedUserinfoResponse,
                "userinfo response missing email",
            )
        })?;

        Ok(UserIdentity {
            email: email.to_string(),
        })
    }
}
