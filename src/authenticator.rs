//! Host-facing Auth0 authenticator.
//!
//! One [`Auth0Authenticator::authenticate`] call runs the whole exchange for a
//! single OAuth callback: extract the one-time `code`, trade it for an access
//! token, resolve the `email` claim. Each invocation is an independent linear
//! pass; the only shared state is the read-only client configuration, so hosts
//! may drive many invocations concurrently from one authenticator behind an
//! `Arc`.

use std::time::Duration;

use log::*;
use secrecy::SecretString;

use crate::config::Config;
use crate::credentials::ClientCredentials;
use crate::endpoints::Auth0Endpoints;
use crate::error::{config_error, oauth_error, Error, OAuthErrorKind};
use crate::oauth::{Auth0Client, UserIdentity};

/// Display name the host shows on its login page.
pub const LOGIN_SERVICE: &str = "Auth0";

/// Read access to the arguments of the inbound OAuth callback request.
///
/// Implemented by the authentication host over whatever request type it
/// handles callbacks with.
pub trait CallbackRequest: Send + Sync {
    /// Return the value of a query/form argument, if present.
    fn get_argument(&self, name: &str) -> Option<String>;
}

/// Authenticator implementing the Auth0 authorization-code login flow.
#[derive(Debug)]
pub struct Auth0Authenticator {
    client: Auth0Client,
}

impl Auth0Authenticator {
    /// Create an authenticator from explicit credentials and endpoints.
    pub fn new(
        credentials: ClientCredentials,
        endpoints: Auth0Endpoints,
        request_timeout: Duration,
    ) -> Result<Self, Error> {
        Ok(Self {
            client: Auth0Client::new(credentials, endpoints, request_timeout)?,
        })
    }

    /// Build an authenticator from runtime configuration.
    ///
    /// Endpoints come from `AUTH0_BASE_URL` when set, otherwise they are
    /// derived from `AUTH0_SUBDOMAIN`. Any missing required value is a config
    /// error.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let endpoints = match config.auth0_base_url() {
            Some(base_url) => Auth0Endpoints::with_base_url(&base_url),
            None => {
                let subdomain = config
                    .auth0_subdomain()
                    .ok_or_else(|| config_error("AUTH0_SUBDOMAIN is not set"))?;
                Auth0Endpoints::for_subdomain(&subdomain)
            }
        };

        let credentials = ClientCredentials {
            client_id: config
                .oauth_client_id()
                .ok_or_else(|| config_error("OAUTH_CLIENT_ID is not set"))?,
            client_secret: SecretString::from(
                config
                    .oauth_client_secret()
                    .ok_or_else(|| config_error("OAUTH_CLIENT_SECRET is not set"))?,
            ),
            redirect_uri: config
                .oauth_callback_uri()
                .ok_or_else(|| config_error("OAUTH_CALLBACK_URI is not set"))?,
        };

        Self::new(
            credentials,
            endpoints,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Name of the login service, for the host's login button.
    pub fn login_service(&self) -> &'static str {
        LOGIN_SERVICE
    }

    /// Build the provider authorization URL the host redirects the browser to.
    pub fn authorization_url(&self, state: Option<&str>) -> String {
        self.client.authorization_url(state)
    }

    /// Run the authorization-code exchange for one callback request.
    ///
    /// A missing or empty `code` argument fails before any network call. The
    /// two provider calls run sequentially; every failure is terminal for this
    /// invocation and surfaces as a typed error for the host to translate.
    pub async fn authenticate(
        &self,
        request: &dyn CallbackRequest,
    ) -> Result<UserIdentity, Error> {
        let code = request
            .get_argument("code")
            .filter(|code| !code.is_empty())
            .ok_or_else(|| {
                warn!("OAuth callback made without an authorization code");
                oauth_error(
                    OAuthErrorKind::MissingAuthorizationCode,
                    "oauth callback made without a code argument",
                )
            })?;

        let access_token = self.client.exchange_code(&code).await?;
        let identity = self.client.get_user_info(&access_token).await?;

        info!("Resolved identity {} via Auth0", identity.email);
        Ok(identity)
    }
}
