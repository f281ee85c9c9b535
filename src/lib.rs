//! # auth0-authenticator
//!
//! Auth0 OAuth2 login for a pluggable multi-user authentication host.
//!
//! Implements the authorization-code grant against one Auth0 tenant: the host
//! redirects the browser to the authorize endpoint, Auth0 redirects back with
//! a one-time `code`, and [`Auth0Authenticator::authenticate`] exchanges that
//! code for an access token and resolves the user's email via the userinfo
//! endpoint. The host receives either a [`UserIdentity`] to start a session
//! for, or a typed [`Error`] to translate into an HTTP response.
//!
//! The following environment variables may be used for configuration:
//!
//! - `AUTH0_SUBDOMAIN` - The subdomain of the Auth0 tenant
//! - `OAUTH_CLIENT_ID` - The OAuth client id
//! - `OAUTH_CLIENT_SECRET` - The OAuth client secret
//! - `OAUTH_CALLBACK_URI` - The callback handler URI
//!
//! If exposing secrets through the process environment is a concern, build
//! [`ClientCredentials`] directly and use [`Auth0Authenticator::new`] instead
//! of [`Auth0Authenticator::from_config`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use auth0_authenticator::{Auth0Authenticator, Config, Logger};
//!
//! let config = Config::new();
//! Logger::init_logger(&config);
//! let authenticator = Auth0Authenticator::from_config(&config)?;
//!
//! // per inbound callback request, from the host's handler:
//! let identity = authenticator.authenticate(&request).await?;
//! ```

pub mod authenticator;
pub mod config;
pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod oauth;
pub mod provisioning;

// Re-export commonly used types
pub use authenticator::{Auth0Authenticator, CallbackRequest, LOGIN_SERVICE};
pub use config::Config;
pub use credentials::ClientCredentials;
pub use endpoints::Auth0Endpoints;
pub use error::{Error, ErrorKind};
pub use logging::Logger;
pub use oauth::{Auth0Client, UserIdentity};
pub use provisioning::{LocalAuth0Authenticator, LocalUserProvisioner};
