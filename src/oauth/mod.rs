//! OAuth 2.0 authorization-code exchange engine.
//!
//! Wire protocol against one Auth0 tenant: a JSON `POST` to the token endpoint
//! exchanges the one-time code for an access token, then a bearer-authenticated
//! `GET` to the userinfo endpoint resolves the identity claims.

mod client;

pub use client::Auth0Client;

use serde::{Deserialize, Serialize};

/// Identity established for a successful login.
///
/// This is the only value the authentication host receives on success; email
/// format or domain policy, if any, belongs to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// The `email` claim returned by the userinfo endpoint.
    pub email: String,
}
