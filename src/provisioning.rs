//! Post-authentication local-account provisioning seam.
//!
//! The exchange engine knows nothing about account provisioning. Hosts that
//! create a local system user per identity implement [`LocalUserProvisioner`]
//! and compose it with [`LocalAuth0Authenticator`], which runs the hook after
//! each successful login.

use async_trait::async_trait;
use log::*;

use crate::authenticator::{Auth0Authenticator, CallbackRequest};
use crate::error::Error;
use crate::oauth::UserIdentity;

/// Hook invoked once an identity has been resolved.
#[async_trait]
pub trait LocalUserProvisioner: Send + Sync {
    /// Ensure a local account exists for the identity.
    async fn on_identity_resolved(&self, identity: &UserIdentity) -> Result<(), Error>;
}

/// Authenticator variant that provisions a local account after login.
pub struct LocalAuth0Authenticator {
    authenticator: Auth0Authenticator,
    provisioner: Box<dyn LocalUserProvisioner>,
}

impl LocalAuth0Authenticator {
    pub fn new(
        authenticator: Auth0Authenticator,
        provisioner: Box<dyn LocalUserProvisioner>,
    ) -> Self {
        Self {
            authenticator,
            provisioner,
        }
    }

    /// Authenticate, then run the provisioning hook on success.
    ///
    /// A hook failure fails the whole login; the host never sees an identity
    /// it could not provision.
    pub async fn authenticate(
        &self,
        request: &dyn CallbackRequest,
    ) -> Result<UserIdentity, Error> {
        let identity = self.authenticator.authenticate(request).await?;

        self.provisioner
            .on_identity_resolved(&identity)
            .await
            .inspect_err(|e| {
                warn!(
                    "Failed to provision local account for {}: {:?}",
                    identity.email, e
                )
            })?;

        Ok(identity)
    }
}
