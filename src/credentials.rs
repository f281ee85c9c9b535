//! OAuth client credential types.

use secrecy::SecretString;

/// Client credentials issued by the Auth0 tenant.
///
/// The client secret is held as a [`SecretString`] so it is redacted from Debug
/// output; it leaves this struct only inside the token-exchange request body.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: SecretString,
    /// Callback URI the provider redirects the browser back to.
    pub redirect_uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_redacts_client_secret() {
        let credentials = ClientCredentials {
            client_id: "client-123".to_string(),
            client_secret: SecretString::from("super-secret".to_string()),
            redirect_uri: "https://hub.example.com/oauth/callback".to_string(),
        };

        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("client-123"));
    }
}
