//! Auth0 endpoint configuration.
//!
//! The three provider URLs are a pure derivation of the tenant subdomain and are
//! constructed once at startup. The subdomain is not validated here; a bad value
//! surfaces as the first network failure against the resulting host.

/// Domain suffix shared by all Auth0 tenants.
const AUTH0_DOMAIN: &str = "auth0.com";

/// Provider endpoint URLs for one Auth0 tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth0Endpoints {
    /// Authorization endpoint the browser is redirected to.
    pub authorize_url: String,
    /// Token endpoint the authorization code is exchanged at.
    pub token_url: String,
    /// Userinfo endpoint identity claims are fetched from.
    pub userinfo_url: String,
}

impl Auth0Endpoints {
    /// Derive all three endpoint URLs from a tenant subdomain.
    pub fn for_subdomain(subdomain: &str) -> Self {
        Self::with_base_url(&format!("https://{}.{}", subdomain, AUTH0_DOMAIN))
    }

    /// Build all three endpoint URLs under an explicit base URL.
    /// Override in tests to point at a mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            authorize_url: format!("{}/authorize", base),
            token_url: format!("{}/oauth/token", base),
            userinfo_url: format!("{}/userinfo", base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subdomain_derives_all_urls() {
        let endpoints = Auth0Endpoints::for_subdomain("example");

        assert_eq!(endpoints.authorize_url, "https://example.auth0.com/authorize");
        assert_eq!(endpoints.token_url, "https://example.auth0.com/oauth/token");
        assert_eq!(endpoints.userinfo_url, "https://example.auth0.com/userinfo");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let endpoints = Auth0Endpoints::with_base_url("http://127.0.0.1:5000/");

        assert_eq!(endpoints.token_url, "http://127.0.0.1:5000/oauth/token");
        assert_eq!(endpoints.userinfo_url, "http://127.0.0.1:5000/userinfo");
    }

    #[test]
    fn test_all_urls_share_one_host() {
        let endpoints = Auth0Endpoints::for_subdomain("tenant-a");

        for url in [
            &endpoints.authorize_url,
            &endpoints.token_url,
            &endpoints.userinfo_url,
        ] {
            assert!(url.starts_with("https://tenant-a.auth0.com/"));
        }
    }
}
