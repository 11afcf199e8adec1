//! Service Configuration
//!
//! Base URLs of the auth server and the wishlist server. Both can be
//! overridden at build time through environment variables.

const DEFAULT_AUTH_URL: &str = "http://127.0.0.1:9082";
const DEFAULT_WISHLIST_URL: &str = "http://127.0.0.1:9081";

/// Where the two remote services live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub auth_url: &'static str,
    pub wishlist_url: &'static str,
}

impl ApiConfig {
    /// Read `FOURTH_WISH_AUTH_URL` / `FOURTH_WISH_API_URL` captured at compile
    /// time, falling back to the local development ports.
    pub const fn from_env() -> Self {
        let auth_url = match option_env!("FOURTH_WISH_AUTH_URL") {
            Some(url) => url,
            None => DEFAULT_AUTH_URL,
        };
        let wishlist_url = match option_env!("FOURTH_WISH_API_URL") {
            Some(url) => url,
            None => DEFAULT_WISHLIST_URL,
        };
        Self { auth_url, wishlist_url }
    }

    pub fn auth_endpoint(&self, path: &str) -> String {
        join(self.auth_url, path)
    }

    pub fn wishlist_endpoint(&self, path: &str) -> String {
        join(self.wishlist_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joining() {
        let config = ApiConfig {
            auth_url: "http://auth.local/",
            wishlist_url: "http://lists.local",
        };
        assert_eq!(config.auth_endpoint("/api/register"), "http://auth.local/api/register");
        assert_eq!(config.wishlist_endpoint("api/user"), "http://lists.local/api/user");
    }
}
