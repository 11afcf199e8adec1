//! REST Client
//!
//! Async wrappers over the auth server and the wishlist server, organized
//! by domain. Every call resolves to `Result<T, ApiError>`.

mod auth;
mod item;
mod shared;
mod user;
mod wishlist;

use std::future::Future;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::session;

// Re-export all public items
pub use auth::*;
pub use item::*;
pub use shared::*;
pub use user::*;
pub use wishlist::*;

const CONFIG: ApiConfig = ApiConfig::from_env();

fn client() -> Client {
    Client::new()
}

/// Attach the session's bearer token; no token means the user is logged out
fn authorized(request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    let token = session::load_token().ok_or(ApiError::Unauthorized)?;
    Ok(request.header(reqwest::header::AUTHORIZATION, session::bearer_header(&token)))
}

/// Let the browser send and keep cookies for cross-origin calls
#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

/// Percent-encode an id for use as a path segment
fn segment(id: &str) -> String {
    utf8_percent_encode(id, NON_ALPHANUMERIC).to_string()
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    log::warn!("Request failed with {}: {}", status, body);
    Err(ApiError::from_status(status.as_u16(), body))
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    send(request)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send_empty(request: RequestBuilder) -> Result<(), ApiError> {
    send(request).await.map(|_| ())
}

/// Await an authenticated call. A 401 logs the user out and yields `None`;
/// any other outcome is handed back to the caller.
pub async fn auth_wrapper<T, F>(ctx: AppContext, call: F) -> Option<Result<T, ApiError>>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let result = call.await;
    if should_logout(&result) {
        log::warn!("Session rejected by server");
        ctx.logout();
        return None;
    }
    Some(result)
}

fn should_logout<T>(result: &Result<T, ApiError>) -> bool {
    matches!(result, Err(err) if err.is_unauthorized())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_encodes_separators() {
        assert_eq!(segment("6250a1f0"), "6250a1f0");
        assert_eq!(segment("a/b?c"), "a%2Fb%3Fc");
    }

    #[test]
    fn test_should_logout_only_on_401() {
        assert!(should_logout::<()>(&Err(ApiError::Unauthorized)));
        assert!(!should_logout::<()>(&Err(ApiError::Forbidden)));
        assert!(!should_logout::<()>(&Err(ApiError::NoResponse("down".into()))));
        assert!(!should_logout(&Ok(3)));
    }
}
