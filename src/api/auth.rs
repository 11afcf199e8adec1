//! Auth Server Calls

use super::{client, send_empty, send_json, with_credentials, CONFIG};
use crate::error::ApiError;
use crate::session;
use crate::models::{Credentials, TokenResponse, User};

/// Register with the auth server, which answers with a registration token
pub async fn register_account(user: &User) -> Result<TokenResponse, ApiError> {
    let request = client().post(CONFIG.auth_endpoint("/api/register")).json(user);
    send_json(request).await
}

/// Sign in with Basic credentials. The body is only a greeting; the
/// bearer token arrives in the `auth-session` cookie.
pub async fn login(credentials: &Credentials) -> Result<String, ApiError> {
    let request = client()
        .get(CONFIG.auth_endpoint("/api/login"))
        .basic_auth(&credentials.email, Some(&credentials.password));
    send_empty(with_credentials(request)).await?;
    session::session_cookie().ok_or(ApiError::MissingSession)
}

/// Full sign-up: account on the auth server, then the profile on the
/// wishlist server using the token from the first step.
pub async fn register(user: &User) -> Result<(), ApiError> {
    let registration = register_account(user).await?;
    log::info!("Registered {} with auth server", user.email);
    super::create_user(user, &registration.token).await?;
    log::info!("Created wishlist profile for {}", user.email);
    Ok(())
}
