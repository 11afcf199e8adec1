//! User Calls

use super::{authorized, client, send_empty, send_json, CONFIG};
use crate::error::ApiError;
use crate::models::{User, UserProfile};
use crate::session;

/// Create the wishlist-server profile with a freshly issued registration token
pub async fn create_user(user: &User, registration_token: &str) -> Result<(), ApiError> {
    let request = client()
        .post(CONFIG.wishlist_endpoint("/api/user"))
        .header(reqwest::header::AUTHORIZATION, session::bearer_header(registration_token))
        .json(user);
    send_empty(request).await
}

pub async fn get_profile() -> Result<UserProfile, ApiError> {
    let request = authorized(client().get(CONFIG.wishlist_endpoint("/api/user")))?;
    send_json(request).await
}
