//! Wishlist Calls

use serde::Serialize;

use super::{authorized, client, segment, send_empty, send_json, CONFIG};
use crate::error::ApiError;
use crate::models::{Wishlist, WishlistUpdate};

#[derive(Serialize)]
struct NewWishlist<'a> {
    name: &'a str,
}

pub(crate) fn wishlist_path(wishlist_id: &str) -> String {
    format!("/api/wishlist/{}", segment(wishlist_id))
}

/// Wishlists owned by the logged-in user, oldest first
pub async fn list_wishlists() -> Result<Vec<Wishlist>, ApiError> {
    let request = authorized(client().get(CONFIG.wishlist_endpoint("/api/wishlist")))?;
    send_json(request).await
}

pub async fn create_wishlist(name: &str) -> Result<Wishlist, ApiError> {
    let request = authorized(client().post(CONFIG.wishlist_endpoint("/api/wishlist")))?
        .json(&NewWishlist { name });
    send_json(request).await
}

pub async fn get_wishlist(wishlist_id: &str) -> Result<Wishlist, ApiError> {
    let request = authorized(client().get(CONFIG.wishlist_endpoint(&wishlist_path(wishlist_id))))?;
    send_json(request).await
}

pub async fn update_wishlist(wishlist_id: &str, update: &WishlistUpdate) -> Result<Wishlist, ApiError> {
    let request = authorized(client().put(CONFIG.wishlist_endpoint(&wishlist_path(wishlist_id))))?
        .json(update);
    send_json(request).await
}

pub async fn delete_wishlist(wishlist_id: &str) -> Result<(), ApiError> {
    let request = authorized(client().delete(CONFIG.wishlist_endpoint(&wishlist_path(wishlist_id))))?;
    send_empty(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wishlist_path() {
        assert_eq!(wishlist_path("6250a1"), "/api/wishlist/6250a1");
    }
}
