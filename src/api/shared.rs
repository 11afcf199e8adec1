//! Shared Wishlist Calls
//!
//! Read-only views of other users' wishlists, plus marking items bought.

use super::{authorized, client, segment, send_json, CONFIG};
use crate::error::ApiError;
use crate::models::{Item, Wishlist};

fn shared_path(wishlist_id: &str) -> String {
    format!("/api/shared/{}", segment(wishlist_id))
}

fn shared_item_path(wishlist_id: &str, item_id: &str) -> String {
    format!("{}/item/{}", shared_path(wishlist_id), segment(item_id))
}

/// Wishlists other users have shared with the logged-in user
pub async fn list_shared() -> Result<Vec<Wishlist>, ApiError> {
    let request = authorized(client().get(CONFIG.wishlist_endpoint("/api/shared")))?;
    send_json(request).await
}

pub async fn get_shared(wishlist_id: &str) -> Result<Wishlist, ApiError> {
    let request = authorized(client().get(CONFIG.wishlist_endpoint(&shared_path(wishlist_id))))?;
    send_json(request).await
}

pub async fn list_shared_items(wishlist_id: &str) -> Result<Vec<Item>, ApiError> {
    let path = format!("{}/item", shared_path(wishlist_id));
    let request = authorized(client().get(CONFIG.wishlist_endpoint(&path)))?;
    send_json(request).await
}

/// Mark an item bought (`buy = true`) or release it again. Only the current
/// gifter may release an item.
pub async fn buy_item(wishlist_id: &str, item_id: &str, buy: bool) -> Result<Item, ApiError> {
    let request = authorized(client().put(CONFIG.wishlist_endpoint(&shared_item_path(wishlist_id, item_id))))?
        .query(&[("buy", buy)]);
    send_json(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_paths() {
        assert_eq!(shared_path("w1"), "/api/shared/w1");
        assert_eq!(shared_item_path("w1", "i2"), "/api/shared/w1/item/i2");
    }
}
