//! Item Calls
//!
//! Items are always addressed through their wishlist.

use super::wishlist::wishlist_path;
use super::{authorized, client, segment, send_empty, send_json, CONFIG};
use crate::error::ApiError;
use crate::models::{Item, ItemDraft};

fn items_path(wishlist_id: &str) -> String {
    format!("{}/item", wishlist_path(wishlist_id))
}

fn item_path(wishlist_id: &str, item_id: &str) -> String {
    format!("{}/{}", items_path(wishlist_id), segment(item_id))
}

pub async fn list_items(wishlist_id: &str) -> Result<Vec<Item>, ApiError> {
    let request = authorized(client().get(CONFIG.wishlist_endpoint(&items_path(wishlist_id))))?;
    let items: Vec<Item> = send_json(request).await?;
    log::debug!("Loaded {} items for wishlist {}", items.len(), wishlist_id);
    Ok(items)
}

pub async fn create_item(wishlist_id: &str, draft: &ItemDraft) -> Result<Item, ApiError> {
    let request = authorized(client().post(CONFIG.wishlist_endpoint(&items_path(wishlist_id))))?
        .json(draft);
    send_json(request).await
}

pub async fn update_item(wishlist_id: &str, item_id: &str, draft: &ItemDraft) -> Result<Item, ApiError> {
    let request = authorized(client().put(CONFIG.wishlist_endpoint(&item_path(wishlist_id, item_id))))?
        .json(draft);
    send_json(request).await
}

pub async fn delete_item(wishlist_id: &str, item_id: &str) -> Result<(), ApiError> {
    let request = authorized(client().delete(CONFIG.wishlist_endpoint(&item_path(wishlist_id, item_id))))?;
    send_empty(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_paths() {
        assert_eq!(items_path("w1"), "/api/wishlist/w1/item");
        assert_eq!(item_path("w1", "i9"), "/api/wishlist/w1/item/i9");
    }
}
