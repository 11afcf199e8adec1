//! Wishlist Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Item, Wishlist};

/// View state of one open wishlist, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct WishlistState {
    /// Wishlist header data
    pub wishlist: Wishlist,
    /// Items in display order
    pub items: Vec<Item>,
    /// Error banner
    pub error: Option<String>,
    /// Short-lived success banner
    pub feedback: Option<String>,
    pub loading: bool,
    /// New-item form open
    pub creating: bool,
    /// Share form open
    pub sharing: bool,
}

impl WishlistState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type WishlistStore = Store<WishlistState>;

// ========================
// Store Helper Functions
// ========================

// Each helper runs after an await, when the page owning the store may
// already be gone. A disposed store is left alone and the helper
// returns false.

/// Update an item in the store by ID
pub fn store_replace_item(store: &WishlistStore, updated: Item) -> bool {
    store.items().try_update(|items| replace_item(items, updated)).is_some()
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &WishlistStore, item_id: &str) -> bool {
    store.items().try_update(|items| remove_item(items, item_id)).is_some()
}

/// Append a newly created item
pub fn store_add_item(store: &WishlistStore, item: Item) -> bool {
    store.items().try_update(|items| items.push(item)).is_some()
}

/// Record a new share target on the loaded wishlist
pub fn store_add_shared_email(store: &WishlistStore, email: &str) -> bool {
    store
        .wishlist()
        .try_update(|wishlist| add_shared_email(wishlist, email))
        .is_some()
}

// ========================
// Plain list helpers
// ========================

pub fn replace_item(items: &mut [Item], updated: Item) {
    if let Some(item) = items.iter_mut().find(|item| item.id == updated.id) {
        *item = updated;
    }
}

pub fn remove_item(items: &mut Vec<Item>, item_id: &str) {
    items.retain(|item| item.id != item_id);
}

/// Returns false when the address was already listed
pub fn add_shared_email(wishlist: &mut Wishlist, email: &str) -> bool {
    if wishlist.shared_with.iter().any(|e| e == email) {
        return false;
    }
    wishlist.shared_with.push(email.to_string());
    true
}

pub fn remove_wishlist(wishlists: &mut Vec<Wishlist>, wishlist_id: &str) {
    wishlists.retain(|w| w.id != wishlist_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            price: 10.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_replace_item_keeps_order() {
        let mut items = vec![make_item("1", "Cup"), make_item("2", "Pen"), make_item("3", "Hat")];
        replace_item(&mut items, make_item("2", "Fountain pen"));
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Cup", "Fountain pen", "Hat"]);
    }

    #[test]
    fn test_replace_unknown_item_is_noop() {
        let mut items = vec![make_item("1", "Cup")];
        replace_item(&mut items, make_item("9", "Ghost"));
        assert_eq!(items, vec![make_item("1", "Cup")]);
    }

    #[test]
    fn test_remove_item() {
        let mut items = vec![make_item("1", "Cup"), make_item("2", "Pen")];
        remove_item(&mut items, "1");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "2");
    }

    #[test]
    fn test_add_shared_email_dedupes() {
        let mut wishlist = Wishlist { id: "w".into(), name: "Xmas".into(), ..Default::default() };
        assert!(add_shared_email(&mut wishlist, "a@b.com"));
        assert!(!add_shared_email(&mut wishlist, "a@b.com"));
        assert!(add_shared_email(&mut wishlist, "c@d.com"));
        assert_eq!(wishlist.shared_with, vec!["a@b.com", "c@d.com"]);
    }

    #[test]
    fn test_remove_wishlist() {
        let mut lists = vec![
            Wishlist { id: "a".into(), name: "A".into(), ..Default::default() },
            Wishlist { id: "b".into(), name: "B".into(), ..Default::default() },
        ];
        remove_wishlist(&mut lists, "a");
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, "b");
    }

    #[test]
    fn test_store_helpers_on_live_store() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(WishlistState::new()));

        assert!(store_add_item(&store, make_item("1", "Cup")));
        assert!(store_add_item(&store, make_item("2", "Pen")));
        assert!(store_replace_item(&store, make_item("1", "Mug")));
        assert!(store_remove_item(&store, "2"));
        assert!(store_add_shared_email(&store, "a@b.com"));

        let items = store.items().get_untracked();
        assert_eq!(items, vec![make_item("1", "Mug")]);
        assert_eq!(store.wishlist().get_untracked().shared_with, vec!["a@b.com"]);
    }

    #[test]
    fn test_store_helpers_after_page_disposed() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(WishlistState::new()));
        owner.cleanup();

        assert!(!store_replace_item(&store, make_item("1", "Mug")));
        assert!(!store_remove_item(&store, "1"));
        assert!(!store_add_item(&store, make_item("2", "Pen")));
        assert!(!store_add_shared_email(&store, "a@b.com"));
    }

    #[test]
    fn test_new_state_starts_loading() {
        let state = WishlistState::new();
        assert!(state.loading);
        assert!(!state.creating && !state.sharing);
        assert!(state.items.is_empty());
    }
}
