//! Frontend Models
//!
//! Data structures exchanged with the auth and wishlist services.

use serde::{Deserialize, Serialize};

/// Registration payload (auth server and wishlist server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub roles: Vec<String>,
}

/// User as returned by the wishlist server
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Wishlist data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub item_count: u32,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub shared_with: Vec<String>,
}

impl Wishlist {
    pub fn is_shared(&self) -> bool {
        !self.shared_with.is_empty()
    }

    /// "Shared with a | b"
    pub fn shared_label(&self) -> Option<String> {
        self.is_shared()
            .then(|| format!("Shared with {}", self.shared_with.join(" | ")))
    }
}

/// Partial wishlist update; absent fields are left untouched by the server
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_with: Option<Vec<String>>,
}

impl WishlistUpdate {
    /// The server only looks at the first address
    pub fn share_with(email: &str) -> Self {
        Self {
            name: None,
            shared_with: Some(vec![email.to_string()]),
        }
    }
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub gifter: Option<String>,
    #[serde(default)]
    pub wishlist_id: Option<String>,
}

impl Item {
    pub fn is_bought(&self) -> bool {
        self.gifter.is_some()
    }

    pub fn bought_by(&self, email: &str) -> bool {
        self.gifter.as_deref() == Some(email)
    }

    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Key for keyed lists: stable while the item is unchanged, new once
    /// any displayed field changes
    pub fn render_key(&self) -> ItemKey {
        (
            self.id.clone(),
            self.name.clone(),
            self.price.to_bits(),
            self.supplier.clone(),
            self.gifter.clone(),
        )
    }
}

pub type ItemKey = (String, String, u64, String, Option<String>);

/// Body of item create/update requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDraft {
    pub name: String,
    pub price: f64,
    pub supplier: String,
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price,
            supplier: item.supplier.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User {
            email: "jo@example.com".into(),
            first_name: "Jo".into(),
            last_name: "March".into(),
            password: "secret".into(),
            roles: vec!["user".into()],
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({
                "email": "jo@example.com",
                "firstName": "Jo",
                "lastName": "March",
                "password": "secret",
                "roles": ["user"]
            })
        );
    }

    #[test]
    fn test_wishlist_tolerates_missing_fields() {
        let wishlist: Wishlist = serde_json::from_value(json!({
            "id": "6250a1",
            "name": "Birthday"
        }))
        .unwrap();
        assert_eq!(wishlist.item_count, 0);
        assert!(wishlist.shared_with.is_empty());
        assert_eq!(wishlist.shared_label(), None);
    }

    #[test]
    fn test_wishlist_shared_label() {
        let wishlist: Wishlist = serde_json::from_value(json!({
            "id": "1",
            "name": "Xmas",
            "owner": "me@example.com",
            "itemCount": 2,
            "sharedWith": ["a@b.com", "c@d.com"]
        }))
        .unwrap();
        assert_eq!(wishlist.item_count, 2);
        assert_eq!(wishlist.shared_label().as_deref(), Some("Shared with a@b.com | c@d.com"));
    }

    #[test]
    fn test_share_update_omits_name() {
        let value = serde_json::to_value(WishlistUpdate::share_with("a@b.com")).unwrap();
        assert_eq!(value, json!({ "sharedWith": ["a@b.com"] }));
    }

    #[test]
    fn test_item_gifter() {
        let item: Item = serde_json::from_value(json!({
            "id": "i1",
            "name": "Kettle",
            "price": 24.5,
            "supplier": "Shop",
            "gifter": "a@b.com"
        }))
        .unwrap();
        assert!(item.is_bought());
        assert!(item.bought_by("a@b.com"));
        assert!(!item.bought_by("x@y.com"));
        assert_eq!(item.price_label(), "$24.50");
    }

    #[test]
    fn test_render_key_tracks_displayed_fields() {
        let item = Item {
            id: "i1".into(),
            name: "Kettle".into(),
            price: 24.5,
            ..Default::default()
        };
        assert_eq!(item.render_key(), item.clone().render_key());

        let renamed = Item { name: "Teapot".into(), ..item.clone() };
        assert_ne!(item.render_key(), renamed.render_key());

        let bought = Item { gifter: Some("a@b.com".into()), ..item.clone() };
        assert_ne!(item.render_key(), bought.render_key());
    }
}
