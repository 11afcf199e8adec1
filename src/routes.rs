//! Page Model
//!
//! The app is a single page; which view is showing lives in a `Page` signal
//! mirrored into `location.hash` so reloads and the back button work.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    Wishlists,
    Wishlist(String),
    Shared,
    SharedWishlist(String),
    Profile,
    NotFound,
}

impl Page {
    /// Parse `#/wishlists/<id>` style hashes. Empty hash is `Home`.
    pub fn from_hash(hash: &str) -> Page {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let first = segments.next();
        let second = segments.next().map(decode);
        if segments.next().is_some() {
            return Page::NotFound;
        }
        match (first, second) {
            (None, _) => Page::Home,
            (Some("login"), None) => Page::Login,
            (Some("register"), None) => Page::Register,
            (Some("wishlists"), None) => Page::Wishlists,
            (Some("wishlists"), Some(id)) => Page::Wishlist(id),
            (Some("shared"), None) => Page::Shared,
            (Some("shared"), Some(id)) => Page::SharedWishlist(id),
            (Some("profile"), None) => Page::Profile,
            _ => Page::NotFound,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Page::Home => "#/".to_string(),
            Page::Login => "#/login".to_string(),
            Page::Register => "#/register".to_string(),
            Page::Wishlists => "#/wishlists".to_string(),
            Page::Wishlist(id) => format!("#/wishlists/{}", encode(id)),
            Page::Shared => "#/shared".to_string(),
            Page::SharedWishlist(id) => format!("#/shared/{}", encode(id)),
            Page::Profile => "#/profile".to_string(),
            Page::NotFound => "#/not-found".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Page::Home | Page::Login | Page::Register | Page::NotFound)
    }

    /// Where a visit to `self` actually lands
    pub fn resolve(self, logged_in: bool) -> Page {
        match self {
            Page::Login | Page::Register if logged_in => Page::Wishlists,
            page if page.requires_auth() && !logged_in => Page::Login,
            page => page,
        }
    }
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}

fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hash() {
        assert_eq!(Page::from_hash(""), Page::Home);
        assert_eq!(Page::from_hash("#/"), Page::Home);
        assert_eq!(Page::from_hash("#/login"), Page::Login);
        assert_eq!(Page::from_hash("#/register/"), Page::Register);
        assert_eq!(Page::from_hash("#/wishlists"), Page::Wishlists);
        assert_eq!(Page::from_hash("#/wishlists/6250a1"), Page::Wishlist("6250a1".into()));
        assert_eq!(Page::from_hash("#/shared/abc"), Page::SharedWishlist("abc".into()));
        assert_eq!(Page::from_hash("#/profile"), Page::Profile);
        assert_eq!(Page::from_hash("#/nope"), Page::NotFound);
        assert_eq!(Page::from_hash("#/wishlists/a/b"), Page::NotFound);
        assert_eq!(Page::from_hash("#/profile/1"), Page::NotFound);
    }

    #[test]
    fn test_hash_round_trip_with_odd_ids() {
        let page = Page::Wishlist("a b/c".into());
        assert_eq!(page.to_hash(), "#/wishlists/a%20b%2Fc");
        assert_eq!(Page::from_hash(&page.to_hash()), page);
    }

    #[test]
    fn test_logged_in_users_skip_auth_pages() {
        assert_eq!(Page::Login.resolve(true), Page::Wishlists);
        assert_eq!(Page::Register.resolve(true), Page::Wishlists);
        assert_eq!(Page::Profile.resolve(true), Page::Profile);
    }

    #[test]
    fn test_logged_out_users_go_to_login() {
        assert_eq!(Page::Wishlist("x".into()).resolve(false), Page::Login);
        assert_eq!(Page::Shared.resolve(false), Page::Login);
        assert_eq!(Page::Register.resolve(false), Page::Register);
        assert_eq!(Page::Home.resolve(false), Page::Home);
    }
}
