//! Browser Session
//!
//! The bearer token lives in `sessionStorage` for the lifetime of the tab.
//! A successful login leaves it in the `auth-session` cookie, which is
//! copied into storage and expired again on logout.

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage};

use crate::error::ApiError;

pub const TOKEN_KEY: &str = "token";
pub const SESSION_COOKIE: &str = "auth-session";

fn session_storage() -> Result<Storage, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Storage("no window".into()))?;
    window
        .session_storage()
        .map_err(|e| ApiError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| ApiError::Storage("sessionStorage disabled".into()))
}

pub fn store_token(token: &str) -> Result<(), ApiError> {
    session_storage()?
        .set_item(TOKEN_KEY, token)
        .map_err(|e| ApiError::Storage(format!("{:?}", e)))
}

pub fn load_token() -> Option<String> {
    session_storage()
        .ok()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn is_logged_in() -> bool {
    load_token().is_some()
}

/// Forget the token and expire the session cookie
pub fn clear() {
    if let Ok(storage) = session_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
    if let Some(document) = html_document() {
        if let Err(e) = document.set_cookie(&expired_cookie(SESSION_COOKIE)) {
            log::warn!("Could not expire {}: {:?}", SESSION_COOKIE, e);
        }
    }
}

pub fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token)
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
}

/// Token the auth server left in the `auth-session` cookie, if readable
pub fn session_cookie() -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    cookie_value(&cookies, SESSION_COOKIE)
}

/// Look up `name` in a `document.cookie` string ("a=1; b=2")
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

fn expired_cookie(name: &str) -> String {
    format!("{}=; Max-Age=0; path=/", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
    }

    #[test]
    fn test_cookie_value_finds_session() {
        let cookies = "theme=dark; auth-session=eyJhbGciOi.x.y; lang=en";
        assert_eq!(cookie_value(cookies, SESSION_COOKIE).as_deref(), Some("eyJhbGciOi.x.y"));
    }

    #[test]
    fn test_cookie_value_missing_or_empty() {
        assert_eq!(cookie_value("", SESSION_COOKIE), None);
        assert_eq!(cookie_value("theme=dark", SESSION_COOKIE), None);
        assert_eq!(cookie_value("auth-session=; theme=dark", SESSION_COOKIE), None);
        // prefix of another cookie's name must not match
        assert_eq!(cookie_value("auth-session-old=abc", SESSION_COOKIE), None);
    }

    #[test]
    fn test_cookie_value_strips_quotes() {
        assert_eq!(cookie_value("auth-session=\"t0k\"", SESSION_COOKIE).as_deref(), Some("t0k"));
    }

    #[test]
    fn test_expired_cookie() {
        assert_eq!(expired_cookie(SESSION_COOKIE), "auth-session=; Max-Age=0; path=/");
    }
}
