//! API Errors
//!
//! Failure modes of calls against the auth and wishlist services, plus the
//! user-facing messages each page shows for them.

use thiserror::Error;

/// Errors returned by the `api` layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never got an answer (server down, CORS, offline)
    #[error("No Server Response: {0}")]
    NoResponse(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found")]
    NotFound,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),

    /// Login answered 2xx but left no `auth-session` cookie
    #[error("No session cookie after login")]
    MissingSession,

    #[error("Browser storage unavailable: {0}")]
    Storage(String),
}

impl ApiError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            _ => ApiError::Status { status, body },
        }
    }

    /// Status code as the pages see it; 0 means no response at all
    pub fn status(&self) -> u16 {
        match self {
            ApiError::NoResponse(_) | ApiError::Storage(_) => 0,
            ApiError::Unauthorized => 401,
            ApiError::Forbidden => 403,
            ApiError::NotFound => 404,
            ApiError::Status { status, .. } => *status,
            ApiError::Decode(_) | ApiError::MissingSession => 200,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::from_status(status.as_u16(), err.to_string())
        } else {
            ApiError::NoResponse(err.to_string())
        }
    }
}

// ========================
// User-facing messages
// ========================

pub const INVALID_ENTRY: &str = "Invalid Entry";
pub const NO_SERVER_RESPONSE: &str = "No Server Response";
pub const REGISTRATION_FAILED: &str = "Registration Failed";
pub const LOGIN_FAILED: &str = "Login Failed";
pub const BAD_CREDENTIALS: &str = "Invalid email or password";
pub const ITEM_UPDATE_FAILED: &str = "A mishap occurred when attempting to update your item...";
pub const ITEM_DELETE_FAILED: &str = "We couldn't delete your item :<...";
pub const ITEM_CREATE_FAILED: &str = "We couldn't create your item :<...";
pub const WISHLIST_CREATE_FAILED: &str = "We couldn't create your wishlist :<...";
pub const WISHLIST_DELETE_FAILED: &str = "We couldn't delete your wishlist :<...";
pub const BUY_FAILED: &str = "Someone else may have already bought this item...";

pub fn registration_message(err: &ApiError) -> &'static str {
    if err.status() == 0 {
        NO_SERVER_RESPONSE
    } else {
        REGISTRATION_FAILED
    }
}

pub fn login_message(err: &ApiError) -> &'static str {
    match err.status() {
        0 => NO_SERVER_RESPONSE,
        401 => BAD_CREDENTIALS,
        _ => LOGIN_FAILED,
    }
}

pub fn share_failed_message(email: &str) -> String {
    format!("We couldn't share with the list with {}", email)
}

pub fn share_added_message(email: &str) -> String {
    format!("Added {}", email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(401, String::new()), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, String::new()), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(404, String::new()), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(409, "taken".into()),
            ApiError::Status { status: 409, body: "taken".into() }
        );
    }

    #[test]
    fn test_registration_message() {
        assert_eq!(registration_message(&ApiError::NoResponse("down".into())), "No Server Response");
        assert_eq!(registration_message(&ApiError::from_status(400, String::new())), "Registration Failed");
        assert_eq!(registration_message(&ApiError::Unauthorized), "Registration Failed");
    }

    #[test]
    fn test_login_message() {
        assert_eq!(login_message(&ApiError::NoResponse("down".into())), "No Server Response");
        assert_eq!(login_message(&ApiError::Unauthorized), "Invalid email or password");
        assert_eq!(login_message(&ApiError::from_status(500, String::new())), "Login Failed");
        assert_eq!(login_message(&ApiError::MissingSession), "Login Failed");
    }

    #[test]
    fn test_share_messages() {
        assert_eq!(share_added_message("a@b.com"), "Added a@b.com");
        assert_eq!(share_failed_message("a@b.com"), "We couldn't share with the list with a@b.com");
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::Forbidden.is_unauthorized());
    }
}
