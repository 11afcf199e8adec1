//! Form Validation
//!
//! Field rules for the registration, login, item and share forms.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{ItemDraft, User};

static FIRST_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]{1,}").unwrap());
static LAST_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z'-]{1,}").unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$",
    )
    .unwrap()
});
static PASSWORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S{5,}").unwrap());

pub const DEFAULT_ROLE: &str = "user";

pub fn is_valid_first_name(value: &str) -> bool {
    FIRST_NAME_RE.is_match(value)
}

pub fn is_valid_last_name(value: &str) -> bool {
    LAST_NAME_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_password(value: &str) -> bool {
    PASSWORD_RE.is_match(value)
}

// ========================
// Registration
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// One flag per registration field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationValidity {
    pub first_name: bool,
    pub last_name: bool,
    pub email: bool,
    pub password: bool,
}

impl RegistrationValidity {
    /// Submit stays disabled until this is true
    pub fn all_valid(&self) -> bool {
        self.first_name && self.last_name && self.email && self.password
    }
}

impl RegistrationForm {
    pub fn validity(&self) -> RegistrationValidity {
        RegistrationValidity {
            first_name: is_valid_first_name(&self.first_name),
            last_name: is_valid_last_name(&self.last_name),
            email: is_valid_email(&self.email),
            password: is_valid_password(&self.password),
        }
    }

    pub fn to_user(&self) -> User {
        User {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            password: self.password.clone(),
            roles: vec![DEFAULT_ROLE.to_string()],
        }
    }
}

// ========================
// Login
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn is_submittable(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

// ========================
// Items
// ========================

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFormError {
    #[error("Every wish needs a name.")]
    MissingName,

    #[error("Price must be a number, zero or more.")]
    InvalidPrice,
}

/// Raw text of the item form inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub price: String,
    pub supplier: String,
}

impl ItemForm {
    pub fn from_draft(draft: &ItemDraft) -> Self {
        Self {
            name: draft.name.clone(),
            price: draft.price.to_string(),
            supplier: draft.supplier.clone(),
        }
    }

    pub fn validate(&self) -> Result<ItemDraft, ItemFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ItemFormError::MissingName);
        }
        let price = parse_price(&self.price).ok_or(ItemFormError::InvalidPrice)?;
        Ok(ItemDraft {
            name: name.to_string(),
            price,
            supplier: self.supplier.trim().to_string(),
        })
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Accepts "12", "12.5", "$12.50"; rejects negatives and non-finite values
fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let raw = raw.strip_prefix('$').unwrap_or(raw);
    raw.parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

// ========================
// Sharing
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareForm {
    pub email: String,
}

impl ShareForm {
    pub fn is_valid(&self) -> bool {
        is_valid_email(self.email.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        assert!(is_valid_first_name("Jo"));
        assert!(is_valid_first_name("J0hn"));
        assert!(!is_valid_first_name(""));
        assert!(!is_valid_first_name("123"));
    }

    #[test]
    fn test_last_name() {
        assert!(is_valid_last_name("O'Neil"));
        assert!(is_valid_last_name("Smith-Jones"));
        assert!(is_valid_last_name("-"));
        assert!(!is_valid_last_name(""));
        assert!(!is_valid_last_name("42"));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("example@email.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.org"));
        assert!(!is_valid_email("example@email"));
        assert!(!is_valid_email("Example@email.com"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("a@b.com "));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_password() {
        assert!(is_valid_password("hunter2"));
        assert!(is_valid_password("abcde fg"));
        assert!(!is_valid_password("abcd"));
        assert!(!is_valid_password(" abcdef"));
        assert!(!is_valid_password(""));
    }

    #[test]
    fn test_registration_submit_gate() {
        let mut form = RegistrationForm {
            first_name: "Jo".into(),
            last_name: "March".into(),
            email: "jo@example.com".into(),
            password: "abc".into(),
        };
        let validity = form.validity();
        assert!(validity.first_name && validity.last_name && validity.email);
        assert!(!validity.password);
        assert!(!validity.all_valid());

        form.password = "abcdef".into();
        assert!(form.validity().all_valid());
    }

    #[test]
    fn test_registration_to_user_has_user_role() {
        let form = RegistrationForm {
            first_name: "Jo".into(),
            last_name: "March".into(),
            email: "jo@example.com".into(),
            password: "abcdef".into(),
        };
        let user = form.to_user();
        assert_eq!(user.roles, vec!["user".to_string()]);
        assert_eq!(user.first_name, "Jo");
    }

    #[test]
    fn test_login_form() {
        let mut form = LoginForm::default();
        assert!(!form.is_submittable());
        form.email = "jo@example.com".into();
        assert!(!form.is_submittable());
        form.password = "x".into();
        assert!(form.is_submittable());
    }

    #[test]
    fn test_item_form() {
        let form = ItemForm {
            name: "  Kettle ".into(),
            price: "$19.99".into(),
            supplier: " Shop ".into(),
        };
        let draft = form.validate().unwrap();
        assert_eq!(draft.name, "Kettle");
        assert_eq!(draft.price, 19.99);
        assert_eq!(draft.supplier, "Shop");

        let blank = ItemForm { name: "   ".into(), price: "1".into(), ..Default::default() };
        assert_eq!(blank.validate(), Err(ItemFormError::MissingName));

        let negative = ItemForm { name: "Cup".into(), price: "-3".into(), ..Default::default() };
        assert_eq!(negative.validate(), Err(ItemFormError::InvalidPrice));

        let nan = ItemForm { name: "Cup".into(), price: "NaN".into(), ..Default::default() };
        assert!(!nan.is_valid());

        let empty_price = ItemForm { name: "Cup".into(), ..Default::default() };
        assert!(!empty_price.is_valid());
    }

    #[test]
    fn test_item_form_error_messages() {
        assert_eq!(ItemFormError::MissingName.to_string(), "Every wish needs a name.");
        assert_eq!(ItemFormError::InvalidPrice.to_string(), "Price must be a number, zero or more.");
    }

    #[test]
    fn test_item_form_round_trips_draft() {
        let draft = ItemDraft { name: "Lamp".into(), price: 30.0, supplier: "".into() };
        assert_eq!(ItemForm::from_draft(&draft).validate(), Ok(draft));
    }

    #[test]
    fn test_share_form() {
        assert!(ShareForm { email: " friend@mail.com ".into() }.is_valid());
        assert!(!ShareForm { email: "friend".into() }.is_valid());
    }
}
