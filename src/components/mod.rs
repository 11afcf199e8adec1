//! UI Components
//!
//! Reusable Leptos components and the pages built from them.

mod confirm_button;
mod home;
mod item_card;
mod item_form;
mod login;
mod navbar;
mod profile;
mod register;
mod share_form;
mod shared_wishlist;
mod shared_wishlists;
mod spinner;
mod validity_mark;
mod wishlist;
mod wishlists;

pub use confirm_button::{removal_prompt, ConfirmButton};
pub use home::{Home, NotFound};
pub use item_card::ItemCard;
pub use item_form::{ItemFormFields, NewItemForm};
pub use login::Login;
pub use navbar::Navbar;
pub use profile::Profile;
pub use register::Register;
pub use share_form::ShareForm;
pub use shared_wishlist::SharedWishlistPage;
pub use shared_wishlists::SharedWishlistsPage;
pub use spinner::Spinner;
pub use validity_mark::ValidityMark;
pub use wishlist::WishlistPage;
pub use wishlists::WishlistsPage;
