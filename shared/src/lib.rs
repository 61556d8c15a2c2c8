//! Shared types for the User Directory app
//!
//! This crate contains the domain types used by the UI:
//! - The `User` record as returned by the remote API
//! - The editable `UserDraft` held while a create/edit form is open
//! - Pure helpers for keeping the in-memory collection in sync with
//!   server responses

pub mod draft;
pub mod user;

pub use draft::*;
pub use user::*;
