//! User Directory UI Library
//!
//! This crate provides the User Directory user interface - a small
//! single-page app that lists, views, creates, edits, and deletes user
//! records against a public demo REST API.
//!
//! # Modules
//!
//! - [`app`]: Root application component and routing
//! - [`client`]: HTTP client for the remote users API
//! - [`components`]: UI components (user list, detail view, modals)

pub mod app;
pub mod client;
pub mod components;

pub use app::App;
