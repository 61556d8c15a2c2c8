//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `users`: user list, create/edit and delete modals, detail view
//! - `common`: shared/reusable components

pub mod common;
pub mod users;
