//! User components
//!
//! - `list`: the user list page, owner of the collection and all CRUD state
//! - `form_modal`: create/edit form modal
//! - `delete_modal`: delete confirmation modal
//! - `detail`: read-only detail view for a single user

mod delete_modal;
mod detail;
mod form_modal;
mod list;

pub use delete_modal::DeleteConfirmModal;
pub use detail::UserDetail;
pub use form_modal::UserFormModal;
pub use list::UserList;
