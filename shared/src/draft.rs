//! The in-progress copy of a user's editable fields
//!
//! A `UserDraft` exists only while the create/edit modal is open. It is
//! seeded from an existing record when editing, empty when creating, and
//! discarded on cancel or successful submit. Serialized as-is it forms the
//! POST/PUT request body.

use serde::Serialize;

use crate::user::User;

/// Editable subset of a user record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: AddressDraft,
    pub company: CompanyDraft,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddressDraft {
    pub street: String,
    pub city: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyDraft {
    pub name: String,
}

/// Path to a single draft field, one level of nesting deep
///
/// The draft is a tree of named fields; form inputs address them through
/// this type rather than flattened string keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Phone,
    Address(AddressField),
    Company(CompanyField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Street,
    City,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyField {
    Name,
}

impl UserDraft {
    /// Copy the editable fields of an existing record into a fresh draft
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: AddressDraft {
                street: user.address.street.clone(),
                city: user.address.city.clone(),
            },
            company: CompanyDraft {
                name: user.company.name.clone(),
            },
        }
    }

    /// Set one field, leaving every sibling untouched
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Email => self.email = value,
            DraftField::Phone => self.phone = value,
            DraftField::Address(AddressField::Street) => self.address.street = value,
            DraftField::Address(AddressField::City) => self.address.city = value,
            DraftField::Company(CompanyField::Name) => self.company.name = value,
        }
    }

    /// Whether all required fields are non-empty (`company.name` is optional)
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
            && !self.address.street.is_empty()
            && !self.address.city.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{Address, Company};

    fn draft() -> UserDraft {
        UserDraft {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            phone: "1".to_string(),
            address: AddressDraft {
                street: "S".to_string(),
                city: "C".to_string(),
            },
            company: CompanyDraft {
                name: "Acme".to_string(),
            },
        }
    }

    #[test]
    fn set_nested_field_leaves_siblings_untouched() {
        let mut d = draft();
        d.set(DraftField::Address(AddressField::Street), "Elm St".to_string());

        assert_eq!(d.address.street, "Elm St");
        assert_eq!(d.address.city, "C");
        assert_eq!(d.name, "A");
        assert_eq!(d.company.name, "Acme");
    }

    #[test]
    fn set_top_level_field() {
        let mut d = draft();
        d.set(DraftField::Email, "new@b.com".to_string());

        assert_eq!(d.email, "new@b.com");
        assert_eq!(d.phone, "1");
    }

    #[test]
    fn from_user_copies_editable_subset_only() {
        let user = User {
            id: 7,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            phone: "1-770".to_string(),
            website: "hildegard.org".to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                city: "Gwenborough".to_string(),
            },
            company: Company {
                name: "Romaguera-Crona".to_string(),
            },
        };

        let d = UserDraft::from_user(&user);
        assert_eq!(d.name, "Leanne Graham");
        assert_eq!(d.address.street, "Kulas Light");
        assert_eq!(d.address.city, "Gwenborough");
        assert_eq!(d.company.name, "Romaguera-Crona");
        // Re-seeding from the same user is equivalent to never editing
        assert_eq!(d, UserDraft::from_user(&user));
    }

    #[test]
    fn required_fields_check() {
        let mut d = draft();
        assert!(d.has_required_fields());

        d.company.name.clear();
        assert!(d.has_required_fields(), "company name is optional");

        d.address.city.clear();
        assert!(!d.has_required_fields());

        assert!(!UserDraft::default().has_required_fields());
    }

    #[test]
    fn serializes_as_nested_request_body() {
        let body = serde_json::to_value(draft()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "phone": "1",
                "address": { "street": "S", "city": "C" },
                "company": { "name": "Acme" }
            })
        );
    }
}
