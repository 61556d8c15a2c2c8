//! User record types and collection synchronization helpers
//!
//! The `User` struct mirrors the subset of the remote API's user
//! representation that the app displays. The server sends more sub-fields
//! (`address.suite`, `address.zipcode`, `company.catchPhrase`, ...) which
//! serde ignores on deserialization.

use serde::{Deserialize, Serialize};

/// Server-assigned user identifier. Never generated on the client.
pub type UserId = u64;

/// A user record as returned by the remote API
///
/// Every field except `id` defaults when absent: the create endpoint echoes
/// back only the submitted draft plus the assigned id, so `username` and
/// `website` may be missing from a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub website: String,

    #[serde(default)]
    pub address: Address,

    #[serde(default)]
    pub company: Company,
}

/// Postal address (displayed/edited subset)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,

    #[serde(default)]
    pub city: String,
}

/// Employer info (displayed/edited subset)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

/// Replace the record whose id matches `updated.id` with the server's
/// returned representation. All other records are left untouched.
///
/// Returns `false` when no record with that id exists.
pub fn replace_by_id(users: &mut Vec<User>, updated: User) -> bool {
    match users.iter_mut().find(|u| u.id == updated.id) {
        Some(user) => {
            *user = updated;
            true
        }
        None => false,
    }
}

/// Remove the record with the given id after a confirmed server delete.
///
/// Returns `false` when no record with that id exists.
pub fn remove_by_id(users: &mut Vec<User>, id: UserId) -> bool {
    let before = users.len();
    users.retain(|u| u.id != id);
    users.len() < before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: UserId, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: format!("{}_{}", name.to_lowercase(), id),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "1-770-736-8031".to_string(),
            website: "example.com".to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                city: "Gwenborough".to_string(),
            },
            company: Company {
                name: "Romaguera-Crona".to_string(),
            },
        }
    }

    #[test]
    fn replace_swaps_only_the_matching_record() {
        let mut users = vec![sample(1, "Leanne"), sample(2, "Ervin"), sample(3, "Clementine")];
        let untouched_first = users[0].clone();
        let untouched_last = users[2].clone();

        let mut updated = sample(2, "Ervin Howell");
        updated.email = "ervin.howell@melissa.tv".to_string();

        assert!(replace_by_id(&mut users, updated.clone()));
        assert_eq!(users.len(), 3);
        assert_eq!(users[0], untouched_first);
        assert_eq!(users[1], updated);
        assert_eq!(users[2], untouched_last);
    }

    #[test]
    fn replace_of_unknown_id_is_a_no_op() {
        let mut users = vec![sample(1, "Leanne")];
        let snapshot = users.clone();

        assert!(!replace_by_id(&mut users, sample(42, "Nobody")));
        assert_eq!(users, snapshot);
    }

    #[test]
    fn remove_drops_exactly_one_record() {
        let mut users = vec![sample(1, "Leanne"), sample(2, "Ervin")];

        assert!(remove_by_id(&mut users, 1));
        assert_eq!(users.len(), 1);
        assert!(users.iter().all(|u| u.id != 1));
    }

    #[test]
    fn remove_of_unknown_id_is_a_no_op() {
        let mut users = vec![sample(1, "Leanne")];
        let snapshot = users.clone();

        assert!(!remove_by_id(&mut users, 99));
        assert_eq!(users, snapshot);
    }

    #[test]
    fn delete_of_last_record_empties_the_collection() {
        let mut users = vec![sample(1, "Leanne Graham")];
        assert!(remove_by_id(&mut users, 1));
        assert!(users.is_empty());
    }

    #[test]
    fn ignores_unknown_server_fields() {
        // Shape taken from jsonplaceholder's GET /users/1
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.username, "Bret");
        assert_eq!(user.address.street, "Kulas Light");
        assert_eq!(user.address.city, "Gwenborough");
        assert_eq!(user.company.name, "Romaguera-Crona");
    }

    #[test]
    fn create_response_defaults_missing_fields() {
        // POST /users echoes the draft plus the assigned id; no username
        // or website in the payload.
        let json = r#"{
            "id": 11,
            "name": "A",
            "email": "a@b.com",
            "phone": "1",
            "address": { "street": "S", "city": "C" }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 11);
        assert_eq!(user.name, "A");
        assert_eq!(user.username, "");
        assert_eq!(user.website, "");
        assert_eq!(user.company, Company::default());
    }
}
