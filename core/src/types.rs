//! Domain DTOs for the users API.
//!
//! # Design
//! These types mirror the upstream `/users` document but are defined
//! independently from the mock-server crate. Integration tests catch any
//! schema drift between the two. Fields the listing never shows (`geo`,
//! `bs`) are dropped on decode.

use serde::{Deserialize, Serialize};

/// A single user record returned by the API.
///
/// `liked` is client-only state. It is never read from or written to JSON,
/// so a record decoded from the network always starts out not liked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
    #[serde(skip)]
    pub liked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
}

/// The four user fields the edit form may change, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl User {
    /// Merge validated form values into this record. Everything else,
    /// including `liked`, is left alone.
    pub fn apply(&mut self, values: EditValues) {
        self.name = values.name;
        self.email = values.email;
        self.phone = values.phone;
        self.website = values.website;
    }
}
