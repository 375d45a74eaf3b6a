//! The edit modal's form: four required text fields with inline messages.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::{EditValues, User};

/// A field of the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Website,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Website];

    /// Lowercase key, as used on the wire and in terminal commands.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Website => "website",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Website => "Website",
        }
    }

    /// Inline message shown when the field is left empty.
    pub fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Please enter name",
            Field::Email => "Please enter email",
            Field::Phone => "Please enter phone",
            Field::Website => "Please enter website",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown field '{s}' (expected name, email, phone or website)"))
    }
}

/// Current values and inline errors of the edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    name: String,
    email: String,
    phone: String,
    website: String,
    errors: Vec<Field>,
}

impl EditForm {
    /// Fill every field from `user`, clearing stale messages.
    pub fn seed(&mut self, user: &User) {
        self.name = user.name.clone();
        self.email = user.email.clone();
        self.phone = user.phone.clone();
        self.website = user.website.clone();
        self.errors.clear();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Website => &self.website,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Website => &mut self.website,
        };
        *slot = value.into();
    }

    /// Inline message for `field`, if the last validation flagged it.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors
            .contains(&field)
            .then(|| field.required_message())
    }

    /// Check all required fields. Only an empty string counts as missing;
    /// whitespace is a value like any other.
    ///
    /// On failure the offending fields keep their inline messages until the
    /// next validation, seed or reset.
    pub fn validate(&mut self) -> Result<EditValues, ValidationError> {
        self.errors = Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect();

        if !self.errors.is_empty() {
            return Err(ValidationError {
                missing: self.errors.clone(),
            });
        }

        Ok(EditValues {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
