//! Contact details collected before checkout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four required contact inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    /// Given name
    FirstName,
    /// Family name
    LastName,
    /// Email address
    Email,
    /// Phone number
    Phone,
}

impl ContactField {
    /// Every field, in form order
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Phone];

    /// Wire name of the field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// Form label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
        }
    }

    /// Example value shown in the empty input
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "John",
            Self::LastName => "Doe",
            Self::Email => "john.doe@example.com",
            Self::Phone => "+357 99 123 456",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field name that is not part of the contact form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown contact field: {0}")]
pub struct UnknownContactField(pub String);

impl FromStr for ContactField {
    type Err = UnknownContactField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownContactField(s.to_string()))
    }
}

/// Values typed into the contact inputs, stored verbatim
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
}

impl ContactDetails {
    /// Current value of a field
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
        }
    }

    /// Replaces a field's value. Returns whether the stored value changed.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// Fields that are still empty, in form order
    #[must_use]
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// True when every field holds at least one character
    #[must_use]
    pub fn is_complete(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| !self.get(field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names() {
        assert_eq!("firstName".parse(), Ok(ContactField::FirstName));
        assert_eq!("phone".parse(), Ok(ContactField::Phone));
        assert_eq!(
            "first_name".parse::<ContactField>(),
            Err(UnknownContactField("first_name".to_string()))
        );
    }

    #[test]
    fn set_reports_change() {
        let mut contact = ContactDetails::default();
        assert!(contact.set(ContactField::Email, "a@b.cy"));
        assert!(!contact.set(ContactField::Email, "a@b.cy"));
        assert_eq!(contact.get(ContactField::Email), "a@b.cy");
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut contact = ContactDetails::default();
        for field in ContactField::ALL {
            contact.set(field, " ");
        }
        assert!(contact.is_complete());
    }

    #[test]
    fn missing_fields_in_form_order() {
        let mut contact = ContactDetails::default();
        contact.set(ContactField::LastName, "Doe");
        assert_eq!(
            contact.missing_fields(),
            vec![ContactField::FirstName, ContactField::Email, ContactField::Phone]
        );
        assert!(!contact.is_complete());
    }
}
