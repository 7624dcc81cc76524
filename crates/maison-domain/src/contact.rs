use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Guest contact information collected on the Details step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub special_requests: String,
}

impl ContactDetails {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::SpecialRequests => &self.special_requests,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::SpecialRequests => self.special_requests = value,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// Enumerates the contact inputs of the Details step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    SpecialRequests,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::SpecialRequests,
    ];

    pub const REQUIRED: [ContactField; 4] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
    ];

    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::SpecialRequests)
    }

    /// Stable machine key, also accepted by [`FromStr`].
    pub fn key(self) -> &'static str {
        match self {
            ContactField::FirstName => "first-name",
            ContactField::LastName => "last-name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::SpecialRequests => "requests",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownContactField(pub String);

impl fmt::Display for UnknownContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown contact field `{}`", self.0)
    }
}

impl std::error::Error for UnknownContactField {}

impl FromStr for ContactField {
    type Err = UnknownContactField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "first-name" | "firstname" | "first" => Ok(ContactField::FirstName),
            "last-name" | "lastname" | "last" => Ok(ContactField::LastName),
            "email" | "e-mail" => Ok(ContactField::Email),
            "phone" | "tel" => Ok(ContactField::Phone),
            "requests" | "special-requests" | "notes" => Ok(ContactField::SpecialRequests),
            _ => Err(UnknownContactField(value.to_string())),
        }
    }
}
