//! Client records and their create input.

use crate::{error::Result, ClientId, Error};
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Pattern used for `created_at` in JSON responses and exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time truncated to whole seconds.
///
/// Stores stamp new records with this so the persisted value and its
/// formatted form agree.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// A stored client record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Store-assigned identifier, never reused
    pub id: ClientId,
    pub name: String,
    pub email: String,
    /// Absent phones serialize as `null`
    pub phone: Option<String>,
    /// Empty when the client was created without one
    pub company: String,
    /// Set once at creation
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
}

impl Client {
    /// `created_at` rendered with [`TIMESTAMP_FORMAT`].
    pub fn created_at_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Phone number, or `placeholder` when absent or blank.
    pub fn phone_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.phone.as_deref() {
            Some(phone) if !phone.is_empty() => phone,
            _ => placeholder,
        }
    }

    /// Company name, or `placeholder` when empty.
    pub fn company_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.company.is_empty() {
            placeholder
        } else {
            &self.company
        }
    }
}

/// Create request as received from a caller.
///
/// Every field is optional at this stage; [`NewClient::validate`] decides
/// which ones are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewClient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

impl NewClient {
    /// Check required fields and produce a draft a store can persist.
    ///
    /// `name` and `email` must be present. Empty strings are accepted.
    pub fn validate(self) -> Result<ClientDraft> {
        let name = self.name.ok_or_else(|| Error::Validation("name".into()))?;
        let email = self.email.ok_or_else(|| Error::Validation("email".into()))?;

        Ok(ClientDraft {
            name,
            email,
            phone: self.phone,
            company: self.company.unwrap_or_default(),
        })
    }
}

/// A validated client that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: String,
}

impl ClientDraft {
    /// Create a draft with the required fields only.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            company: String::new(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Turn the draft into a record with the given identity.
    pub fn into_client(self, id: ClientId, created_at: NaiveDateTime) -> Client {
        Client {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            created_at,
        }
    }
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
