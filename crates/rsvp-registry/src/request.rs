//! Validation of untrusted request bodies into typed commands.
//!
//! Checks run in a fixed order and the first failure wins, so a given body
//! always produces the same diagnostic. A body that is not a JSON object is
//! treated as an object with no fields.

use serde_json::Value;

use crate::{AdditionalGuest, Host, RegistryError, Result};

/// Request to invite a new guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddGuestCommand {
    pub name: String,
    pub host: Host,
    pub is_family: bool,
}

impl AddGuestCommand {
    /// Creates a command from already-typed values.
    pub fn new(name: impl Into<String>, host: Host, is_family: bool) -> Self {
        Self {
            name: name.into(),
            host,
            is_family,
        }
    }

    /// Parses an add-guest body.
    ///
    /// Order: `name`, duplicate check (via `exists`), `host`, `isFamily`.
    pub fn from_request(body: &Value, exists: impl FnOnce(&str) -> bool) -> Result<Self> {
        let name = required_str(body, "name")?;
        if exists(name) {
            return Err(RegistryError::GuestExists {
                name: name.to_string(),
            });
        }

        let host = field(body, "host")
            .and_then(Value::as_str)
            .and_then(|host| host.parse::<Host>().ok())
            .ok_or(RegistryError::InvalidArgument { field: "host" })?;

        let is_family = field(body, "isFamily")
            .and_then(Value::as_bool)
            .ok_or(RegistryError::InvalidArgument { field: "isFamily" })?;

        Ok(Self::new(name, host, is_family))
    }
}

/// Request to record a guest's RSVP answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateGuestCommand {
    pub name: String,
    pub dietary: String,
    pub additional: AdditionalGuest,
}

impl UpdateGuestCommand {
    /// Creates a command from already-typed values.
    pub fn new(
        name: impl Into<String>,
        dietary: impl Into<String>,
        additional: AdditionalGuest,
    ) -> Self {
        Self {
            name: name.into(),
            dietary: dietary.into(),
            additional,
        }
    }

    /// Parses an update-guest body.
    ///
    /// Order: `name`, `dietary`, existence check (via `exists`),
    /// `additional`, then `additionalName` and `additionalDietary` when
    /// `additional` is true. A missing `additional` means the answer is
    /// still open.
    pub fn from_request(body: &Value, exists: impl FnOnce(&str) -> bool) -> Result<Self> {
        let name = required_str(body, "name")?;
        let dietary = required_str(body, "dietary")?;
        if !exists(name) {
            return Err(RegistryError::GuestNotFound {
                name: name.to_string(),
            });
        }

        let additional = match field(body, "additional") {
            None => AdditionalGuest::Unknown,
            Some(Value::Bool(false)) => AdditionalGuest::NotBringing,
            Some(Value::Bool(true)) => {
                let companion = required_str(body, "additionalName")?;
                let companion_dietary = required_str(body, "additionalDietary")?;
                AdditionalGuest::bringing(companion, companion_dietary)
            }
            Some(_) => {
                return Err(RegistryError::NotBoolean {
                    field: "additional",
                })
            }
        };

        Ok(Self::new(name, dietary, additional))
    }
}

/// Returns the first value given for `key` in a decoded query string.
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Extracts the guest name of a fetch request from its query pairs.
pub fn guest_name(pairs: &[(String, String)]) -> Result<&str> {
    first_param(pairs, "name").ok_or(RegistryError::MissingArgument { field: "name" })
}

fn field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.as_object().and_then(|map| map.get(key))
}

fn required_str<'a>(body: &'a Value, key: &'static str) -> Result<&'a str> {
    field(body, key)
        .and_then(Value::as_str)
        .ok_or(RegistryError::MissingArgument { field: key })
}
