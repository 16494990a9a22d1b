//! Guest records and the closed set of hosts.

use serde::{Serialize, Serializer};
use std::str::FromStr;

/// One of the two parties hosting the wedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Host {
    /// Guests invited by Molly.
    Molly,
    /// Guests invited by James.
    James,
}

impl Host {
    /// Every host, in summary order.
    pub const ALL: [Host; 2] = [Host::Molly, Host::James];

    /// Returns the wire name of the host.
    pub fn as_str(&self) -> &'static str {
        match self {
            Host::Molly => "Molly",
            Host::James => "James",
        }
    }
}

impl std::fmt::Display for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Host {
    type Err = UnknownHost;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Molly" => Ok(Host::Molly),
            "James" => Ok(Host::James),
            other => Err(UnknownHost(other.to_string())),
        }
    }
}

/// Returned when a string names neither host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown host: {0}")]
pub struct UnknownHost(pub String);

/// Whether an invitee brings a companion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AdditionalGuest {
    /// The invitee has not said yet.
    #[default]
    Unknown,
    /// Confirmed coming alone.
    NotBringing,
    /// Confirmed bringing one named companion.
    Bringing {
        /// Companion's name.
        name: String,
        /// Companion's dietary restrictions (empty means none).
        dietary: String,
    },
}

impl AdditionalGuest {
    /// Creates a confirmed companion.
    pub fn bringing(name: impl Into<String>, dietary: impl Into<String>) -> Self {
        AdditionalGuest::Bringing {
            name: name.into(),
            dietary: dietary.into(),
        }
    }

    /// Returns true if the invitee has not answered yet.
    pub fn is_unknown(&self) -> bool {
        matches!(self, AdditionalGuest::Unknown)
    }

    /// Heads this answer adds on top of the invitee, as `(min, max)`.
    pub fn extra_heads(&self) -> (u64, u64) {
        match self {
            AdditionalGuest::Unknown => (0, 1),
            AdditionalGuest::NotBringing => (0, 0),
            AdditionalGuest::Bringing { .. } => (1, 1),
        }
    }

    /// Short marker used when listing guests: `+1?`, `+1` or `+0`.
    pub fn head_count_label(&self) -> &'static str {
        match self {
            AdditionalGuest::Unknown => "+1?",
            AdditionalGuest::NotBringing => "+0",
            AdditionalGuest::Bringing { .. } => "+1",
        }
    }
}

/// Wire shape of a known companion answer. `Unknown` has no shape: the
/// field is left out of the record.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum CompanionWire<'a> {
    None,
    Brought { name: &'a str, dietary: &'a str },
}

impl Serialize for AdditionalGuest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let wire = match self {
            AdditionalGuest::Unknown => None,
            AdditionalGuest::NotBringing => Some(CompanionWire::None),
            AdditionalGuest::Bringing { name, dietary } => {
                Some(CompanionWire::Brought { name, dietary })
            }
        };
        wire.serialize(serializer)
    }
}

/// A directly invited guest and their RSVP state.
///
/// `name`, `host` and `is_family` are fixed once the record exists; only the
/// registry's update operation changes the dietary and companion answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRecord {
    name: String,
    host: Host,
    is_family: bool,
    dietary: String,
    #[serde(skip_serializing_if = "AdditionalGuest::is_unknown")]
    additional: AdditionalGuest,
}

impl GuestRecord {
    /// Creates a freshly invited guest with no answers recorded.
    pub fn new(name: impl Into<String>, host: Host, is_family: bool) -> Self {
        Self {
            name: name.into(),
            host,
            is_family,
            dietary: String::new(),
            additional: AdditionalGuest::Unknown,
        }
    }

    /// Sets the dietary restrictions.
    pub fn with_dietary(mut self, dietary: impl Into<String>) -> Self {
        self.dietary = dietary.into();
        self
    }

    /// Sets the companion answer.
    pub fn with_additional(mut self, additional: AdditionalGuest) -> Self {
        self.additional = additional;
        self
    }

    /// Unique name of the guest.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Host who invited the guest.
    pub fn host(&self) -> Host {
        self.host
    }

    /// Whether the guest is family of the host.
    pub fn is_family(&self) -> bool {
        self.is_family
    }

    /// Dietary restrictions; empty means none.
    pub fn dietary(&self) -> &str {
        &self.dietary
    }

    /// Companion answer.
    pub fn additional(&self) -> &AdditionalGuest {
        &self.additional
    }

    /// Records an RSVP answer, replacing both mutable fields.
    pub(crate) fn respond(&mut self, dietary: String, additional: AdditionalGuest) {
        self.dietary = dietary;
        self.additional = additional;
    }
}
