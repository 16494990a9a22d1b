//! Error types for registry operations and payload parsing.

use thiserror::Error;

/// Coarse classification of a [`RegistryError`], used by transports to pick
/// a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request was missing a field or had a field of the wrong type.
    InvalidRequest,
    /// The request collided with an existing guest.
    Conflict,
    /// The named guest does not exist.
    NotFound,
}

/// Errors that can occur during registry operations.
///
/// The display strings are part of the wire contract: clients show them
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Required string field missing or not a string.
    #[error("required argument \"{field}\" was missing")]
    MissingArgument { field: &'static str },

    /// Required field missing, of the wrong type, or outside its allowed values.
    #[error("required argument \"{field}\" was missing or invalid")]
    InvalidArgument { field: &'static str },

    /// Optional flag present but not a boolean.
    #[error("required argument \"{field}\" was missing, must be a boolean")]
    NotBoolean { field: &'static str },

    /// Guest already registered.
    #[error("guest already added")]
    GuestExists { name: String },

    /// Guest not found.
    #[error("no guest with name '{name}'")]
    GuestNotFound { name: String },
}

impl RegistryError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::MissingArgument { .. }
            | RegistryError::InvalidArgument { .. }
            | RegistryError::NotBoolean { .. } => ErrorKind::InvalidRequest,
            RegistryError::GuestExists { .. } => ErrorKind::Conflict,
            RegistryError::GuestNotFound { .. } => ErrorKind::NotFound,
        }
    }
}

/// Errors produced when a guest or summary payload fails to parse.
///
/// Each variant names the stage that rejected the value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("not a guest")]
    NotAGuest,

    #[error("not a guest: missing '{field}'")]
    GuestMissingField { field: &'static str },

    #[error("not a guest: missing or invalid 'host'")]
    InvalidHost,

    #[error("not a brought guest")]
    NotABroughtGuest,

    #[error("not a brought guest: missing 'kind'")]
    UnknownCompanionKind,

    #[error("not a brought guest: missing '{field}'")]
    CompanionMissingField { field: &'static str },

    #[error("not a summary")]
    NotASummary,

    #[error("not a summary, missing 'host'")]
    SummaryMissingHost,

    #[error("not a summary, {host} missing 'min', 'max', or 'famNum'")]
    SummaryMissingCounts { host: &'static str },

    #[error("not a summary, 'min', 'max', and 'famNum' must be integers")]
    SummaryNotIntegers,

    #[error("not a summary, 'min', 'max', and 'famNum' are invalid")]
    SummaryOutOfOrder,

    #[error("response is not a record")]
    NotARecord,

    #[error("response missing '{field}'")]
    ResponseMissingField { field: &'static str },

    #[error("response '{field}' is not an array")]
    NotAnArray { field: &'static str },

    /// The server answered but reported that nothing was saved.
    #[error("response reports '{field}' as false")]
    NotConfirmed { field: &'static str },
}
