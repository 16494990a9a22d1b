//! # RSVP CLI
//!
//! Command-line client for an `rsvp-node`: list the invited guests, show one,
//! invite new guests and record their answers.

pub mod client;
pub mod commands;
pub mod error;

pub use client::{RsvpClient, DEFAULT_SERVER};
pub use error::{ClientError, ClientResult};
