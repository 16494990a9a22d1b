//! Guest registry for wedding RSVPs.
//!
//! This crate holds the invited guests of a two-host wedding, validates every
//! change made to them, and derives the per-host head-count summary from the
//! current guest list.
//!
//! - [`GuestRegistry`] owns the guests and applies add/update commands.
//! - [`request`] turns untrusted request bodies into typed commands, checking
//!   fields in a fixed order so diagnostics are deterministic.
//! - [`payload`] parses guest and summary payloads on the client side.
//! - [`Summary`] is recomputed from the guest list on every read.
//!
//! ## Example
//!
//! ```
//! use rsvp_registry::{AddGuestCommand, AdditionalGuest, GuestRegistry, Host, UpdateGuestCommand};
//!
//! let registry = GuestRegistry::new();
//! registry.add(AddGuestCommand::new("zhiyuan", Host::James, true))?;
//! registry.update(UpdateGuestCommand::new(
//!     "zhiyuan",
//!     "none",
//!     AdditionalGuest::bringing("fx", "happy"),
//! ))?;
//!
//! let list = registry.list();
//! let james = list.summary.host(Host::James);
//! assert_eq!((james.min, james.max, james.fam_num), (2, 2, 1));
//! # Ok::<(), rsvp_registry::RegistryError>(())
//! ```

pub mod backend;
mod error;
mod guest;
pub mod payload;
pub mod request;
mod store;
mod summary;

pub use backend::{GuestStore, MemoryGuestStore};
pub use error::{ErrorKind, PayloadError, RegistryError};
pub use guest::{AdditionalGuest, GuestRecord, Host, UnknownHost};
pub use request::{AddGuestCommand, UpdateGuestCommand};
pub use store::{GuestList, GuestRegistry};
pub use summary::{HostSummary, Summary};

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
