//! # RSVP Node
//!
//! HTTP server for the wedding RSVP guest registry.
//!
//! The node owns a single [`rsvp_registry::GuestRegistry`] and exposes it over
//! a small JSON API used by the host dashboard and the guest-facing form.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run --bin rsvp-node -- --api-addr 127.0.0.1:8088
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Router construction and shared state
//! - [`guest_api`] - Guest list, lookup, invitation and update endpoints
//! - [`config`] - Layered node configuration
//! - [`observability`] - Structured logging

pub mod api;
pub mod config;
pub mod guest_api;
pub mod observability;

pub use api::{create_router, AppState};
pub use config::{ConfigError, NodeConfig, Overrides};
