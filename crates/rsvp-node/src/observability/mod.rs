//! # Observability Module
//!
//! Structured logging for the RSVP node. HTTP request spans come from
//! `tower_http::trace::TraceLayer`, installed by [`crate::api::create_router`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rsvp_node::observability::{init_logging, LogFormat};
//!
//! init_logging("debug", LogFormat::Pretty);
//! ```

mod logging;

pub use logging::{init_logging, LogFormat};
