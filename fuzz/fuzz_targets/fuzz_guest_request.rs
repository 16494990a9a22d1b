//! Fuzz target for add/update request validation.
//!
//! Arbitrary request bodies must never panic the registry and must leave the
//! summary consistent.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rsvp_registry::GuestRegistry;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    let registry = GuestRegistry::new();
    let _ = registry.register_request(&value);
    let _ = registry.update_request(&value);
    let _ = registry.register_request(&value);

    assert!(registry.len() <= 1);
    assert!(registry.list().summary.is_consistent());
});
