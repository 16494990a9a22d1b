//! Fuzz target for guest payload parsing.
//!
//! Any JSON must either parse to a guest that serializes back to itself or be rejected.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rsvp_registry::payload;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    if let Ok(guest) = payload::parse_guest(&value) {
        let round = serde_json::to_value(&guest).expect("guest serializes");
        assert_eq!(payload::parse_guest(&round), Ok(guest));
    }

    let _ = payload::parse_loaded_guest(&value);
    let _ = payload::parse_guest_list(&value);
    let _ = payload::parse_confirmation(&value, "saved");
});
