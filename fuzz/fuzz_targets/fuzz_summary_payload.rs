#![no_main]

use libfuzzer_sys::fuzz_target;
use rsvp_registry::payload;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    // Accepted summaries always satisfy min <= max and famNum <= min.
    if let Ok(summary) = payload::parse_summary(&value) {
        assert!(summary.is_consistent());
    }
});
