//! Storage backends for guest records.
//!
//! The registry only needs keyed get/put and ordered iteration, so a durable
//! backend can stand in for the in-memory map without touching callers.

use indexmap::IndexMap;

use crate::GuestRecord;

/// Trait for guest record storage backends.
///
/// Backends are accessed through the registry's lock, so writers take
/// `&mut self` and need no interior synchronization.
pub trait GuestStore: Send + Sync {
    /// Retrieves a guest by exact name.
    fn get(&self, name: &str) -> Option<GuestRecord>;

    /// Checks if a guest exists.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Inserts a guest, or replaces the one with the same name in place.
    ///
    /// Replacing must not change the guest's position in [`GuestStore::guests`].
    fn put(&mut self, guest: GuestRecord);

    /// Lists all guests in insertion order.
    fn guests(&self) -> Vec<GuestRecord>;

    /// Returns the number of guests.
    fn len(&self) -> usize;

    /// Returns true if there are no guests.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every guest.
    fn clear(&mut self);
}

/// In-memory backend keeping guests in insertion order.
#[derive(Debug, Default)]
pub struct MemoryGuestStore {
    guests: IndexMap<String, GuestRecord>,
}

impl MemoryGuestStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuestStore for MemoryGuestStore {
    fn get(&self, name: &str) -> Option<GuestRecord> {
        self.guests.get(name).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.guests.contains_key(name)
    }

    fn put(&mut self, guest: GuestRecord) {
        // IndexMap keeps the existing slot when the key is already present.
        self.guests.insert(guest.name().to_string(), guest);
    }

    fn guests(&self) -> Vec<GuestRecord> {
        self.guests.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.guests.len()
    }

    fn clear(&mut self) {
        self.guests.clear();
    }
}
