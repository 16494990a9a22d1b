//! The guest registry.

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;

use crate::{
    backend::{GuestStore, MemoryGuestStore},
    AddGuestCommand, GuestRecord, RegistryError, Result, Summary, UpdateGuestCommand,
};

/// Every guest in registration order, with the head-count summary computed
/// from exactly that list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestList {
    pub guests: Vec<GuestRecord>,
    pub summary: Summary,
}

/// Keyed registry of invited guests.
///
/// All reads and writes go through one lock, so every operation sees and
/// leaves the store in a state where each mutation was applied whole or not
/// at all. Construct one at startup and share it behind an `Arc`.
pub struct GuestRegistry<S = MemoryGuestStore> {
    store: RwLock<S>,
}

impl Default for GuestRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GuestRegistry {
    /// Creates an empty in-memory registry.
    pub fn new() -> Self {
        Self::with_store(MemoryGuestStore::new())
    }
}

impl<S: GuestStore> GuestRegistry<S> {
    /// Creates a registry over the given backend.
    pub fn with_store(store: S) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Invites a new guest with no answers recorded.
    pub fn add(&self, command: AddGuestCommand) -> Result<GuestRecord> {
        let mut store = self.store.write();
        if store.contains(&command.name) {
            return Err(RegistryError::GuestExists { name: command.name });
        }
        Ok(Self::insert(&mut *store, command))
    }

    /// Validates an untrusted add-guest body and applies it.
    ///
    /// The duplicate check runs between the `name` and `host` checks.
    pub fn register_request(&self, body: &Value) -> Result<GuestRecord> {
        let mut store = self.store.write();
        let command = AddGuestCommand::from_request(body, |name| store.contains(name))?;
        Ok(Self::insert(&mut *store, command))
    }

    /// Gets a guest by exact name.
    pub fn get(&self, name: &str) -> Result<GuestRecord> {
        self.store
            .read()
            .get(name)
            .ok_or_else(|| RegistryError::GuestNotFound {
                name: name.to_string(),
            })
    }

    /// Records a guest's RSVP answer.
    pub fn update(&self, command: UpdateGuestCommand) -> Result<GuestRecord> {
        let mut store = self.store.write();
        Self::respond(&mut *store, command)
    }

    /// Validates an untrusted update-guest body and applies it.
    ///
    /// The existence check runs between the `dietary` and `additional` checks.
    pub fn update_request(&self, body: &Value) -> Result<GuestRecord> {
        let mut store = self.store.write();
        let command = UpdateGuestCommand::from_request(body, |name| store.contains(name))?;
        Self::respond(&mut *store, command)
    }

    /// Lists every guest with the summary of that same list.
    pub fn list(&self) -> GuestList {
        let guests = self.store.read().guests();
        let summary = Summary::of(&guests);
        GuestList { guests, summary }
    }

    /// Returns the number of invited guests.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// Returns true if nobody has been invited.
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    /// Forgets every guest. Meant for isolating tests that share a registry.
    pub fn reset(&self) {
        self.store.write().clear();
    }

    fn insert(store: &mut S, command: AddGuestCommand) -> GuestRecord {
        let guest = GuestRecord::new(command.name, command.host, command.is_family);
        store.put(guest.clone());
        tracing::debug!(name = %guest.name(), host = %guest.host(), "guest added");
        guest
    }

    fn respond(store: &mut S, command: UpdateGuestCommand) -> Result<GuestRecord> {
        let mut guest = store
            .get(&command.name)
            .ok_or_else(|| RegistryError::GuestNotFound {
                name: command.name.clone(),
            })?;

        guest.respond(command.dietary, command.additional);
        store.put(guest.clone());
        tracing::debug!(
            name = %guest.name(),
            additional = guest.additional().head_count_label(),
            "guest updated"
        );
        Ok(guest)
    }
}
