//! Fuzz target for arbitrary sequences of registry commands.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rsvp_registry::{
    AddGuestCommand, AdditionalGuest, GuestRegistry, Host, Summary, UpdateGuestCommand,
};

#[derive(Debug, Arbitrary)]
enum Answer {
    Unknown,
    NotBringing,
    Bringing { name: String, dietary: String },
}

#[derive(Debug, Arbitrary)]
enum Op {
    Add { name: u8, james: bool, family: bool },
    Update { name: u8, dietary: String, answer: Answer },
    Get { name: u8 },
}

fn guest_name(id: u8) -> String {
    format!("guest-{}", id % 8)
}

fuzz_target!(|ops: Vec<Op>| {
    let registry = GuestRegistry::new();

    for op in ops {
        match op {
            Op::Add { name, james, family } => {
                let host = if james { Host::James } else { Host::Molly };
                let _ = registry.add(AddGuestCommand::new(guest_name(name), host, family));
            }
            Op::Update { name, dietary, answer } => {
                let additional = match answer {
                    Answer::Unknown => AdditionalGuest::Unknown,
                    Answer::NotBringing => AdditionalGuest::NotBringing,
                    Answer::Bringing { name, dietary } => AdditionalGuest::bringing(name, dietary),
                };
                let _ = registry.update(UpdateGuestCommand::new(guest_name(name), dietary, additional));
            }
            Op::Get { name } => {
                let _ = registry.get(&guest_name(name));
            }
        }

        let list = registry.list();
        assert!(list.summary.is_consistent());
        assert_eq!(list.summary, Summary::of(&list.guests));
    }
});
