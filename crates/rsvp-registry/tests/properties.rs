//! Property-based tests for the registry and the payload parsers.

use proptest::prelude::*;
use rsvp_registry::{
    payload::{parse_guest, parse_guest_list, parse_summary},
    AddGuestCommand, AdditionalGuest, GuestRecord, GuestRegistry, Host, HostSummary,
    RegistryError, Summary, UpdateGuestCommand,
};

#[derive(Debug, Clone)]
enum Op {
    Add(AddGuestCommand),
    Update(UpdateGuestCommand),
}

fn host_strategy() -> impl Strategy<Value = Host> {
    prop_oneof![Just(Host::Molly), Just(Host::James)]
}

fn additional_strategy() -> impl Strategy<Value = AdditionalGuest> {
    prop_oneof![
        Just(AdditionalGuest::Unknown),
        Just(AdditionalGuest::NotBringing),
        (".{0,12}", ".{0,12}").prop_map(|(name, dietary)| AdditionalGuest::bringing(name, dietary)),
    ]
}

/// Names from a small pool so sequences hit duplicates and misses.
fn pooled_name() -> impl Strategy<Value = String> {
    (0..6u8).prop_map(|i| format!("guest-{i}"))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (pooled_name(), host_strategy(), any::<bool>())
            .prop_map(|(name, host, family)| Op::Add(AddGuestCommand::new(name, host, family))),
        (pooled_name(), ".{0,16}", additional_strategy()).prop_map(|(name, dietary, extra)| {
            Op::Update(UpdateGuestCommand::new(name, dietary, extra))
        }),
    ]
}

fn guest_strategy() -> impl Strategy<Value = GuestRecord> {
    (
        ".{0,20}",
        host_strategy(),
        any::<bool>(),
        ".{0,20}",
        additional_strategy(),
    )
        .prop_map(|(name, host, family, dietary, additional)| {
            GuestRecord::new(name, host, family)
                .with_dietary(dietary)
                .with_additional(additional)
        })
}

fn host_summary_strategy() -> impl Strategy<Value = HostSummary> {
    (0..1_000u64, 0..1_000u64, 0..1_000u64)
        .prop_map(|(fam, extra_min, extra_max)| {
            HostSummary::new(fam + extra_min, fam + extra_min + extra_max, fam)
        })
}

proptest! {
    /// Property: every reachable registry state has a consistent summary
    /// that agrees with a recount of the listed guests.
    #[test]
    fn prop_summary_consistent_under_any_history(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let registry = GuestRegistry::new();
        let mut invited = std::collections::HashSet::new();

        for op in ops {
            match op {
                Op::Add(cmd) => {
                    let name = cmd.name.clone();
                    let result = registry.add(cmd);
                    if invited.insert(name) {
                        prop_assert!(result.is_ok());
                    } else {
                        let is_conflict = matches!(result, Err(RegistryError::GuestExists { .. }));
                        prop_assert!(is_conflict);
                    }
                }
                Op::Update(cmd) => {
                    let known = invited.contains(&cmd.name);
                    let before = registry.list();
                    let result = registry.update(cmd);
                    if known {
                        prop_assert!(result.is_ok());
                    } else {
                        let is_missing = matches!(result, Err(RegistryError::GuestNotFound { .. }));
                        prop_assert!(is_missing);
                        prop_assert_eq!(registry.list(), before);
                    }
                }
            }

            let list = registry.list();
            prop_assert!(list.summary.is_consistent());
            prop_assert_eq!(list.summary, Summary::of(&list.guests));
            prop_assert_eq!(list.guests.len(), invited.len());

            for host in Host::ALL {
                let invitees = list.guests.iter().filter(|g| g.host() == host).count() as u64;
                let counts = list.summary.host(host);
                prop_assert!(invitees <= counts.min);
                prop_assert!(counts.max <= invitees * 2);
            }
        }
    }

    /// Property: an update leaves exactly the requested answers behind.
    #[test]
    fn prop_update_applies_answers(
        host in host_strategy(),
        family in any::<bool>(),
        dietary in ".{0,16}",
        additional in additional_strategy(),
    ) {
        let registry = GuestRegistry::new();
        registry.add(AddGuestCommand::new("guest", host, family)).unwrap();
        registry
            .update(UpdateGuestCommand::new("guest", dietary.clone(), additional.clone()))
            .unwrap();

        let guest = registry.get("guest").unwrap();
        prop_assert_eq!(guest.host(), host);
        prop_assert_eq!(guest.is_family(), family);
        prop_assert_eq!(guest.dietary(), dietary.as_str());
        prop_assert_eq!(guest.additional(), &additional);
    }

    /// Property: parsing a serialized guest gives the same guest.
    #[test]
    fn prop_guest_parse_of_serialize(guest in guest_strategy()) {
        let value = serde_json::to_value(&guest).unwrap();
        prop_assert_eq!(parse_guest(&value), Ok(guest));
    }

    /// Property: parsing a serialized summary gives the same summary.
    #[test]
    fn prop_summary_parse_of_serialize(
        molly in host_summary_strategy(),
        james in host_summary_strategy(),
    ) {
        let summary = Summary::new(molly, james);
        let value = serde_json::to_value(summary).unwrap();
        prop_assert_eq!(parse_summary(&value), Ok(summary));
    }

    /// Property: the serialized list response parses back to the same list.
    #[test]
    fn prop_list_parse_of_serialize(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let registry = GuestRegistry::new();
        for op in ops {
            let _ = match op {
                Op::Add(cmd) => registry.add(cmd),
                Op::Update(cmd) => registry.update(cmd),
            };
        }

        let list = registry.list();
        let value = serde_json::to_value(&list).unwrap();
        prop_assert_eq!(parse_guest_list(&value), Ok(list));
    }

    /// Property: the guest parser never panics on arbitrary JSON objects.
    #[test]
    fn prop_parse_guest_total(
        name in prop::option::of(".{0,8}"),
        host in prop::option::of("[A-Za-z]{0,6}"),
        family in prop::option::of(any::<bool>()),
    ) {
        let mut map = serde_json::Map::new();
        if let Some(name) = name {
            map.insert("name".into(), name.into());
        }
        if let Some(host) = host {
            map.insert("host".into(), host.into());
        }
        if let Some(family) = family {
            map.insert("isFamily".into(), family.into());
        }
        map.insert("dietary".into(), "".into());
        let _ = parse_guest(&serde_json::Value::Object(map));
    }
}
