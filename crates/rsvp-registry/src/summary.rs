//! Head-count summaries derived from the guest list.

use serde::Serialize;

use crate::{GuestRecord, Host};

/// Head-count range and family count for one host.
///
/// Invariant: `fam_num <= min <= max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HostSummary {
    /// Heads confirmed to attend.
    pub min: u64,
    /// Heads that could attend if every open answer is a yes.
    pub max: u64,
    /// Invitees who are family of the host.
    #[serde(rename = "famNum")]
    pub fam_num: u64,
}

impl HostSummary {
    /// Creates a summary from raw counts.
    pub fn new(min: u64, max: u64, fam_num: u64) -> Self {
        Self { min, max, fam_num }
    }

    /// Returns true if `fam_num <= min <= max`.
    pub fn is_consistent(&self) -> bool {
        self.fam_num <= self.min && self.min <= self.max
    }

    fn count(&mut self, guest: &GuestRecord) {
        let (extra_min, extra_max) = guest.additional().extra_heads();
        self.min += 1 + extra_min;
        self.max += 1 + extra_max;
        if guest.is_family() {
            self.fam_num += 1;
        }
    }
}

/// Per-host head counts for the whole guest list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    #[serde(rename = "Molly")]
    molly: HostSummary,
    #[serde(rename = "James")]
    james: HostSummary,
}

impl Summary {
    /// Creates a summary from per-host counts.
    pub fn new(molly: HostSummary, james: HostSummary) -> Self {
        Self { molly, james }
    }

    /// Folds a guest list into a summary.
    ///
    /// Every invitee counts once towards both bounds. An open companion
    /// answer widens `max` by one, a confirmed companion adds one to both.
    pub fn of<'a>(guests: impl IntoIterator<Item = &'a GuestRecord>) -> Self {
        let mut summary = Self::default();
        for guest in guests {
            summary.host_mut(guest.host()).count(guest);
        }
        summary
    }

    /// Counts for one host.
    pub fn host(&self, host: Host) -> &HostSummary {
        match host {
            Host::Molly => &self.molly,
            Host::James => &self.james,
        }
    }

    fn host_mut(&mut self, host: Host) -> &mut HostSummary {
        match host {
            Host::Molly => &mut self.molly,
            Host::James => &mut self.james,
        }
    }

    /// Returns true if every host's counts are consistent.
    pub fn is_consistent(&self) -> bool {
        Host::ALL.iter().all(|host| self.host(*host).is_consistent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdditionalGuest;
    use serde_json::json;

    #[test]
    fn test_empty_summary() {
        let summary = Summary::of(std::iter::empty());
        assert_eq!(summary, Summary::default());
        assert_eq!(
            serde_json::to_value(summary).unwrap(),
            json!({
                "Molly": {"min": 0, "max": 0, "famNum": 0},
                "James": {"min": 0, "max": 0, "famNum": 0}
            })
        );
    }

    #[test]
    fn test_unknown_companion_widens_max() {
        let guests = vec![GuestRecord::new("zhiyuan", Host::James, true)];
        let summary = Summary::of(&guests);
        assert_eq!(*summary.host(Host::James), HostSummary::new(1, 2, 1));
        assert_eq!(*summary.host(Host::Molly), HostSummary::default());
    }

    #[test]
    fn test_confirmed_companion_counts_both_bounds() {
        let guests = vec![GuestRecord::new("zhiyuan", Host::James, true)
            .with_dietary("none")
            .with_additional(AdditionalGuest::bringing("fx", "happy"))];
        let summary = Summary::of(&guests);
        assert_eq!(*summary.host(Host::James), HostSummary::new(2, 2, 1));
    }

    #[test]
    fn test_mixed_guest_list() {
        let guests = vec![
            GuestRecord::new("zhiyuan", Host::James, true)
                .with_additional(AdditionalGuest::bringing("fx", "happy")),
            GuestRecord::new("zhiyuan2", Host::Molly, false),
            GuestRecord::new("zhiyuanjia", Host::James, false),
            GuestRecord::new("solo", Host::Molly, true)
                .with_additional(AdditionalGuest::NotBringing),
        ];
        let summary = Summary::of(&guests);
        assert_eq!(*summary.host(Host::James), HostSummary::new(3, 4, 1));
        assert_eq!(*summary.host(Host::Molly), HostSummary::new(2, 3, 1));
        assert!(summary.is_consistent());
    }

    #[test]
    fn test_consistency_check() {
        assert!(HostSummary::new(0, 0, 0).is_consistent());
        assert!(HostSummary::new(3, 4, 2).is_consistent());
        assert!(!HostSummary::new(3, 2, 2).is_consistent());
        assert!(!HostSummary::new(2, 2, 3).is_consistent());
    }
}
