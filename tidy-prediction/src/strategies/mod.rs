//! Per-strategy local votes.
//!
//! A strategy abstains when its feature is undefined or the value has no
//! evidence. Otherwise it votes for its most frequent destination:
//! - ties on count go to the destination more popular across the whole strategy
//! - remaining ties go to the lexicographically smallest name

use tidy_core::{Contribution, PatternStore, Strategy};

/// Cast one strategy's vote for `value`, or `None` if it abstains.
pub fn local_vote(
    store: &PatternStore,
    strategy: Strategy,
    value: &str,
    weight: f64,
) -> Option<Contribution> {
    let distribution = store.distribution(strategy, value);
    let total = distribution.total();
    if total <= 0.0 {
        return None;
    }

    // Leaders come back in lexicographic order, so a strict `>` keeps the smallest name on ties.
    let mut best: Option<(&str, f64)> = None;
    for candidate in distribution.leaders() {
        let popularity = store.popularity(strategy, candidate);
        match best {
            Some((_, best_popularity)) if popularity <= best_popularity => {}
            _ => best = Some((candidate, popularity)),
        }
    }
    let (destination, _) = best?;

    let count = distribution.get(destination);
    Some(Contribution {
        strategy,
        value: value.to_string(),
        destination: destination.to_string(),
        count,
        total,
        local_confidence: count / total,
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abstains_without_evidence() {
        let store = PatternStore::new();
        assert!(local_vote(&store, Strategy::Category, "documents", 0.5).is_none());
    }

    #[test]
    fn abstains_when_evidence_decayed_to_nothing() {
        let mut store = PatternStore::new();
        store.record(Strategy::Category, "documents", "Documents");
        // Underflows every count to exactly zero.
        for _ in 0..2000 {
            store.decay_all(0.5);
        }
        assert!(local_vote(&store, Strategy::Category, "documents", 0.5).is_none());
    }

    #[test]
    fn votes_for_majority() {
        let mut store = PatternStore::new();
        for dest in ["Documents", "Documents", "Documents", "Work"] {
            store.record(Strategy::Category, "documents", dest);
        }
        let vote = local_vote(&store, Strategy::Category, "documents", 0.5).unwrap();
        assert_eq!(vote.destination, "Documents");
        assert_eq!(vote.local_confidence, 0.75);
        assert_eq!(vote.count, 3.0);
        assert_eq!(vote.total, 4.0);
    }

    #[test]
    fn count_tie_goes_to_more_popular_destination() {
        let mut store = PatternStore::new();
        store.record(Strategy::Extension, ".pdf", "Archive");
        store.record(Strategy::Extension, ".pdf", "Work");
        // Work is more popular across the extension table.
        store.record(Strategy::Extension, ".docx", "Work");
        let vote = local_vote(&store, Strategy::Extension, ".pdf", 0.3).unwrap();
        assert_eq!(vote.destination, "Work");
        assert_eq!(vote.local_confidence, 0.5);
    }

    #[test]
    fn full_tie_goes_to_smallest_name() {
        let mut store = PatternStore::new();
        store.record(Strategy::Extension, ".pdf", "Zeta");
        store.record(Strategy::Extension, ".pdf", "Alpha");
        let vote = local_vote(&store, Strategy::Extension, ".pdf", 0.3).unwrap();
        assert_eq!(vote.destination, "Alpha");
    }
}
