//! Feedback analytics over a reinforcement state.

use std::cmp::Ordering;

use tidy_core::models::{EntryStats, FeedbackStats};
use tidy_core::{ReinforcementEntry, ReinforcementState};

/// How many of the busiest entries a report lists.
pub const DEFAULT_TOP_ENTRIES: usize = 10;

/// Summarise feedback: totals, accuracy, busiest entries, and the strongest
/// and weakest mappings among those that received any feedback.
pub fn feedback_stats(state: &ReinforcementState, top_n: usize) -> FeedbackStats {
    let mut with_feedback: Vec<&ReinforcementEntry> =
        state.entries().filter(|e| e.total() > 0).collect();

    // Busiest first; entries iterate in key order, and the sort is stable.
    with_feedback.sort_by(|a, b| b.total().cmp(&a.total()));
    let top_entries = with_feedback.iter().take(top_n).map(|e| entry_stats(e)).collect();

    let strongest = with_feedback
        .iter()
        .copied()
        .reduce(|best, e| match compare_multiplier(e, best) {
            Ordering::Greater => e,
            _ => best,
        })
        .map(entry_stats);
    let weakest = with_feedback
        .iter()
        .copied()
        .reduce(|worst, e| match compare_multiplier(e, worst) {
            Ordering::Less => e,
            _ => worst,
        })
        .map(entry_stats);

    FeedbackStats {
        total_feedback: state.total_feedback,
        total_correct: state.total_correct(),
        total_wrong: state.total_wrong(),
        overall_accuracy: state.accuracy(),
        entry_count: state.len(),
        top_entries,
        strongest,
        weakest,
        last_updated: state.last_updated,
        enabled: state.enabled,
    }
}

fn compare_multiplier(a: &ReinforcementEntry, b: &ReinforcementEntry) -> Ordering {
    a.confidence_multiplier.total_cmp(&b.confidence_multiplier)
}

fn entry_stats(entry: &ReinforcementEntry) -> EntryStats {
    EntryStats {
        key: entry.key.clone(),
        correct: entry.correct_count,
        wrong: entry.wrong_count,
        accuracy: entry.accuracy(),
        multiplier: entry.confidence_multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidy_core::{ReinforcementKey, Strategy};

    use crate::FeedbackReinforcer;

    #[test]
    fn empty_state_has_no_extremes() {
        let stats = feedback_stats(&ReinforcementState::new(), DEFAULT_TOP_ENTRIES);
        assert_eq!(stats.total_feedback, 0);
        assert_eq!(stats.overall_accuracy, None);
        assert!(stats.top_entries.is_empty());
        assert!(stats.strongest.is_none());
        assert!(stats.weakest.is_none());
        assert!(stats.enabled);
    }

    #[test]
    fn ranks_entries() {
        let reinforcer = FeedbackReinforcer::default();
        let mut state = ReinforcementState::new();
        let good = ReinforcementKey::new(Strategy::Category, "documents", "Documents");
        let bad = ReinforcementKey::new(Strategy::Extension, ".pdf", "Work");
        for _ in 0..3 {
            reinforcer.record_outcome(&mut state, &good, true);
        }
        reinforcer.record_outcome(&mut state, &bad, false);

        let stats = feedback_stats(&state, 1);
        assert_eq!(stats.total_feedback, 4);
        assert_eq!(stats.overall_accuracy, Some(0.75));
        assert_eq!(stats.top_entries.len(), 1);
        assert_eq!(stats.top_entries[0].key, good);
        assert_eq!(stats.strongest.unwrap().key, good);
        assert_eq!(stats.weakest.unwrap().key, bad);
    }
}
