use proptest::prelude::*;
use tidy_core::config::FeedbackConfig;
use tidy_core::{ReinforcementKey, ReinforcementState, Strategy as FeatureStrategy};
use tidy_learning::FeedbackReinforcer;

// ── Multiplier stays inside its bounds for any outcome sequence ──────────

proptest! {
    #[test]
    fn multiplier_stays_bounded(outcomes in prop::collection::vec(any::<bool>(), 0..300)) {
        let reinforcer = FeedbackReinforcer::default();
        let mut state = ReinforcementState::new();
        let key = ReinforcementKey::new(FeatureStrategy::Category, "documents", "Documents");
        for correct in outcomes {
            let m = reinforcer.record_outcome(&mut state, &key, correct).unwrap();
            prop_assert!((0.1..=1.5).contains(&m), "multiplier {} out of bounds", m);
        }
    }

    #[test]
    fn custom_bounds_hold(
        min in 0.05f64..1.0,
        max in 1.0f64..3.0,
        up in 0.01f64..0.5,
        down in 0.01f64..0.5,
        outcomes in prop::collection::vec(any::<bool>(), 0..200),
    ) {
        let config = FeedbackConfig {
            reinforcement_bounds: (min, max),
            confidence_step: (up, down),
            ..FeedbackConfig::default()
        };
        let reinforcer = FeedbackReinforcer::new(&config);
        let mut state = ReinforcementState::new();
        let key = ReinforcementKey::new(FeatureStrategy::Extension, ".pdf", "Work");
        for correct in &outcomes {
            reinforcer.record_outcome(&mut state, &key, *correct);
        }
        let m = state.multiplier(&key);
        prop_assert!(m >= min && m <= max);
        prop_assert_eq!(state.total_feedback, outcomes.len() as u64);
    }

    #[test]
    fn counters_match_outcomes(outcomes in prop::collection::vec(any::<bool>(), 1..100)) {
        let reinforcer = FeedbackReinforcer::default();
        let mut state = ReinforcementState::new();
        let key = ReinforcementKey::new(FeatureStrategy::NamePrefix, "invoice", "Finance");
        for correct in &outcomes {
            reinforcer.record_outcome(&mut state, &key, *correct);
        }
        let correct = outcomes.iter().filter(|c| **c).count() as u64;
        let entry = state.get(&key).unwrap();
        prop_assert_eq!(entry.correct_count, correct);
        prop_assert_eq!(entry.wrong_count, outcomes.len() as u64 - correct);
    }
}
