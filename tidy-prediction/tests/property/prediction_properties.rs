use proptest::prelude::*;
use tidy_core::{FeatureSet, PatternStore, ReinforcementKey, ReinforcementState};
use tidy_prediction::{parse_reason, Predictor};

const CATEGORIES: [&str; 3] = ["documents", "images", "archives"];
const EXTENSIONS: [&str; 4] = [".pdf", ".png", ".zip", ".txt"];
const PREFIXES: [&str; 3] = ["invoice", "photo", "backup"];
const DESTINATIONS: [&str; 4] = ["Documents", "Pictures", "Archive", "Work"];

fn features(c: usize, e: usize, p: usize) -> FeatureSet {
    FeatureSet::default()
        .with_category(CATEGORIES[c])
        .with_extension(EXTENSIONS[e])
        .with_name_prefix(PREFIXES[p])
}

fn observation() -> impl Strategy<Value = (usize, usize, usize, usize)> {
    (0..CATEGORIES.len(), 0..EXTENSIONS.len(), 0..PREFIXES.len(), 0..DESTINATIONS.len())
}

fn build(history: &[(usize, usize, usize, usize)], decay: f64) -> PatternStore {
    let mut store = PatternStore::new();
    for &(c, e, p, d) in history {
        store.decay_all(decay);
        store.observe(&features(c, e, p), DESTINATIONS[d]);
    }
    store
}

// ── Confidence always lands in [0, 1] whatever the multipliers ───────────

proptest! {
    #[test]
    fn confidence_is_bounded(
        history in prop::collection::vec(observation(), 0..60),
        query in observation(),
        decay in 0.8f64..=1.0,
        multiplier in 0.1f64..=1.5,
    ) {
        let store = build(&history, decay);
        let mut state = ReinforcementState::new();
        for d in DESTINATIONS {
            let key = ReinforcementKey::new(tidy_core::Strategy::Category, CATEGORIES[query.0], d);
            state.entry_mut(&key).confidence_multiplier = multiplier;
        }
        let outcome = Predictor::default().predict(&features(query.0, query.1, query.2), &store, &state);
        let confidence = outcome.confidence();
        prop_assert!((0.0..=1.0).contains(&confidence), "confidence {} out of range", confidence);
        if let Some(p) = outcome.prediction() {
            prop_assert!(p.raw_confidence > 0.0 && p.raw_confidence <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn prediction_is_deterministic(
        history in prop::collection::vec(observation(), 0..60),
        query in observation(),
    ) {
        let first = build(&history, 0.95);
        let second = build(&history, 0.95);
        let state = ReinforcementState::new();
        let predictor = Predictor::default();
        let q = features(query.0, query.1, query.2);
        prop_assert_eq!(
            predictor.predict(&q, &first, &state),
            predictor.predict(&q, &second, &state)
        );
    }

    #[test]
    fn every_reason_parses(
        history in prop::collection::vec(observation(), 3..60),
        query in observation(),
    ) {
        let store = build(&history, 0.95);
        let outcome = Predictor::default().predict(
            &features(query.0, query.1, query.2),
            &store,
            &ReinforcementState::new(),
        );
        if let Some(p) = outcome.prediction() {
            let trail = parse_reason(&p.reason).unwrap();
            prop_assert_eq!(trail.len(), p.contributions.len());
            for (parsed, original) in trail.iter().zip(&p.contributions) {
                prop_assert_eq!(&parsed.destination, &original.destination);
                prop_assert_eq!(&parsed.value, &original.value);
                prop_assert_eq!(parsed.strategy, original.strategy);
            }
        }
    }
}
