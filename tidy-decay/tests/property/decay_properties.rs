use proptest::prelude::*;
use tidy_core::{PatternStore, Strategy};
use tidy_decay::{formula, DecayEngine};

fn store_with(count: u32) -> PatternStore {
    let mut store = PatternStore::new();
    for _ in 0..count {
        store.record(Strategy::Category, "documents", "Documents");
    }
    store
}

// ── Repeated decay strictly decreases, never increases, never hits zero ──

proptest! {
    #[test]
    fn repeated_decay_strictly_decreases(
        count in 1u32..500,
        factor in 0.5f64..0.999,
        steps in 1usize..200,
    ) {
        let mut store = store_with(count);
        let engine = DecayEngine::new(factor);
        let mut prev = store.distribution(Strategy::Category, "documents").get("Documents");

        for step in 0..steps {
            engine.apply(&mut store);
            let current = store.distribution(Strategy::Category, "documents").get("Documents");
            prop_assert!(current < prev, "not decreasing at step {}: {} >= {}", step, current, prev);
            prop_assert!(current > 0.0, "reached zero at step {}", step);
            prev = current;
        }
    }

    #[test]
    fn decay_matches_closed_form(
        count in 1u32..100,
        factor in 0.5f64..1.0,
        steps in 0u32..60,
    ) {
        let mut store = store_with(count);
        let engine = DecayEngine::new(factor);
        for _ in 0..steps {
            engine.apply(&mut store);
        }
        let actual = store.distribution(Strategy::Category, "documents").get("Documents");
        let expected = formula::decayed(count as f64, factor, steps);
        prop_assert!((actual - expected).abs() <= expected * 1e-9);
    }

    #[test]
    fn decay_never_increases(factor in 0.0f64..=1.0) {
        let mut store = store_with(7);
        DecayEngine::new(factor).apply(&mut store);
        let after = store.distribution(Strategy::Category, "documents").get("Documents");
        prop_assert!(after <= 7.0);
    }
}
