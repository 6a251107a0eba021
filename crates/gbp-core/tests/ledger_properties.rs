//! Property tests for point calculation and ledger editing.

use std::collections::BTreeMap;

use gbp_core::ledger::{check_ledger, record_ids};
use gbp_core::{
    apply_balance, compute_points, parse_ledger, CollectionMethod, PointsConfiguration,
    UserIdentity,
};
use proptest::prelude::*;

fn label() -> impl Strategy<Value = String> {
    (0u8..12).prop_map(|n| format!("label-{}", n))
}

fn points_map() -> impl Strategy<Value = BTreeMap<String, i64>> {
    prop::collection::btree_map(label(), -100i64..=100, 0..8)
}

fn login() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9-]{0,12}",
        // Any printable text, including tabs, '#', '=', quotes and non-ASCII.
        "[\\PC\t]{1,16}".prop_filter("surrounding whitespace", |s| {
            !s.trim().is_empty() && s.trim() == s.as_str()
        }),
    ]
}

fn ledger_with(entries: &[(u64, i64)]) -> Option<String> {
    entries.iter().fold(None, |text, (id, balance)| {
        let user = UserIdentity::new(*id, format!("user{}", id)).expect("identity");
        Some(apply_balance(text.as_deref(), &user, *balance))
    })
}

proptest! {
    #[test]
    fn high_vs_low_is_best_plus_worst(
        points in points_map(),
        labels in prop::collection::vec(label(), 0..10),
    ) {
        let config = PointsConfiguration::new().with_points(points.clone());
        let values: Vec<i64> = labels.iter().filter_map(|l| points.get(l).copied()).collect();
        let best = values.iter().copied().filter(|v| *v > 0).max().unwrap_or(0);
        let worst = values.iter().copied().filter(|v| *v < 0).min().unwrap_or(0);

        prop_assert_eq!(compute_points(&config, &labels), best + worst);
        prop_assert_eq!(
            compute_points(&config.with_method(CollectionMethod::HighVsLow), &labels),
            best + worst
        );
    }

    #[test]
    fn sum_counts_every_occurrence(
        points in points_map(),
        labels in prop::collection::vec(label(), 0..10),
    ) {
        let config = PointsConfiguration::new()
            .with_points(points.clone())
            .with_method(CollectionMethod::Sum);
        let expected: i64 = labels.iter().map(|l| points.get(l).copied().unwrap_or(0)).sum();
        prop_assert_eq!(compute_points(&config, &labels), expected);
    }

    #[test]
    fn no_balance_label_always_zero(
        points in points_map(),
        mut labels in prop::collection::vec(label(), 0..10),
        sum in any::<bool>(),
        position in any::<prop::sample::Index>(),
    ) {
        let method = if sum { CollectionMethod::Sum } else { CollectionMethod::HighVsLow };
        let config = PointsConfiguration::new()
            .with_points(points)
            .with_method(method)
            .with_no_balance_label("skip");
        let at = position.index(labels.len() + 1);
        labels.insert(at, "skip".to_string());
        prop_assert_eq!(compute_points(&config, &labels), 0);
    }

    #[test]
    fn overwrite_is_idempotent(
        existing in prop::collection::btree_map(0u64..500, -50i64..50, 0..10),
        id in 0u64..500,
        name in login(),
        first in -1000i64..1000,
        second in -1000i64..1000,
    ) {
        let entries: Vec<(u64, i64)> = existing.into_iter().collect();
        let text = ledger_with(&entries);
        let user = UserIdentity::new(id, name).expect("identity");

        let once = apply_balance(text.as_deref(), &user, second);
        let twice = apply_balance(Some(&apply_balance(text.as_deref(), &user, first)), &user, second);
        prop_assert_eq!(&once, &twice);

        let matches = record_ids(&twice).filter(|found| *found == id).count();
        prop_assert_eq!(matches, 1);
    }

    #[test]
    fn any_insertion_order_stays_sorted(
        ids in prop::collection::btree_set(0u64..100_000, 1..30)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle(),
    ) {
        let entries: Vec<(u64, i64)> = ids.iter().map(|id| (*id, 1)).collect();
        let text = ledger_with(&entries).expect("at least one entry");

        let written: Vec<u64> = record_ids(&text).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(written, sorted);
        prop_assert!(check_ledger(&text).expect("check").is_ok());
    }

    #[test]
    fn first_write_round_trips(
        id in any::<u64>(),
        name in login(),
        balance in -1_000_000_000_000i64..1_000_000_000_000,
    ) {
        let user = UserIdentity::new(id, name).expect("identity");
        let text = apply_balance(None, &user, balance);
        let table = parse_ledger(&text).expect("generated ledger should parse");

        prop_assert_eq!(table.len(), 1);
        prop_assert_eq!(table.get(&id.to_string()), Some(&balance));
        prop_assert!(check_ledger(&text).expect("check").is_ok());
    }
}
