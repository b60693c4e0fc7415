use std::collections::BTreeSet;

use proptest::prelude::*;
use skipdex_skip_list::skip_list::SkipIndex;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16),
    Delete(u16),
}
fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..256u16).prop_map(Op::Insert),
        (0..256u16).prop_map(Op::Delete),
    ]
}
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn test_matches_btree_set(
        ops in prop::collection::vec(op(), 1..400),
        max_level in 0..8usize,
        p in 0.1..0.9f64,
    ) {
        let mut index = SkipIndex::new(max_level, p).unwrap();
        let mut model = BTreeSet::new();
        for op in ops {
            match op {
                Op::Insert(key) => prop_assert_eq!(index.insert(key), model.insert(key)),
                Op::Delete(key) => prop_assert_eq!(index.delete(&key), model.remove(&key)),
            }
            prop_assert_eq!(index.len(), model.len());
        }
        prop_assert!(index.iter().eq(model.iter()));
        prop_assert_eq!(index.first(), model.first());
        prop_assert_eq!(index.last(), model.last());

        let levels: Vec<Vec<u16>> = index.levels().map(|(_, keys)| keys.copied().collect()).collect();
        for pair in levels.windows(2) {
            let (below, above) = (&pair[0], &pair[1]);
            prop_assert!(above.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(above.iter().all(|k| below.binary_search(k).is_ok()));
        }
        if index.level() > 0 {
            prop_assert!(!levels[index.level()].is_empty());
        }
        for probe in [0u16, 17, 128, 255, 300] {
            prop_assert_eq!(index.contains(&probe), model.contains(&probe));
            prop_assert_eq!(index.get_or_next(&probe), model.range(probe..).next());
        }
    }
}
