use log::LevelFilter;
use rand::rngs::StdRng;
use skipdex_common::rng::{gen_unique_keys, seeded_rng};
use skipdex_skip_list::skip_list::SkipIndex;

const DEMO_KEYS: [i32; 10] = [3, 6, 7, 9, 12, 19, 17, 26, 21, 25];

fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(LevelFilter::Trace)
        .try_init();
}
fn check_invariants<K: Ord, R>(index: &SkipIndex<K, R>) {
    assert!(index.level() <= index.max_level());
    let levels: Vec<Vec<&K>> = index.levels().map(|(_, keys)| keys.collect()).collect();
    assert_eq!(levels.len(), index.level() + 1);
    assert_eq!(levels[0].len(), index.len());
    for (level, keys) in levels.iter().enumerate() {
        assert!(
            keys.windows(2).all(|w| w[0] < w[1]),
            "level {} is not strictly increasing",
            level
        );
        if level > 0 {
            let below = &levels[level - 1];
            assert!(
                keys.iter().all(|k| below.binary_search(k).is_ok()),
                "level {} is not a subset of level {}",
                level,
                level - 1
            );
            assert!(!keys.is_empty(), "level {} is above every node", level);
        }
    }
}
#[test]
fn test_demo_sequence() {
    init_logger();
    for seed in ["a", "b", "c", "d"] {
        let mut index: SkipIndex<i32, StdRng> = SkipIndex::with_rng(3, 0.5, seeded_rng(seed)).unwrap();
        for key in DEMO_KEYS {
            assert!(index.insert(key));
        }
        check_invariants(&index);
        assert!(index.contains(&25));
        assert!(!index.contains(&100));

        assert!(index.delete(&12));
        assert!(!index.contains(&12));
        for key in DEMO_KEYS.iter().filter(|&&k| k != 12) {
            assert!(index.contains(key), "{} went missing", key);
        }
        check_invariants(&index);
        assert_eq!(
            index.iter().copied().collect::<Vec<_>>(),
            vec![3, 6, 7, 9, 17, 19, 21, 25, 26]
        );
    }
}
#[test]
fn test_round_trip() {
    let mut index = SkipIndex::new(8, 0.25).unwrap();
    for key in ["kiwi", "apple", "fig"] {
        assert!(index.insert(key.to_string()));
        assert!(index.contains(&key.to_string()));
    }
    assert_eq!(index.take(&"apple".to_string()).as_deref(), Some("apple"));
    assert!(!index.contains(&"apple".to_string()));
    assert_eq!(index.first().map(String::as_str), Some("fig"));
    assert_eq!(index.last().map(String::as_str), Some("kiwi"));
}
#[test]
fn test_duplicate_insert_is_noop() {
    let mut index = SkipIndex::with_rng(5, 0.5, seeded_rng("dup")).unwrap();
    index.extend([4, 8, 15, 16, 23, 42]);
    let before = index.to_string();
    assert!(!index.insert(15));
    assert_eq!(index.to_string(), before);
    assert_eq!(index.len(), 6);
}
#[test]
fn test_empty_index() {
    let mut index: SkipIndex<u64> = SkipIndex::new(0, 0.5).unwrap();
    assert!(!index.delete(&1));
    assert!(!index.contains(&1));
    assert_eq!(index.get_or_next(&0), None);
    assert_eq!(index.to_string(), "Level 0:\n");
}
#[test]
fn test_max_level_zero_is_a_sorted_list() {
    let mut index = SkipIndex::with_rng(0, 0.9, seeded_rng("flat")).unwrap();
    index.extend([5, 3, 9, 1]);
    assert_eq!(index.level(), 0);
    assert_eq!(index.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 9]);
}
#[test]
fn test_level_distribution() {
    let mut rng = seeded_rng("distribution");
    let keys = gen_unique_keys(&mut rng, 4096, 1 << 20);
    let mut index = SkipIndex::with_rng(12, 0.5, rng).unwrap();
    index.extend(keys.iter().copied());
    check_invariants(&index);

    // expected occupancy at level i is n * 0.5^i; allow wide slack
    let counts: Vec<usize> = index.levels().map(|(_, keys)| keys.count()).collect();
    assert_eq!(counts[0], 4096);
    assert!((1700..=2400).contains(&counts[1]), "level 1 holds {}", counts[1]);
    assert!((700..=1350).contains(&counts[2]), "level 2 holds {}", counts[2]);

    for key in &keys {
        assert!(index.delete(key));
    }
    assert!(index.is_empty());
    assert_eq!(index.level(), 0);
}
