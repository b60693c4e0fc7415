use rand::rngs::StdRng;
use skipdex_traits::{
    default::IndexConfig,
    index::{IndexError, OrderedIndex},
};

use crate::{error::SkipIndexError, skip_list::SkipIndex};

type Result<T> = std::result::Result<T, IndexError>;

impl<K: Ord> OrderedIndex<K> for SkipIndex<K, StdRng> {
    type ErrorType = SkipIndexError;

    fn new(config: &IndexConfig) -> Result<Self>
    where
        Self: Sized,
    {
        Ok(Self::from_config(config)?)
    }

    fn insert(&mut self, key: K) -> bool {
        SkipIndex::insert(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        SkipIndex::contains(self, key)
    }

    fn delete(&mut self, key: &K) -> bool {
        SkipIndex::delete(self, key)
    }

    fn len(&self) -> usize {
        SkipIndex::len(self)
    }

    fn height(&self) -> usize {
        self.level()
    }

    fn keys_at<'a>(&'a self, level: usize) -> impl Iterator<Item = &'a K>
    where
        K: 'a,
    {
        SkipIndex::keys_at(self, level).into_iter().flatten()
    }
}
impl From<SkipIndexError> for IndexError {
    fn from(val: SkipIndexError) -> Self {
        IndexError::new(val)
    }
}
#[cfg(test)]
mod tests {
    use skipdex_traits::{default::IndexConfig, index::OrderedIndex};

    use crate::skip_list::SkipIndex;

    fn exercise<T: OrderedIndex<u32>>(index: &mut T) {
        assert!(index.is_empty());
        for key in [8, 2, 5] {
            assert!(index.insert(key));
        }
        assert!(!index.insert(5));
        assert_eq!(index.len(), 3);
        assert!(index.contains(&2));
        assert!(index.delete(&2));
        assert!(!index.delete(&2));
        assert_eq!(index.keys_at(0).copied().collect::<Vec<_>>(), vec![5, 8]);
        assert_eq!(index.keys_at(index.height() + 1).count(), 0);
    }
    #[test]
    fn test_trait_surface() {
        let mut config = IndexConfig::default();
        config.set_max_level(4).set_seed(Some(42));
        let mut index = <SkipIndex<u32> as OrderedIndex<u32>>::new(&config).unwrap();
        assert_eq!(index.max_level(), 4);
        exercise(&mut index);
    }
    fn collect_level<'a, K: Ord + 'a, T: OrderedIndex<K>>(index: &'a T, level: usize) -> Vec<&'a K> {
        index.keys_at(level).collect()
    }
    #[test]
    fn test_keys_at_borrowed_keys() {
        let words: Vec<String> = ["pear", "apple", "fig"].iter().map(|w| w.to_string()).collect();
        let mut config = IndexConfig::default();
        config.set_max_level(2).set_seed(Some(3));
        let mut index = <SkipIndex<&str> as OrderedIndex<&str>>::new(&config).unwrap();
        for word in &words {
            assert!(OrderedIndex::insert(&mut index, word.as_str()));
        }
        let level0 = collect_level(&index, 0);
        assert_eq!(level0, vec![&"apple", &"fig", &"pear"]);
        for level in 1..=OrderedIndex::height(&index) {
            assert!(collect_level(&index, level).len() <= level0.len());
        }
        assert!(collect_level(&index, OrderedIndex::height(&index) + 1).is_empty());
    }
    #[test]
    fn test_config_error_converts() {
        let mut config = IndexConfig::default();
        config.set_promotion_probability(2.0);
        let err = <SkipIndex<u32> as OrderedIndex<u32>>::new(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Index Error: Invalid config: promotion probability 2 not in (0, 1)"
        );
    }
    #[test]
    fn test_seeded_config_is_reproducible() {
        let mut config = IndexConfig::default();
        config.set_seed(Some(7));
        let mut a = SkipIndex::from_config(&config).unwrap();
        let mut b = SkipIndex::from_config(&config).unwrap();
        a.extend(0..500u32);
        b.extend(0..500u32);
        assert_eq!(a.to_string(), b.to_string());
    }
}
