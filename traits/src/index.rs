use std::error::Error;
use std::fmt::Display;

use thiserror::Error;

use crate::default::IndexConfig;

/// An ordered set of unique keys, as seen by code that does not care
/// which structure backs it.
pub trait OrderedIndex<K: Ord> {
    type ErrorType: Into<IndexError>;
    fn new(config: &IndexConfig) -> Result<Self, IndexError>
    where
        Self: Sized;
    /// Returns `false`, leaving the index untouched, if `key` is already present.
    fn insert(&mut self, key: K) -> bool;
    fn contains(&self, key: &K) -> bool;
    /// Returns `false` if `key` was not present.
    fn delete(&mut self, key: &K) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Highest level currently holding a key; `0` for an empty index.
    fn height(&self) -> usize;
    /// Keys linked at `level`, ascending. Empty above [`height`](OrderedIndex::height).
    fn keys_at<'a>(&'a self, level: usize) -> impl Iterator<Item = &'a K>
    where
        K: 'a;
}
#[derive(Error, Debug)]
pub struct IndexError(Box<dyn Error + Send + Sync>);
impl IndexError {
    pub fn new<E: Error + Send + Sync + 'static>(error: E) -> Self {
        IndexError(Box::new(error))
    }
}
impl Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Index Error: {}", self.0)
    }
}
