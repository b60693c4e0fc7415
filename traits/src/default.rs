pub const DEFAULT_MAX_LEVEL: usize = 16;
pub const DEFAULT_PROMOTION_PROBABILITY: f64 = 0.5;

/// Construction parameters shared by every [`OrderedIndex`](crate::index::OrderedIndex).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexConfig {
    max_level: usize,
    promotion_probability: f64,
    seed: Option<u64>,
}
impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            promotion_probability: DEFAULT_PROMOTION_PROBABILITY,
            seed: None,
        }
    }
}
impl IndexConfig {
    pub fn set_max_level(&mut self, max_level: usize) -> &mut Self {
        self.max_level = max_level;
        self
    }
    pub fn set_promotion_probability(&mut self, p: f64) -> &mut Self {
        self.promotion_probability = p;
        self
    }
    /// `None` means the random source is seeded from entropy.
    pub fn set_seed(&mut self, seed: Option<u64>) -> &mut Self {
        self.seed = seed;
        self
    }
    pub fn max_level(&self) -> usize {
        self.max_level
    }
    pub fn promotion_probability(&self) -> f64 {
        self.promotion_probability
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
