use thiserror::Error;
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkipIndexError {
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max level {max_level} exceeds limit {limit}")]
    MaxLevelTooLarge { max_level: usize, limit: usize },
    #[error("promotion probability {0} not in (0, 1)")]
    InvalidProbability(f64),
}
