extern crate thiserror;
use error::SkipIndexError;

mod arena;
pub mod error;
pub mod impls;
pub mod iter;
pub mod skip_list;
pub(crate) type Result<T> = std::result::Result<T, SkipIndexError>;
