pub mod default;
pub mod index;
