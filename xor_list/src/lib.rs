mod iter;
pub mod list;

pub use iter::Iter;
pub use list::XorList;
