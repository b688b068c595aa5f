#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

mod arena;
pub mod linked_set;
pub mod product;

pub use linked_set::IntoIter;
pub use linked_set::Iter;
pub use linked_set::LinkedSet;
pub use product::Grind;
pub use product::Product;
pub use product::ProductError;
