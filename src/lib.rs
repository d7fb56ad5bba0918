#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod article;
pub mod capacity;
pub mod hash_table;
pub mod persist;

pub use article::Article;
pub use hash_table::CapacityError;
pub use hash_table::HashTable;
pub use hash_table::Keyed;
pub use hash_table::TableFull;
pub use persist::Codec;
pub use persist::LoadError;
