//! Mutation strategies.
//!
//! Each kind of value (map, bag, record) is mutated by its own module;
//! the executor decides which one applies.

mod bag;
mod map;
mod record;

pub use bag::mutate_bag;
pub use map::mutate_map;
pub use record::mutate_record;
