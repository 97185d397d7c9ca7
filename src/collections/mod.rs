//! Hash map backing every lookup in the crate
/// Entry chains
mod bucket;
/// The map itself
mod chained_map;
/// Key-value pairs
mod entry;
/// Borrowing and owning iterators
mod iter;

pub use chained_map::{
    ChainedMap,
    DefaultHashBuilder,
    INITIAL_BUCKETS,
    MAX_DEPTH,
};
pub use iter::{
    IntoIter,
    Iter,
    IterMut,
    Keys,
    Values,
    ValuesMut,
};
