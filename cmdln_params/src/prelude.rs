//! Traits for extending `cmdln` with custom sinks: `use cmdln::prelude::*`.

/// A collection that a [`List`](crate::List) can fill, one parsed item at a time.
///
/// Implemented for `Vec<T>` and `HashSet<T>`.
pub trait Collectable<T> {
    /// Insert `item` into the collection.
    fn add(&mut self, item: T);
}
