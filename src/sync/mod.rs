//! Concurrency primitives.

pub mod keyed_mutex;
