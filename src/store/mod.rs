//! Record store for dog records.
//!
//! The store owns the collection of [`Dog`] records behind a cheaply
//! clonable handle, so the HTTP layer and tests share one collection
//! without a module-level singleton.

pub mod memory;
pub mod seed;
pub mod types;

pub use memory::MemoryStore;
pub use types::{Dog, NewDog};
