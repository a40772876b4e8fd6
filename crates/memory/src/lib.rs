//! Session memory adapters for Tessera.

pub mod in_memory;

pub use in_memory::InMemorySessions;
