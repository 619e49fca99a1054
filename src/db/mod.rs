//! Persistence of the last signal that was sent.

pub mod signal_store;

pub use signal_store::{FileSignalStore, MemorySignalStore, SignalStore};
