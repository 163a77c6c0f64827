//! Abstract storage traits for the RFC monitoring registry.
//!
//! Every storage backend (embedded KV, in-memory for testing) implements
//! these traits. The registry depends only on the traits.

pub mod error;
pub mod memory;
pub mod registry;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use registry::RegistryStore;
