//! Application layer: the family registry, the selector clients call to
//! obtain a factory, and the `WalletEngine` that runs client requests.
//!
//! The registry is the only shared mutable state in the crate. Families are
//! drained into it on first access and may also be registered later, while
//! other threads are resolving keys.

pub mod engine;
pub mod registry;
pub mod selector;
