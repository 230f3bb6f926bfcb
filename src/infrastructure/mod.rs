//! Concrete wallet families. Each module defines its products and factory and
//! registers the factory under its family key.

pub mod esewa;
pub mod khalti;
