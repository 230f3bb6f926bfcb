mod macros;

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::registry::{FactoryRegistry, lookup, register};
pub use application::selector::create_factory;
pub use domain::family::FamilyKey;
pub use domain::ports::{FactoryConstructor, Refund, Verify, WalletFactory, WalletFactoryBox};

#[doc(hidden)]
pub use inventory;
