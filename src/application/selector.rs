use super::registry::FactoryRegistry;
use crate::domain::ports::WalletFactoryBox;

/// Returns a new factory for the family registered under `name`.
///
/// Matching ignores case. `None` means no family is registered under that key,
/// which callers are expected to handle.
pub fn create_factory(name: &str) -> Option<WalletFactoryBox> {
    FactoryRegistry::global().create_factory(name)
}
