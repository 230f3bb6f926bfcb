use super::registry::FactoryRegistry;
use crate::domain::family::FamilyKey;
use crate::domain::request::{Action, WalletOutcome, WalletRequest};
use crate::error::{Result, WalletError};

/// Runs client requests against the wallet families of a registry.
///
/// `WalletEngine` keeps no state between requests. Every request selects its
/// own factory, so consecutive requests may target different families.
pub struct WalletEngine<'a> {
    registry: &'a FactoryRegistry,
}

impl Default for WalletEngine<'static> {
    fn default() -> Self {
        Self::new(FactoryRegistry::global())
    }
}

impl<'a> WalletEngine<'a> {
    /// Creates an engine backed by `registry`.
    pub fn new(registry: &'a FactoryRegistry) -> Self {
        Self { registry }
    }

    /// Selects the requested family and invokes the product for the action.
    ///
    /// Fails with [`WalletError::UnknownFamily`] when no family is registered
    /// under the request's provider.
    pub fn process_request(&self, request: WalletRequest) -> Result<WalletOutcome> {
        let provider = FamilyKey::new(&request.provider);
        let factory = self
            .registry
            .create_factory(provider.as_str())
            .ok_or_else(|| WalletError::UnknownFamily(provider.clone()))?;

        let result = match request.action {
            Action::Verify => factory.create_verify().verify(),
            Action::Refund => factory.create_refund().refund(),
        };

        Ok(WalletOutcome {
            provider,
            action: request.action,
            result,
        })
    }

    /// Verifies and then refunds through a single provider.
    pub fn run(&self, provider: &str) -> Result<Vec<WalletOutcome>> {
        [Action::Verify, Action::Refund]
            .into_iter()
            .map(|action| self.process_request(WalletRequest::new(provider, action)))
            .collect()
    }
}
