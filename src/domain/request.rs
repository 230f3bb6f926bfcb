use super::family::FamilyKey;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Verify,
    Refund,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Verify => f.write_str("verify"),
            Action::Refund => f.write_str("refund"),
        }
    }
}

/// A client request naming a wallet provider and the product to invoke.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct WalletRequest {
    pub provider: String,
    pub action: Action,
}

impl WalletRequest {
    pub fn new(provider: impl Into<String>, action: Action) -> Self {
        Self {
            provider: provider.into(),
            action,
        }
    }
}

/// The result of running one request against the selected family.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct WalletOutcome {
    pub provider: FamilyKey,
    pub action: Action,
    pub result: String,
}
