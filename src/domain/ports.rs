use std::sync::Arc;

/// Verifies a payment through a wallet provider.
pub trait Verify: Send + Sync {
    fn verify(&self) -> String;

    /// Name of the wallet family this product belongs to.
    fn family(&self) -> &'static str;
}

/// Starts a refund through a wallet provider.
pub trait Refund: Send + Sync {
    fn refund(&self) -> String;

    /// Name of the wallet family this product belongs to.
    fn family(&self) -> &'static str;
}

/// Creates every product of a single wallet family.
///
/// Implementations must only hand out products of their own family. Each call
/// may return a new instance; no identity is guaranteed between calls.
pub trait WalletFactory: Send + Sync {
    fn family(&self) -> &'static str;
    fn create_verify(&self) -> VerifyBox;
    fn create_refund(&self) -> RefundBox;
}

pub type VerifyBox = Box<dyn Verify>;
pub type RefundBox = Box<dyn Refund>;
pub type WalletFactoryBox = Box<dyn WalletFactory>;

/// Zero-argument constructor stored by the registry.
///
/// Reference counted so lookups can clone it out and release the registry lock
/// before building the factory.
pub type FactoryConstructor = Arc<dyn Fn() -> WalletFactoryBox + Send + Sync>;
