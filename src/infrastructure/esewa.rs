use crate::domain::ports::{Refund, RefundBox, Verify, VerifyBox, WalletFactory};

const FAMILY: &str = "Esewa";

#[derive(Debug, Default, Clone, Copy)]
pub struct EsewaVerify;

impl Verify for EsewaVerify {
    fn verify(&self) -> String {
        format!("Verified by {FAMILY}")
    }

    fn family(&self) -> &'static str {
        FAMILY
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EsewaRefund;

impl Refund for EsewaRefund {
    fn refund(&self) -> String {
        format!("Refund process by {FAMILY}")
    }

    fn family(&self) -> &'static str {
        FAMILY
    }
}

/// Builds the Esewa wallet products.
#[derive(Debug, Default, Clone, Copy)]
pub struct EsewaFactory;

impl WalletFactory for EsewaFactory {
    fn family(&self) -> &'static str {
        FAMILY
    }

    fn create_verify(&self) -> VerifyBox {
        Box::new(EsewaVerify)
    }

    fn create_refund(&self) -> RefundBox {
        Box::new(EsewaRefund)
    }
}

crate::register_wallet!("ESEWA", EsewaFactory);
