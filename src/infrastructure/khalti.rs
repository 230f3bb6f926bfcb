use crate::domain::ports::{Refund, RefundBox, Verify, VerifyBox, WalletFactory};

const FAMILY: &str = "Khalti";

#[derive(Debug, Default, Clone, Copy)]
pub struct KhaltiVerify;

impl Verify for KhaltiVerify {
    fn verify(&self) -> String {
        format!("Verified by {FAMILY}")
    }

    fn family(&self) -> &'static str {
        FAMILY
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct KhaltiRefund;

impl Refund for KhaltiRefund {
    fn refund(&self) -> String {
        format!("Refund process by {FAMILY}")
    }

    fn family(&self) -> &'static str {
        FAMILY
    }
}

/// Builds the Khalti wallet products.
#[derive(Debug, Default, Clone, Copy)]
pub struct KhaltiFactory;

impl WalletFactory for KhaltiFactory {
    fn family(&self) -> &'static str {
        FAMILY
    }

    fn create_verify(&self) -> VerifyBox {
        Box::new(KhaltiVerify)
    }

    fn create_refund(&self) -> RefundBox {
        Box::new(KhaltiRefund)
    }
}

crate::register_wallet!("KHALTI", KhaltiFactory);
