/// Registers a wallet factory under a family key.
///
/// Place it next to the factory definition. The factory type must implement
/// [`WalletFactory`](crate::WalletFactory) and `Default`. The family becomes
/// selectable through [`create_factory`](crate::create_factory) without any
/// change to the selector, including from downstream crates.
///
/// ```ignore
/// wallet_factory::register_wallet!("STRIPE", StripeFactory);
/// ```
#[macro_export]
macro_rules! register_wallet {
    ($key:expr, $factory:ty) => {
        $crate::inventory::submit! {
            $crate::application::registry::FamilyRegistration {
                key: $key,
                constructor: $crate::application::registry::construct::<$factory>,
            }
        }
    };
}
