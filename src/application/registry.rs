use crate::domain::family::FamilyKey;
use crate::domain::ports::{FactoryConstructor, WalletFactory, WalletFactoryBox};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};
use tracing::{debug, warn};

/// A registration record submitted by [`register_wallet!`](crate::register_wallet).
///
/// Records are gathered at link time and drained into the global registry the
/// first time it is accessed.
pub struct FamilyRegistration {
    pub key: &'static str,
    pub constructor: fn() -> WalletFactoryBox,
}

inventory::collect!(FamilyRegistration);

/// Builds a boxed factory from its `Default` impl.
///
/// Used by `register_wallet!` so the constructor is a plain function pointer.
pub fn construct<F>() -> WalletFactoryBox
where
    F: WalletFactory + Default + 'static,
{
    Box::new(F::default())
}

static GLOBAL: LazyLock<FactoryRegistry> = LazyLock::new(FactoryRegistry::with_registered);

/// Maps normalized family keys to factory constructors.
///
/// Lookups take a shared lock and registrations an exclusive one, so families
/// can be added while other threads are resolving keys. Registering an
/// existing key replaces the previous entry.
#[derive(Default)]
pub struct FactoryRegistry {
    factories: RwLock<HashMap<FamilyKey, FactoryConstructor>>,
}

impl FactoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every family submitted with `register_wallet!`.
    pub fn with_registered() -> Self {
        let registry = Self::new();
        for registration in inventory::iter::<FamilyRegistration> {
            let constructor = registration.constructor;
            registry.register(registration.key, Arc::new(constructor));
        }
        registry
    }

    /// The process-wide registry used by [`create_factory`](crate::create_factory).
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Inserts or replaces the constructor for `name`.
    pub fn register(&self, name: &str, constructor: FactoryConstructor) {
        let key = FamilyKey::new(name);
        let mut factories = self.factories.write().unwrap_or_else(|e| e.into_inner());
        if factories.insert(key.clone(), constructor).is_some() {
            warn!(family = %key, "Replacing registered wallet family");
        } else {
            debug!(family = %key, "Registered wallet family");
        }
    }

    /// Returns the constructor registered for `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<FactoryConstructor> {
        let key = FamilyKey::new(name);
        let factories = self.factories.read().unwrap_or_else(|e| e.into_inner());
        factories.get(&key).cloned()
    }

    /// Resolves `name` and builds a fresh factory for it.
    ///
    /// The lock is released before the constructor runs.
    pub fn create_factory(&self, name: &str) -> Option<WalletFactoryBox> {
        match self.lookup(name) {
            Some(constructor) => Some(constructor()),
            None => {
                debug!(family = %FamilyKey::new(name), "No wallet family registered");
                None
            }
        }
    }

    /// Removes the entry for `name`. Returns whether one existed.
    pub fn unregister(&self, name: &str) -> bool {
        let key = FamilyKey::new(name);
        let mut factories = self.factories.write().unwrap_or_else(|e| e.into_inner());
        factories.remove(&key).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        let factories = self.factories.read().unwrap_or_else(|e| e.into_inner());
        factories.contains_key(&FamilyKey::new(name))
    }

    /// Registered keys in sorted order.
    pub fn families(&self) -> Vec<FamilyKey> {
        let factories = self.factories.read().unwrap_or_else(|e| e.into_inner());
        let mut keys: Vec<FamilyKey> = factories.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        let factories = self.factories.read().unwrap_or_else(|e| e.into_inner());
        factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registers a family in the global registry.
pub fn register(name: &str, constructor: FactoryConstructor) {
    FactoryRegistry::global().register(name, constructor);
}

/// Looks up a family in the global registry.
pub fn lookup(name: &str) -> Option<FactoryConstructor> {
    FactoryRegistry::global().lookup(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::esewa::EsewaFactory;
    use crate::infrastructure::khalti::KhaltiFactory;

    fn esewa() -> FactoryConstructor {
        Arc::new(|| Box::new(EsewaFactory) as WalletFactoryBox)
    }

    fn khalti() -> FactoryConstructor {
        Arc::new(|| Box::new(KhaltiFactory) as WalletFactoryBox)
    }

    #[test]
    fn test_register_and_lookup_ignores_case() {
        let registry = FactoryRegistry::new();
        registry.register("esewa", esewa());

        for name in ["esewa", "ESEWA", "Esewa", "eSeWa"] {
            let factory = registry.create_factory(name).unwrap();
            assert_eq!(factory.family(), "Esewa");
        }
        assert_eq!(registry.families(), vec![FamilyKey::new("ESEWA")]);
    }

    #[test]
    fn test_lookup_unknown_returns_none() {
        let registry = FactoryRegistry::new();
        registry.register("ESEWA", esewa());

        assert!(registry.lookup("Unknown").is_none());
        assert!(registry.create_factory("").is_none());
        assert!(registry.create_factory("   ").is_none());
        assert!(registry.create_factory(" esewa").is_none());
    }

    #[test]
    fn test_reregistration_last_write_wins() {
        let registry = FactoryRegistry::new();
        registry.register("X", esewa());
        registry.register("x", khalti());

        assert_eq!(registry.len(), 1);
        let factory = registry.create_factory("X").unwrap();
        assert_eq!(factory.family(), "Khalti");
        assert_eq!(factory.create_verify().family(), "Khalti");
        assert_eq!(factory.create_refund().family(), "Khalti");
    }

    #[test]
    fn test_unregister() {
        let registry = FactoryRegistry::new();
        registry.register("ESEWA", esewa());

        assert!(registry.unregister("esewa"));
        assert!(!registry.unregister("esewa"));
        assert!(registry.is_empty());
        assert!(registry.create_factory("ESEWA").is_none());
    }

    #[test]
    fn test_each_lookup_builds_a_fresh_factory() {
        let registry = FactoryRegistry::new();
        let counter = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let calls = Arc::clone(&counter);
        registry.register(
            "ESEWA",
            Arc::new(move || {
                calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                Box::new(EsewaFactory) as WalletFactoryBox
            }),
        );

        registry.create_factory("esewa").unwrap();
        registry.create_factory("esewa").unwrap();
        assert_eq!(counter.load(std::sync::atomic::Ordering::SeqCst), 2);
    }

    #[test]
    fn test_with_registered_contains_builtin_families() {
        let registry = FactoryRegistry::with_registered();
        assert!(registry.contains("esewa"));
        assert!(registry.contains("khalti"));
    }

    #[test]
    fn test_recovers_from_poisoned_lock() {
        let registry = FactoryRegistry::new();
        registry.register("ESEWA", esewa());

        std::thread::scope(|s| {
            let result = s
                .spawn(|| {
                    let _guard = registry.factories.write().unwrap();
                    panic!("writer panicked while holding the lock");
                })
                .join();
            assert!(result.is_err());
        });
        assert!(registry.factories.is_poisoned());

        assert_eq!(registry.create_factory("esewa").unwrap().family(), "Esewa");
        registry.register("KHALTI", khalti());
        assert!(registry.lookup("khalti").is_some());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_concurrent_lookups_during_registration() {
        let registry = FactoryRegistry::new();
        registry.register("X", esewa());

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..1_000 {
                        let factory = registry.create_factory("x").unwrap();
                        // Whichever entry is observed, its products stay in one family.
                        let family = factory.family();
                        assert_eq!(factory.create_verify().family(), family);
                        assert_eq!(factory.create_refund().family(), family);
                    }
                });
            }
            s.spawn(|| {
                for i in 0..1_000 {
                    let constructor = if i % 2 == 0 { khalti() } else { esewa() };
                    registry.register("X", constructor);
                }
            });
        });

        assert_eq!(registry.len(), 1);
    }
}
