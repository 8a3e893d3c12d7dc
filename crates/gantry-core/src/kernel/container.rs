use std::any::{Any, TypeId};
use std::collections::HashMap;

use std::sync::Arc;

type BoxedInstance = Box<dyn Any + Send + Sync>;
type BoxedFactory = Box<dyn Fn() -> BoxedInstance + Send + Sync>;

/// A single capability binding: a factory plus the instance it produced,
/// if one has been constructed yet.
struct BindingSlot {
    factory: BoxedFactory,
    instance: Option<BoxedInstance>,
}

/// Registry mapping capability types to lazily-constructed singleton
/// implementations.
///
/// Bindings are keyed by the `TypeId` of the *capability* (typically a trait
/// object type such as `dyn HttpKernel`), not the concrete implementation.
/// The stored instance is an `Arc<S>` erased through `Box<dyn Any>`, which is
/// what lets a trait-object `Arc` round-trip through the registry.
#[derive(Default)]
pub struct ServiceContainer {
    bindings: HashMap<TypeId, BindingSlot>,
}

impl ServiceContainer {
    /// Create a new empty service container
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Register a singleton binding for capability `S`.
    ///
    /// The factory runs at most once, on the first [`resolve`](Self::resolve)
    /// of `S`. Re-binding a capability replaces the factory and drops any
    /// instance the previous binding had constructed.
    pub fn singleton<S, F>(&mut self, factory: F)
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<S> + Send + Sync + 'static,
    {
        let slot = BindingSlot {
            factory: Box::new(move || Box::new(factory()) as BoxedInstance),
            instance: None,
        };
        self.bindings.insert(TypeId::of::<S>(), slot);
    }

    /// Resolve the singleton bound for capability `S`.
    ///
    /// Constructs the instance on first resolution; every resolution returns
    /// a clone of the same `Arc`. Returns `None` if `S` was never bound.
    pub fn resolve<S>(&mut self) -> Option<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        let slot = self.bindings.get_mut(&TypeId::of::<S>())?;
        if slot.instance.is_none() {
            log::debug!("Constructing singleton for {}", std::any::type_name::<S>());
            slot.instance = Some((slot.factory)());
        }
        slot.instance
            .as_deref()
            .and_then(|instance| instance.downcast_ref::<Arc<S>>())
            .cloned()
    }

    /// Whether a binding is registered for capability `S`.
    pub fn contains<S>(&self) -> bool
    where
        S: ?Sized + 'static,
    {
        self.bindings.contains_key(&TypeId::of::<S>())
    }

    /// Number of registered bindings.
    pub fn registered_count(&self) -> usize {
        self.bindings.len()
    }
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("bindings", &self.bindings.len())
            .finish()
    }
}
