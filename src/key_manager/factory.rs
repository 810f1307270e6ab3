use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;

use crate::error::{KeyManagerError, KeyManagerResult};

/// A factory producing one primitive interface from a key descriptor
///
/// A primitive factory is a single capability: given a key descriptor of
/// type `K`, it builds exactly one instance of its associated `Primitive`
/// type, or fails. Failures specific to the underlying algorithm (for
/// example, the primitive implementation rejecting the key material at
/// construction time) are returned verbatim, not reinterpreted.
///
/// A key manager may hold several factories, each for a different primitive
/// type, all operating on the same key descriptor type. This is what lets a
/// single key type back multiple unrelated capabilities. To let callers
/// request a capability rather than a concrete implementation, factories for
/// trait-shaped primitives should produce boxed trait objects (for example
/// `type Primitive = Box<dyn Aead>`).
///
/// The factory only borrows the key for the duration of `create`; the
/// returned primitive is exclusively owned by the caller.
pub trait PrimitiveFactory<K>: Send + Sync {
    /// The primitive interface this factory produces
    type Primitive: 'static;

    /// Build one primitive instance from the given key descriptor
    fn create(&self, key: &K) -> KeyManagerResult<Self::Primitive>;
}

// A registered factory, erased to `Any` for storage. The concrete type
// behind `factory` is always `Box<dyn PrimitiveFactory<K, Primitive = P>>`
// for the `P` whose `TypeId` keys the entry.
struct FactoryEntry {
    primitive_name: &'static str,
    factory: Box<dyn Any + Send + Sync>,
}

/// An immutable set of primitive factories, indexed by primitive type
///
/// The set is built once, at key-manager construction time, by chaining
/// [`register`](FactorySet::register) calls; after that it is never
/// mutated, so it is safe to share across threads without locking. Lookup
/// is by the [`TypeId`] of the requested primitive type: one hash-map probe
/// and one downcast.
///
/// Dispatch deliberately performs no key validation. Validating a key is a
/// distinct, explicit step, so a caller may validate once and dispatch many
/// times.
///
/// # Examples
///
/// ```
/// use keyloom::{FactorySet, KeyManagerResult, PrimitiveFactory};
///
/// struct HexView(String);
///
/// struct HexViewFactory;
///
/// impl PrimitiveFactory<Vec<u8>> for HexViewFactory {
///     type Primitive = HexView;
///
///     fn create(&self, key: &Vec<u8>) -> KeyManagerResult<HexView> {
///         Ok(HexView(key.iter().map(|b| format!("{:02x}", b)).collect()))
///     }
/// }
///
/// let factories = FactorySet::new().register(HexViewFactory);
///
/// let view: HexView = factories.create(&vec![0xab, 0xcd], "example/key").unwrap();
/// assert_eq!(view.0, "abcd");
///
/// // Requesting a primitive type with no registered factory fails.
/// struct Unregistered;
/// assert!(factories.create::<Unregistered>(&vec![], "example/key").is_err());
/// ```
pub struct FactorySet<K> {
    entries: HashMap<TypeId, FactoryEntry>,
    _key: PhantomData<fn(&K)>,
}

impl<K: 'static> FactorySet<K> {
    /// Create an empty factory set
    ///
    /// A manager with an empty set is legal; every primitive request on it
    /// fails with an invalid-argument error.
    pub fn new() -> Self {
        FactorySet {
            entries: HashMap::new(),
            _key: PhantomData,
        }
    }

    /// Register a factory, consuming and returning the set for chaining
    ///
    /// # Panics
    ///
    /// Panics if a factory for the same primitive type is already
    /// registered. Registering two factories for one primitive is a
    /// programming error in the key manager's constructor, and this library
    /// makes it fail loudly at construction time rather than silently
    /// keeping one of the two.
    #[must_use]
    pub fn register<F>(mut self, factory: F) -> Self
    where
        F: PrimitiveFactory<K> + 'static,
    {
        let primitive_name = type_name::<F::Primitive>();
        let erased: Box<dyn PrimitiveFactory<K, Primitive = F::Primitive>> = Box::new(factory);
        let entry = FactoryEntry {
            primitive_name,
            factory: Box::new(erased),
        };
        let previous = self.entries.insert(TypeId::of::<F::Primitive>(), entry);
        if previous.is_some() {
            panic!("duplicate primitive factory registered for '{primitive_name}'");
        }
        self
    }

    /// Build a primitive of type `P` from the given key descriptor
    ///
    /// Looks up the factory registered for `P` and delegates to it,
    /// returning its result unchanged. If no factory for `P` was
    /// registered, fails with an invalid-argument error naming both the
    /// requested primitive type and `key_type`, the identifier of the key
    /// manager that owns this set.
    ///
    /// The key is not validated here; see the type-level documentation.
    pub fn create<P: 'static>(&self, key: &K, key_type: &str) -> KeyManagerResult<P> {
        let requested = type_name::<P>();
        let entry = self.entries.get(&TypeId::of::<P>()).ok_or_else(|| {
            log::debug!("primitive request missed: '{requested}' on '{key_type}'");
            KeyManagerError::no_factory(key_type, requested)
        })?;
        // Entries are keyed by the primitive's TypeId, so this downcast
        // holds for every entry inserted through `register`.
        let factory = entry
            .factory
            .downcast_ref::<Box<dyn PrimitiveFactory<K, Primitive = P>>>()
            .ok_or_else(|| KeyManagerError::no_factory(key_type, requested))?;
        factory.create(key)
    }

    /// Whether a factory for primitive type `P` is registered
    pub fn contains<P: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<P>())
    }

    /// Number of registered factories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no registered factories
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the primitive types with a registered factory
    ///
    /// Intended for diagnostics; the order is unspecified.
    pub fn primitive_names(&self) -> Vec<&'static str> {
        self.entries.values().map(|e| e.primitive_name).collect()
    }
}

impl<K: 'static> Default for FactorySet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> std::fmt::Debug for FactorySet<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactorySet")
            .field("len", &self.entries.len())
            .finish()
    }
}
