//! Type-keyed registry.

use super::list::SubscriberList;
use herald_core::{Message, Subscriber};
use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    fmt,
};

/// Type-erased view of a `SubscriberList<Subscriber<M>>`.
///
/// Lets lists of different message kinds live in one map while still
/// being cleared and inspected uniformly.
trait ErasedList: Send + Sync {
    fn kind_name(&self) -> &'static str;
    fn len(&self) -> usize;
    fn clear(&mut self);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<M: Message> ErasedList for SubscriberList<Subscriber<M>> {
    fn kind_name(&self) -> &'static str {
        type_name::<M>()
    }

    fn len(&self) -> usize {
        SubscriberList::len(self)
    }

    fn clear(&mut self) {
        SubscriberList::clear(self);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// One ordered subscriber list per message kind.
///
/// Kinds match exactly by `TypeId`; there is no sub- or supertype routing.
#[derive(Default)]
pub struct TypedRegistry {
    kinds: HashMap<TypeId, Box<dyn ErasedList>>,
}

impl TypedRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The list for `M`, if it was ever created.
    pub fn get<M: Message>(&self) -> Option<&SubscriberList<Subscriber<M>>> {
        self.kinds
            .get(&TypeId::of::<M>())
            .and_then(|list| list.as_any().downcast_ref())
    }

    /// Mutable access to the list for `M`, if it was ever created.
    pub fn get_mut<M: Message>(&mut self) -> Option<&mut SubscriberList<Subscriber<M>>> {
        self.kinds
            .get_mut(&TypeId::of::<M>())
            .and_then(|list| list.as_any_mut().downcast_mut())
    }

    /// The list for `M`, created empty if absent.
    pub fn get_or_create<M: Message>(&mut self) -> &mut SubscriberList<Subscriber<M>> {
        self.kinds
            .entry(TypeId::of::<M>())
            .or_insert_with(|| Box::new(SubscriberList::<Subscriber<M>>::new()))
            .as_any_mut()
            .downcast_mut()
            .expect("slot keyed by TypeId::of::<M>() holds a list of M")
    }

    /// Check if a list for `M` exists (possibly empty).
    pub fn contains<M: Message>(&self) -> bool {
        self.kinds.contains_key(&TypeId::of::<M>())
    }

    /// Number of kinds with a list.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if no kind has a list.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Type names of every kind with a list, with their registration counts.
    pub fn kinds(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.kinds.values().map(|list| (list.kind_name(), list.len()))
    }

    /// Empty every list and forget all kinds.
    pub fn clear(&mut self) {
        for list in self.kinds.values_mut() {
            list.clear();
        }
        self.kinds.clear();
    }
}

impl fmt::Debug for TypedRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.kinds()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;
    impl Message for Ping {}

    struct Pong;
    impl Message for Pong {}

    #[test]
    fn test_lazy_creation() {
        let mut registry = TypedRegistry::new();
        assert!(registry.get::<Ping>().is_none());

        registry.get_or_create::<Ping>();
        assert!(registry.contains::<Ping>());
        assert!(registry.get::<Ping>().is_some_and(SubscriberList::is_empty));
        assert!(!registry.contains::<Pong>());
    }

    #[test]
    fn test_kinds_are_isolated() {
        let mut registry = TypedRegistry::new();
        registry.get_or_create::<Ping>().push(Subscriber::new(|_: &Ping| {}));
        registry.get_or_create::<Pong>();

        assert_eq!(registry.get::<Ping>().map(SubscriberList::len), Some(1));
        assert_eq!(registry.get::<Pong>().map(SubscriberList::len), Some(0));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_clear_forgets_kinds() {
        let mut registry = TypedRegistry::new();
        registry.get_or_create::<Ping>().push(Subscriber::new(|_: &Ping| {}));
        registry.clear();

        assert!(registry.is_empty());
        assert!(registry.get_mut::<Ping>().is_none());
    }

    #[test]
    fn test_kinds_reports_names() {
        let mut registry = TypedRegistry::new();
        registry.get_or_create::<Ping>().push(Subscriber::new(|_: &Ping| {}));

        let kinds: Vec<_> = registry.kinds().collect();
        assert_eq!(kinds.len(), 1);
        assert!(kinds[0].0.ends_with("Ping"));
        assert_eq!(kinds[0].1, 1);
    }
}
