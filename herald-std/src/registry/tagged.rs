//! Tag-keyed registry.

use super::list::SubscriberList;
use herald_core::{SignalSubscriber, Tag};
use std::collections::HashMap;

/// One ordered subscriber list per signal tag.
#[derive(Debug, Default)]
pub struct TaggedRegistry {
    signals: HashMap<Tag, SubscriberList<SignalSubscriber>>,
}

impl TaggedRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The list for `tag`, if it was ever created.
    pub fn get(&self, tag: Tag) -> Option<&SubscriberList<SignalSubscriber>> {
        self.signals.get(&tag)
    }

    /// Mutable access to the list for `tag`, if it was ever created.
    pub fn get_mut(&mut self, tag: Tag) -> Option<&mut SubscriberList<SignalSubscriber>> {
        self.signals.get_mut(&tag)
    }

    /// The list for `tag`, created empty if absent.
    pub fn get_or_create(&mut self, tag: Tag) -> &mut SubscriberList<SignalSubscriber> {
        self.signals.entry(tag).or_default()
    }

    /// Check if a list for `tag` exists (possibly empty).
    pub fn contains(&self, tag: Tag) -> bool {
        self.signals.contains_key(&tag)
    }

    /// Number of tags with a list.
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Check if no tag has a list.
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Every tag with a list, in ascending order.
    pub fn tags(&self) -> Vec<Tag> {
        let mut tags: Vec<_> = self.signals.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// Empty every list and forget all tags.
    pub fn clear(&mut self) {
        for list in self.signals.values_mut() {
            list.clear();
        }
        self.signals.clear();
    }
}
