/// An ordered list of subscribers for a single kind or tag.
///
/// Insertion order is invocation order. Duplicates are allowed; removal
/// takes out the first matching entry only.
#[derive(Debug, Clone)]
pub struct SubscriberList<S> {
    subscribers: Vec<S>,
}

impl<S> Default for SubscriberList<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SubscriberList<S> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Append a subscriber.
    pub fn push(&mut self, subscriber: S) {
        self.subscribers.push(subscriber);
    }

    /// Number of registrations (duplicates counted).
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Check if the list has no subscribers.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Remove every subscriber.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    /// Iterate in invocation order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.subscribers.iter()
    }
}

impl<S: PartialEq> SubscriberList<S> {
    /// Remove the first registration equal to `subscriber`.
    ///
    /// Returns `false` if it was not registered.
    pub fn remove(&mut self, subscriber: &S) -> bool {
        match self.subscribers.iter().position(|s| s == subscriber) {
            Some(index) => {
                self.subscribers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of registrations equal to `subscriber`.
    pub fn count_of(&self, subscriber: &S) -> usize {
        self.subscribers.iter().filter(|s| *s == subscriber).count()
    }
}

impl<S: Clone> SubscriberList<S> {
    /// Copy of the current list, detached from later mutation.
    pub fn snapshot(&self) -> Vec<S> {
        self.subscribers.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let mut list = SubscriberList::new();
        list.push(3);
        list.push(1);
        list.push(2);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_takes_first_duplicate_only() {
        let mut list = SubscriberList::new();
        list.push("a");
        list.push("b");
        list.push("a");

        assert!(list.remove(&"a"));
        assert_eq!(list.snapshot(), vec!["b", "a"]);
        assert_eq!(list.count_of(&"a"), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut list = SubscriberList::new();
        list.push(1);
        assert!(!list.remove(&9));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut list = SubscriberList::new();
        list.push(1);
        let snapshot = list.snapshot();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(snapshot, vec![1]);
    }
}
