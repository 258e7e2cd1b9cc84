//! Arena-style ordered storage with a live-length marker.
//!
//! Rewinding and then playing discards every entry after the viewing
//! position. Instead of slicing and copying, a [`Timeline`] lowers its
//! length marker and lets the next append overwrite the first dead slot.

use serde::{Serialize, Serializer};

/// Ordered sequence whose tail can be discarded in O(1).
#[derive(Debug, Clone)]
pub struct Timeline<T> {
    slots: Vec<T>,
    len: usize,
}

impl<T> Timeline<T> {
    /// Creates a timeline holding a single entry.
    pub fn with_first(first: T) -> Self {
        Self {
            slots: vec![first],
            len: 1,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a timeline starts with one entry and truncation never
    /// goes below that.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live entry at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Live entries in order.
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    /// Keeps the first `len` live entries, marking the rest dead.
    ///
    /// Never drops below one entry and never grows.
    pub fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len.max(1));
    }

    /// Appends an entry after the last live one, reusing a dead slot if any.
    pub fn push(&mut self, value: T) {
        if self.len < self.slots.len() {
            self.slots[self.len] = value;
        } else {
            self.slots.push(value);
        }
        self.len += 1;
    }

    /// Slots allocated, live or dead.
    pub fn capacity_used(&self) -> usize {
        self.slots.len()
    }
}

impl<T: PartialEq> PartialEq for Timeline<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Timeline<T> {}

impl<T: Serialize> Serialize for Timeline<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_read() {
        let mut t = Timeline::with_first('a');
        t.push('b');
        t.push('c');
        assert_eq!(t.len(), 3);
        assert_eq!(t.as_slice(), &['a', 'b', 'c']);
        assert_eq!(t.get(1), Some(&'b'));
        assert_eq!(t.get(3), None);
    }

    #[test]
    fn test_truncate_hides_tail_and_reuses_slots() {
        let mut t = Timeline::with_first(0);
        for i in 1..5 {
            t.push(i);
        }
        t.truncate(2);
        assert_eq!(t.as_slice(), &[0, 1]);
        assert_eq!(t.get(2), None);
        assert_eq!(t.capacity_used(), 5);

        t.push(9);
        assert_eq!(t.as_slice(), &[0, 1, 9]);
        assert_eq!(t.capacity_used(), 5);
    }

    #[test]
    fn test_truncate_never_grows_or_empties() {
        let mut t = Timeline::with_first(0);
        t.push(1);
        t.truncate(10);
        assert_eq!(t.len(), 2);
        t.truncate(0);
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
    }

    #[test]
    fn test_equality_ignores_dead_slots() {
        let mut a = Timeline::with_first(0);
        a.push(1);
        a.push(2);
        a.truncate(2);

        let mut b = Timeline::with_first(0);
        b.push(1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_live_entries_only() {
        let mut t = Timeline::with_first(1);
        t.push(2);
        t.push(3);
        t.truncate(2);
        assert_eq!(serde_json::to_string(&t).unwrap(), "[1,2]");
    }
}
