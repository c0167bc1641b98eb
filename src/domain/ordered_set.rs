use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Insertion-ordered collection that keeps the first occurrence of each value.
///
/// Values are compared with `PartialEq`, so event types do not need to be
/// hashable to be deduplicated. The set is read-only from outside the crate:
/// it is built through [`FromIterator`] and exposes no mutating methods.
///
/// Equality ignores order (two sets are equal when they hold the same values),
/// and the `Hash` impl is order-insensitive to stay consistent with it.
/// Iteration always follows insertion order.
///
/// ```rust
/// use shared_toolbox::OrderedSet;
///
/// let errors: OrderedSet<String> = ["b", "a", "b"].into_iter().map(String::from).collect();
/// assert_eq!(errors.as_slice(), ["b".to_string(), "a".to_string()]);
/// ```
///
/// ```rust,compile_fail,E0624
/// use shared_toolbox::OrderedSet;
///
/// let mut errors: OrderedSet<String> = OrderedSet::default();
/// errors.insert("late".to_string());
/// ```
#[derive(Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
}

impl<T> OrderedSet<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> OrderedSet<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Appends `value` unless an equal value is already present.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        if self.items.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    pub(crate) fn merge(&mut self, other: impl IntoIterator<Item = T>) {
        for value in other {
            self.insert(value);
        }
    }
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.merge(iter);
        set
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        // both sides are deduplicated, so equal length plus containment is set equality
        self.items.len() == other.items.len() && self.items.iter().all(|v| other.items.contains(v))
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: Hash> Hash for OrderedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self.items.iter().fold(0u64, |acc, value| {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });
        state.write_usize(self.items.len());
        state.write_u64(combined);
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_keeps_first_occurrence_in_insertion_order() {
        let set: OrderedSet<i32> = vec![3, 1, 3, 2, 1].into_iter().collect();
        assert_eq!(set.as_slice(), &[3, 1, 2]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.first(), Some(&3));
        assert!(set.contains(&2));
        assert!(!set.contains(&4));
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut set = OrderedSet::default();
        assert!(set.insert("a"));
        assert!(!set.insert("a"));
        assert!(set.insert("b"));
        assert_eq!(set.into_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_equality_and_hash_ignore_order() {
        let left: OrderedSet<&str> = ["x", "y"].into_iter().collect();
        let right: OrderedSet<&str> = ["y", "x"].into_iter().collect();
        let other: OrderedSet<&str> = ["x", "z"].into_iter().collect();

        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
        assert_ne!(left, other);
    }

    #[test]
    fn test_debug_renders_as_set() {
        let set: OrderedSet<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(format!("{:?}", set), r#"{"a", "b"}"#);
        assert_eq!(format!("{:?}", OrderedSet::<u8>::default()), "{}");
    }
}
