//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for working
//! with the prefix tree.

use std::iter::FromIterator;

use tracing::trace;

use crate::node::TrieNode;
use crate::prefix_view::{PrefixView, PrefixViewIter};
use crate::util::require_key;
use crate::{Result, TRIE_LOG_TARGET};

/// A mutable prefix tree mapping string keys to values.
///
/// Every `char` of a key is one edge of the tree, so keys sharing a prefix share
/// the nodes of that prefix. Nodes are created on the first insertion that needs
/// them and pruned as soon as a removal leaves them without value and children.
///
/// Children are ordered by symbol, so enumerations yield keys in ascending
/// string order.
#[derive(Debug, Clone)]
pub struct Trie<V> {
    /// The root node of the trie, standing for the empty prefix
    pub(crate) root: TrieNode<V>,

    /// The number of values stored in the trie
    size: usize,
}

impl<V> Trie<V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let trie = Trie::<i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            size: 0,
        }
    }

    /// Returns the number of values stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.put("hello", 42).unwrap();
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode<V> {
        &self.root
    }

    /// Returns the node reached by following `prefix` from the root, whether or
    /// not a key ends there.
    pub fn node(&self, prefix: &str) -> Option<&TrieNode<V>> {
        self.root.descend(prefix.chars())
    }

    /// Returns how many insertions passed through the node at `prefix`.
    ///
    /// Counts only ever grow: removing a key does not undo the passes that were
    /// recorded when it was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("tea", 1).unwrap();
    /// trie.put("ten", 2).unwrap();
    ///
    /// assert_eq!(trie.pass_count("te"), Some(2));
    /// assert_eq!(trie.pass_count("tea"), Some(1));
    /// assert_eq!(trie.pass_count("to"), None);
    /// ```
    pub fn pass_count(&self, prefix: &str) -> Option<usize> {
        self.node(prefix).map(TrieNode::pass_count)
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// If the key already exists its value is replaced and the old value is
    /// returned; the number of stored keys only grows for new keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `key`
    /// is empty. The trie is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.put("hello", 42).unwrap(), None);
    /// assert_eq!(trie.put("hello", 7).unwrap(), Some(42));
    ///
    /// assert_eq!(trie.len(), 1);
    /// assert!(trie.put("", 0).is_err());
    /// ```
    pub fn put(&mut self, key: &str, value: V) -> Result<Option<V>> {
        let key = require_key("put", key)?;

        let node = self.record_pass(key);
        let previous = node.value.replace(value);

        if previous.is_none() {
            self.size += 1;
            trace!(target: TRIE_LOG_TARGET, key, size = self.size, "Inserted key");
        } else {
            trace!(target: TRIE_LOG_TARGET, key, "Replaced value");
        }

        Ok(previous)
    }

    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `key`
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("hello", 42).unwrap();
    ///
    /// assert_eq!(trie.get("hello").unwrap(), Some(&42));
    /// assert_eq!(trie.get("hell").unwrap(), None);
    /// assert_eq!(trie.get("world").unwrap(), None);
    /// ```
    pub fn get(&self, key: &str) -> Result<Option<&V>> {
        let key = require_key("get", key)?;

        Ok(self.root.descend(key.chars()).and_then(TrieNode::value))
    }

    /// Returns `true` if the trie contains a value for the given key.
    pub fn contains_key(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Removes a key from the trie, returning its value if it was present.
    ///
    /// Nodes left without value and children are pruned bottom-up until the
    /// first ancestor that still carries a value or another branch. The root
    /// itself is never removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `key`
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("hello", 42).unwrap();
    ///
    /// assert_eq!(trie.remove("hello").unwrap(), Some(42));
    /// assert_eq!(trie.remove("hello").unwrap(), None);
    /// assert!(trie.is_empty());
    /// ```
    pub fn remove(&mut self, key: &str) -> Result<Option<V>> {
        let key = require_key("remove", key)?;

        Ok(self.remove_entry(key))
    }

    /// Removes a key from the trie, reporting whether a value was removed.
    ///
    /// The outcome describes the key, not the pruning: `true` exactly when the
    /// key was stored before the call. Deleting a missing key is a no-op that
    /// returns `false`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `key`
    /// is empty.
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        let key = require_key("delete", key)?;

        Ok(self.remove_entry(key).is_some())
    }

    // Takes the value at `key` and detaches the branch it leaves dead. The
    // branch hangs below the deepest proper ancestor that keeps a value or
    // another child; the root always qualifies.
    fn remove_entry(&mut self, key: &str) -> Option<V> {
        let symbols: Vec<char> = key.chars().collect();

        let mut cut = 0;
        let mut current = &self.root;
        for (depth, symbol) in symbols.iter().enumerate() {
            if current.is_terminal() || current.child_count() > 1 {
                cut = depth;
            }
            current = current.child(*symbol)?;
        }

        let node = self.root.descend_mut(symbols.iter().copied())?;
        let removed = node.value.take()?;

        if node.is_leaf() {
            if let Some(parent) = self.root.descend_mut(symbols[..cut].iter().copied()) {
                parent.children.remove(&symbols[cut]);
                trace!(
                    target: TRIE_LOG_TARGET,
                    key,
                    pruned = symbols.len() - cut,
                    "Pruned dead-end branch"
                );
            }
        }

        self.size -= 1;
        trace!(target: TRIE_LOG_TARGET, key, size = self.size, "Removed key");

        Some(removed)
    }

    /// Returns the longest prefix of `s` that is a stored key, or `""` if none
    /// of its prefixes is stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `s`
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("she", 1).unwrap();
    /// trie.put("shells", 2).unwrap();
    ///
    /// assert_eq!(trie.longest_prefix_of("shell").unwrap(), "she");
    /// assert_eq!(trie.longest_prefix_of("shellsort").unwrap(), "shells");
    /// assert_eq!(trie.longest_prefix_of("sea").unwrap(), "");
    /// ```
    pub fn longest_prefix_of<'s>(&self, s: &'s str) -> Result<&'s str> {
        let s = require_key("longest_prefix_of", s)?;

        let mut current = &self.root;
        let mut longest = 0;

        for (idx, symbol) in s.char_indices() {
            match current.child(symbol) {
                Some(next) => {
                    current = next;
                    if current.is_terminal() {
                        longest = idx + symbol.len_utf8();
                    }
                }
                None => break,
            }
        }

        Ok(&s[..longest])
    }

    /// Creates a view of the subtree at the given key prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("hello", 1).unwrap();
    /// trie.put("help", 2).unwrap();
    ///
    /// let view = trie.view_subtrie("hel");
    /// assert!(view.contains_key("hello"));
    /// assert_eq!(view.get("help"), Some(&2));
    /// ```
    pub fn view_subtrie(&self, prefix: &str) -> PrefixView<'_, V> {
        PrefixView::new(self, prefix)
    }

    /// Collects all keys that start with `prefix`, in ascending order.
    ///
    /// An empty prefix collects every key. A prefix whose path does not exist
    /// yields an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// for (i, word) in ["by", "sea", "sells", "she", "shells"].iter().enumerate() {
    ///     trie.put(word, i).unwrap();
    /// }
    ///
    /// assert_eq!(trie.keys_with_prefix("sh"), vec!["she", "shells"]);
    /// assert!(trie.keys_with_prefix("x").is_empty());
    /// ```
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.view_subtrie(prefix).keys()
    }

    /// Collects every key in the trie, in ascending order.
    pub fn keys(&self) -> Vec<String> {
        self.keys_with_prefix("")
    }

    /// Returns an iterator over all key-value pairs in ascending key order.
    pub fn iter(&self) -> PrefixViewIter<'_, V> {
        PrefixViewIter::new(Some(&self.root), String::new())
    }

    /// Walks `key` from the root, creating missing nodes and counting a pass on
    /// each visited node. Empty keys are accepted here and only touch the root.
    pub(crate) fn record_pass(&mut self, key: &str) -> &mut TrieNode<V> {
        self.root.descend_or_create(key.chars())
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Tries are equal when they store the same keys with the same values; pass
// counts record history and are ignored.
impl<V: PartialEq> PartialEq for Trie<V> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for Trie<V> {}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (String, &'a V);
    type IntoIter = PrefixViewIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for Trie<V> {
    /// Inserts every pair; pairs with an empty key are skipped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if let Err(err) = self.put(key.as_ref(), value) {
                trace!(target: TRIE_LOG_TARGET, error = %err, "Skipped pair");
            }
        }
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for Trie<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn sample() -> Trie<usize> {
        ["by", "sea", "sells", "she", "shells", "shore", "the"]
            .iter()
            .enumerate()
            .map(|(i, word)| (*word, i))
            .collect()
    }

    #[test]
    fn test_new_trie() {
        let trie: Trie<u32> = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert!(trie.keys().is_empty());
    }

    #[test]
    fn test_get_nonexistent() {
        let trie: Trie<u32> = Trie::new();
        assert_eq!(trie.get("hello").unwrap(), None);
    }

    #[test]
    fn test_insert_and_get() {
        let mut trie = Trie::new();
        trie.put("hello", 42).unwrap();

        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get("hello").unwrap(), Some(&42));
        assert_eq!(trie.get("world").unwrap(), None);
        assert!(trie.contains_key("hello").unwrap());
        assert!(!trie.contains_key("hell").unwrap());
    }

    #[test]
    fn test_insert_replace() {
        let mut trie = Trie::new();
        assert_eq!(trie.put("hello", 42).unwrap(), None);
        assert_eq!(trie.put("hello", 100).unwrap(), Some(42));

        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get("hello").unwrap(), Some(&100));
    }

    #[test]
    fn test_shorter_and_longer_keys() {
        let mut trie = Trie::new();
        trie.put("alphabet", 1).unwrap();
        trie.put("alpha", 2).unwrap();

        assert_eq!(trie.get("alphabet").unwrap(), Some(&1));
        assert_eq!(trie.get("alpha").unwrap(), Some(&2));
        assert_eq!(trie.get("alph").unwrap(), None);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_empty_key_rejected() {
        let mut trie = sample();
        let before = trie.clone();

        let expected = |operation| Error::InvalidArgument {
            operation,
            reason: "key must be a non-empty string",
        };

        assert_eq!(trie.put("", 0), Err(expected("put")));
        assert_eq!(trie.get(""), Err(expected("get")));
        assert_eq!(trie.delete(""), Err(expected("delete")));
        assert_eq!(trie.remove(""), Err(expected("remove")));
        assert_eq!(trie.longest_prefix_of(""), Err(expected("longest_prefix_of")));

        assert_eq!(trie, before);
        assert_eq!(trie.pass_count(""), before.pass_count(""));
    }

    #[test]
    fn test_remove_existing() {
        let mut trie = sample();

        assert_eq!(trie.remove("shells").unwrap(), Some(4));
        assert_eq!(trie.len(), 6);
        assert_eq!(trie.get("shells").unwrap(), None);
        assert_eq!(trie.get("she").unwrap(), Some(&3));
    }

    #[test]
    fn test_delete_nonexistent() {
        let mut trie = sample();

        assert!(!trie.delete("shell").unwrap());
        assert!(!trie.delete("zebra").unwrap());
        assert_eq!(trie.len(), 7);

        let mut empty: Trie<u32> = Trie::new();
        assert!(!empty.delete("anything").unwrap());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_delete_prunes_dead_branch() {
        let mut trie = sample();

        assert!(trie.delete("shells").unwrap());

        // "she" survives, but nothing below it
        let she = trie.node("she").unwrap();
        assert!(she.is_terminal());
        assert!(she.is_leaf());
        assert!(trie.node("shel").is_none());
    }

    #[test]
    fn test_delete_prunes_up_to_branch_point() {
        let mut trie = sample();

        assert!(trie.delete("shore").unwrap());

        assert!(trie.node("sho").is_none());
        assert_eq!(trie.node("sh").unwrap().child_count(), 1);
        assert_eq!(trie.keys_with_prefix("sh"), vec!["she", "shells"]);
    }

    #[test]
    fn test_delete_inner_key_keeps_children() {
        let mut trie = sample();

        assert!(trie.delete("she").unwrap());

        let she = trie.node("she").unwrap();
        assert!(!she.is_terminal());
        assert_eq!(she.child_count(), 1);
        assert_eq!(trie.get("shells").unwrap(), Some(&4));
    }

    #[test]
    fn test_delete_everything_leaves_bare_root() {
        let mut trie = sample();

        for key in trie.keys() {
            assert!(trie.delete(&key).unwrap());
        }

        assert!(trie.is_empty());
        assert!(trie.root().is_dead_end());
    }

    #[test]
    fn test_longest_prefix_of() {
        let trie = sample();

        assert_eq!(trie.longest_prefix_of("shell").unwrap(), "she");
        assert_eq!(trie.longest_prefix_of("shellsort").unwrap(), "shells");
        assert_eq!(trie.longest_prefix_of("she").unwrap(), "she");
        assert_eq!(trie.longest_prefix_of("s").unwrap(), "");
        assert_eq!(trie.longest_prefix_of("quicksort").unwrap(), "");
    }

    #[test]
    fn test_longest_prefix_of_multibyte() {
        let mut trie = Trie::new();
        trie.put("żó", 1).unwrap();
        trie.put("żółw", 2).unwrap();

        assert_eq!(trie.longest_prefix_of("żółty").unwrap(), "żó");
        assert_eq!(trie.longest_prefix_of("żółwie").unwrap(), "żółw");
    }

    #[test]
    fn test_keys_in_order() {
        let trie = sample();

        assert_eq!(
            trie.keys(),
            vec!["by", "sea", "sells", "she", "shells", "shore", "the"]
        );
        assert_eq!(trie.keys_with_prefix(""), trie.keys());
        assert_eq!(trie.keys_with_prefix("she"), vec!["she", "shells"]);
        assert_eq!(trie.keys_with_prefix("shells"), vec!["shells"]);
        assert!(trie.keys_with_prefix("shellx").is_empty());
    }

    #[test]
    fn test_iter_pairs() {
        let trie = sample();
        let pairs: Vec<(String, usize)> = trie.iter().map(|(k, v)| (k, *v)).collect();

        assert_eq!(pairs.len(), 7);
        assert_eq!(pairs[0], ("by".to_string(), 0));
        assert_eq!(pairs[6], ("the".to_string(), 6));
    }

    #[test]
    fn test_pass_counts() {
        let mut trie = sample();

        assert_eq!(trie.pass_count(""), Some(7));
        assert_eq!(trie.pass_count("s"), Some(5));
        assert_eq!(trie.pass_count("sh"), Some(3));

        // Replacing a value is still an insertion that walked the path
        trie.put("she", 99).unwrap();
        assert_eq!(trie.pass_count("sh"), Some(4));

        // Removals never lower the count
        trie.delete("shore").unwrap();
        assert_eq!(trie.pass_count("sh"), Some(4));
    }

    #[test]
    fn test_equality_ignores_history() {
        let mut a = Trie::new();
        a.put("x", 1).unwrap();
        a.put("xy", 2).unwrap();
        a.delete("xy").unwrap();

        let mut b = Trie::new();
        b.put("x", 1).unwrap();

        assert_eq!(a, b);

        b.put("x", 3).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_long_key_put_get_delete() {
        let key = "a".repeat(100_000);
        let mut trie = Trie::new();

        trie.put(&key, 1).unwrap();
        assert_eq!(trie.get(&key).unwrap(), Some(&1));
        assert_eq!(trie.longest_prefix_of(&key).unwrap(), key.as_str());
        assert_eq!(trie.keys(), vec![key.clone()]);

        assert!(trie.delete(&key).unwrap());
        assert!(trie.is_empty());
        assert!(trie.root().is_dead_end());
    }

    #[test]
    fn test_long_key_clone_compare_and_drop() {
        let key = "ab".repeat(50_000);
        let mut trie = Trie::new();
        trie.put(&key, 7).unwrap();
        trie.put(&key[..10], 3).unwrap();

        let copy = trie.clone();
        assert_eq!(copy, trie);
        assert!(!format!("{:?}", copy).is_empty());

        drop(trie);
        assert_eq!(copy.get(&key).unwrap(), Some(&7));
        drop(copy);
    }

    #[test]
    fn test_delete_long_branch_stops_at_shared_prefix() {
        let stem = "x".repeat(50_000);
        let left = format!("{}{}", stem, "l".repeat(50_000));
        let right = format!("{}r", stem);

        let mut trie = Trie::new();
        trie.put(&left, 1).unwrap();
        trie.put(&right, 2).unwrap();

        assert!(trie.delete(&left).unwrap());
        assert_eq!(trie.node(&stem).unwrap().child_count(), 1);
        assert!(trie.node(&format!("{}l", stem)).is_none());
        assert_eq!(trie.get(&right).unwrap(), Some(&2));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_extend_skips_empty_keys() {
        let mut trie: Trie<u32> = vec![("a", 1), ("", 2), ("b", 3)].into_iter().collect();
        assert_eq!(trie.len(), 2);

        trie.extend(vec![("c".to_string(), 4)]);
        assert_eq!(trie.keys(), vec!["a", "b", "c"]);
    }
}
