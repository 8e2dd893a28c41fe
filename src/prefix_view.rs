//! Prefix view into a trie.
//!
//! This module provides the `PrefixView` type, which gives read-only access to
//! the subtree below a key prefix, and `PrefixViewIter`, the depth-first
//! iterator shared by every key enumeration in the crate.

use std::fmt;
use std::ptr;

use crate::node::TrieNode;
use crate::Trie;

/// A lightweight, borrowed view into the subtree defined by a key prefix.
///
/// Keys seen through the view are always full keys of the underlying trie.
///
/// # Examples
///
/// ```
/// use prefix_trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.put("hello", 1).unwrap();
/// trie.put("help", 2).unwrap();
/// trie.put("world", 3).unwrap();
///
/// let view = trie.view_subtrie("hel");
///
/// assert!(view.exists());
/// assert_eq!(view.len(), 2);
/// assert!(view.contains_key("hello"));
/// assert!(!view.contains_key("world"));
/// assert_eq!(view.keys(), vec!["hello", "help"]);
/// ```
pub struct PrefixView<'a, V> {
    /// The source trie for this view
    trie: &'a Trie<V>,

    /// The key prefix defining this view
    prefix: String,

    /// The node at the end of the prefix path, if that path exists
    subtrie_node: Option<&'a TrieNode<V>>,
}

/// An iterator over `(key, value)` pairs below a node.
///
/// Traversal is depth-first and pre-order with children visited in ascending
/// symbol order, so keys come out in ascending string order.
pub struct PrefixViewIter<'a, V> {
    /// Nodes still to visit, each with the byte length of its parent's key and
    /// the symbol on its incoming edge
    stack: Vec<(&'a TrieNode<V>, usize, Option<char>)>,

    /// Key of the node visited last; shared by the whole traversal
    path: String,
}

impl<'a, V> PrefixView<'a, V> {
    /// Creates a new prefix view for the given trie and prefix.
    pub fn new(trie: &'a Trie<V>, prefix: &str) -> Self {
        PrefixView {
            trie,
            prefix: prefix.to_string(),
            subtrie_node: trie.node(prefix),
        }
    }

    /// Returns the key prefix for this view.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &'a Trie<V> {
        self.trie
    }

    /// Returns whether the prefix path exists in the trie.
    ///
    /// This is structural: the prefix need not be a stored key itself. The empty
    /// prefix always exists.
    pub fn exists(&self) -> bool {
        self.subtrie_node.is_some()
    }

    /// Returns the number of entries in this view.
    pub fn len(&self) -> usize {
        self.subtrie_node.map_or(0, TrieNode::subtree_size)
    }

    /// Returns whether this view is empty (contains no entries).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the view contains a key.
    ///
    /// Only returns true if the key is in the trie and starts with the prefix.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Gets the value for a key if it exists in this prefix view.
    pub fn get(&self, key: &str) -> Option<&'a V> {
        let rest = key.strip_prefix(self.prefix.as_str())?;
        self.subtrie_node?.descend(rest.chars())?.value()
    }

    /// Returns an iterator over the key-value pairs in the view.
    pub fn iter(&self) -> PrefixViewIter<'a, V> {
        PrefixViewIter::new(self.subtrie_node, self.prefix.clone())
    }

    /// Collects the keys in the view, in ascending order.
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key).collect()
    }

    // Iterates with keys relative to the prefix, for comparing subtrees
    fn relative_iter(&self) -> PrefixViewIter<'a, V> {
        PrefixViewIter::new(self.subtrie_node, String::new())
    }
}

impl<'a, V> PrefixViewIter<'a, V> {
    pub(crate) fn new(start: Option<&'a TrieNode<V>>, path: String) -> Self {
        PrefixViewIter {
            stack: start.into_iter().map(|node| (node, path.len(), None)).collect(),
            path,
        }
    }
}

impl<'a, V> Iterator for PrefixViewIter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth, symbol)) = self.stack.pop() {
            self.path.truncate(depth);
            if let Some(symbol) = symbol {
                self.path.push(symbol);
            }

            // Reverse order so the smallest symbol is popped first
            let child_depth = self.path.len();
            self.stack.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|(&symbol, child)| (child, child_depth, Some(symbol))),
            );

            if let Some(value) = node.value.as_ref() {
                return Some((self.path.clone(), value));
            }
        }

        None
    }
}

impl<'a, V> IntoIterator for &PrefixView<'a, V> {
    type Item = (String, &'a V);
    type IntoIter = PrefixViewIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Debug> fmt::Debug for PrefixView<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("entries", &self.len())
            .finish()
    }
}

// Views are equal when their subtrees hold the same entries relative to their
// prefixes, so views under different prefixes can compare equal.
impl<V: PartialEq> PartialEq for PrefixView<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self.subtrie_node, other.subtrie_node) {
            (None, None) => true,
            (Some(a), Some(b)) if ptr::eq(a, b) => true,
            (Some(_), Some(_)) => self.relative_iter().eq(other.relative_iter()),
            _ => false,
        }
    }
}

impl<V: Eq> Eq for PrefixView<'_, V> {}
