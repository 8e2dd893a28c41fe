//! Node implementation for the prefix trie.
//!
//! This module contains the `TrieNode` structure that forms the backbone of the
//! trie. Every node owns its children directly, so the whole tree is a strict
//! hierarchy rooted in `Trie`.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::mem;

/// A single node of the trie.
///
/// Each node holds a symbol-indexed map of children, an optional value and a
/// pass count. A node with a value is *terminal*: the path of symbols from the
/// root to it is a stored key. Terminal nodes may still have children because
/// keys can be prefixes of other keys.
///
/// Dropping, cloning and formatting walk the subtree with an explicit stack,
/// so arbitrarily long keys never exhaust the call stack.
pub struct TrieNode<V> {
    /// Child nodes indexed by the symbol on the edge leading to them
    pub(crate) children: BTreeMap<char, TrieNode<V>>,

    /// The value stored at this node, if any
    pub(crate) value: Option<V>,

    /// Number of insertions whose path visited this node
    pub(crate) pass_count: usize,
}

impl<V> TrieNode<V> {
    /// Creates a new node with no value and no children
    pub fn new() -> Self {
        TrieNode {
            children: BTreeMap::new(),
            value: None,
            pass_count: 0,
        }
    }

    /// Creates a new childless node holding the given value
    #[cfg(test)]
    pub(crate) fn with_value(value: V) -> Self {
        TrieNode {
            children: BTreeMap::new(),
            value: Some(value),
            pass_count: 0,
        }
    }

    /// Returns the value stored at this node, if any
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Returns the number of insertions that passed through this node
    pub fn pass_count(&self) -> usize {
        self.pass_count
    }

    /// Returns the child reached over the edge labelled `symbol`
    pub fn child(&self, symbol: char) -> Option<&TrieNode<V>> {
        self.children.get(&symbol)
    }

    /// Iterates over `(symbol, child)` pairs in ascending symbol order
    pub fn children(&self) -> btree_map::Iter<'_, char, TrieNode<V>> {
        self.children.iter()
    }

    /// Returns the number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns whether a key ends at this node
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether this node carries nothing: no value and no children
    pub fn is_dead_end(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Returns the number of values stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.value.is_some() {
                count += 1;
            }
            stack.extend(node.children.values());
        }

        count
    }

    /// Returns the only child of this node, or `None` if there are zero or
    /// several children
    pub(crate) fn sole_child(&self) -> Option<(char, &TrieNode<V>)> {
        if self.children.len() != 1 {
            return None;
        }
        self.children.iter().next().map(|(&symbol, child)| (symbol, child))
    }

    /// Follows `symbols` downward, returning the node at the end of the path
    pub(crate) fn descend<I>(&self, symbols: I) -> Option<&TrieNode<V>>
    where
        I: IntoIterator<Item = char>,
    {
        let mut current = self;
        for symbol in symbols {
            current = current.children.get(&symbol)?;
        }
        Some(current)
    }

    /// Follows `symbols` downward, returning the node at the end of the path
    pub(crate) fn descend_mut<I>(&mut self, symbols: I) -> Option<&mut TrieNode<V>>
    where
        I: IntoIterator<Item = char>,
    {
        let mut current = self;
        for symbol in symbols {
            current = current.children.get_mut(&symbol)?;
        }
        Some(current)
    }

    /// Copies value and pass count, leaving the children behind
    fn shallow_clone(&self) -> Self
    where
        V: Clone,
    {
        TrieNode {
            children: BTreeMap::new(),
            value: self.value.clone(),
            pass_count: self.pass_count,
        }
    }

    /// Follows `symbols` downward, creating missing nodes and counting a pass
    /// on every node visited, this one included.
    pub(crate) fn descend_or_create<I>(&mut self, symbols: I) -> &mut TrieNode<V>
    where
        I: IntoIterator<Item = char>,
    {
        self.pass_count += 1;
        let mut current = self;
        for symbol in symbols {
            current = current.children.entry(symbol).or_insert_with(TrieNode::new);
            current.pass_count += 1;
        }
        current
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for TrieNode<V> {
    fn drop(&mut self) {
        // Detach every descendant first so each one drops with no children
        let mut stack: Vec<TrieNode<V>> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(mem::take(&mut node.children).into_values());
        }
    }
}

impl<V: Clone> Clone for TrieNode<V> {
    fn clone(&self) -> Self {
        let mut root = self.shallow_clone();

        // `path` holds the copies along the branch being rebuilt; a copy is
        // attached to its parent once the walk leaves its subtree.
        let mut path: Vec<(char, TrieNode<V>)> = Vec::new();
        let mut pending: Vec<(usize, char, &TrieNode<V>)> =
            self.children.iter().map(|(&symbol, child)| (1, symbol, child)).collect();

        while let Some((depth, symbol, source)) = pending.pop() {
            while path.len() >= depth {
                attach_last(&mut root, &mut path);
            }
            path.push((symbol, source.shallow_clone()));
            pending.extend(
                source
                    .children
                    .iter()
                    .map(|(&symbol, child)| (depth + 1, symbol, child)),
            );
        }
        while !path.is_empty() {
            attach_last(&mut root, &mut path);
        }

        root
    }
}

// Pops the deepest copy off `path` and inserts it under its parent
fn attach_last<V>(root: &mut TrieNode<V>, path: &mut Vec<(char, TrieNode<V>)>) {
    if let Some((symbol, node)) = path.pop() {
        let parent = match path.last_mut() {
            Some((_, parent)) => parent,
            None => root,
        };
        parent.children.insert(symbol, node);
    }
}

impl<V: fmt::Debug> fmt::Debug for TrieNode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("value", &self.value)
            .field("pass_count", &self.pass_count)
            .field("children", &self.children.keys())
            .finish()
    }
}
