//! Suffix and prefix membership queries.
//!
//! Both queries are read-only and built on the trie's existing enumeration and
//! path-walking primitives; no extra bookkeeping is kept for them.

use crate::Trie;

impl<V> Trie<V> {
    /// Counts the stored keys that end with `pattern`.
    ///
    /// Matching is case-sensitive and symbol-wise. An empty pattern matches
    /// every key. The whole trie is enumerated, so the cost is linear in the
    /// total length of the stored keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// for (i, word) in ["apple", "application", "banana", "cat"].iter().enumerate() {
    ///     trie.put(word, i).unwrap();
    /// }
    ///
    /// assert_eq!(trie.count_words_with_suffix("ion"), 1);
    /// assert_eq!(trie.count_words_with_suffix(""), 4);
    /// ```
    pub fn count_words_with_suffix(&self, pattern: &str) -> usize {
        self.iter().filter(|(key, _)| key.ends_with(pattern)).count()
    }

    /// Collects the stored keys that end with `pattern`, in ascending order.
    pub fn keys_with_suffix(&self, pattern: &str) -> Vec<String> {
        self.iter()
            .map(|(key, _)| key)
            .filter(|key| key.ends_with(pattern))
            .collect()
    }

    /// Returns whether the path for `prefix` exists in the trie.
    ///
    /// This checks structure, not stored keys: a prefix of any stored key
    /// qualifies even if it is not a key itself. The empty prefix is always
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("banana", 0).unwrap();
    ///
    /// assert!(trie.has_prefix("ban"));
    /// assert!(!trie.has_prefix("bat"));
    /// ```
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node(prefix).is_some()
    }
}
