//! Longest common prefix of a string collection.
//!
//! The finder inserts every string into a fresh trie, counting on each node how
//! many strings passed through it, and then follows the chain of single
//! children from the root for as long as every string passed through.

use std::str;

use tracing::debug;

use crate::node::TrieNode;
use crate::{Trie, TRIE_LOG_TARGET};

/// Computes the longest prefix shared by all strings of a collection.
///
/// Unlike [`Trie`], the finder never fails: an empty collection, or an
/// untrusted collection containing something that is not a string, yields the
/// empty string.
///
/// # Examples
///
/// ```
/// use prefix_trie::LongestCommonPrefixFinder;
///
/// let finder = LongestCommonPrefixFinder::new();
///
/// assert_eq!(finder.find_longest_common_word(&["flower", "flow", "flight"]), "fl");
/// assert_eq!(finder.find_longest_common_word(&["dog", "racecar", "car"]), "");
/// assert_eq!(finder.find_longest_common_word(Vec::<String>::new()), "");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LongestCommonPrefixFinder;

impl LongestCommonPrefixFinder {
    /// Creates a new finder
    pub fn new() -> Self {
        LongestCommonPrefixFinder
    }

    /// Returns the longest common prefix of `strings`, or `""` if they share
    /// none or there are no strings at all.
    ///
    /// Runs in time linear in the total length of the strings: one insertion
    /// pass, then a walk no longer than the shortest string.
    pub fn find_longest_common_word<I, S>(&self, strings: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie: Trie<()> = Trie::new();
        let mut total = 0;

        for s in strings {
            trie.record_pass(s.as_ref());
            total += 1;
        }

        if total == 0 {
            return String::new();
        }

        let prefix = Self::walk_common_chain(trie.root(), total);
        debug!(target: TRIE_LOG_TARGET, strings = total, prefix = %prefix, "Computed longest common prefix");
        prefix
    }

    /// Like [`find_longest_common_word`](Self::find_longest_common_word), for
    /// raw byte strings from an untrusted source.
    ///
    /// If any item is not valid UTF-8 the whole collection is rejected and the
    /// result is `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::LongestCommonPrefixFinder;
    ///
    /// let finder = LongestCommonPrefixFinder::new();
    ///
    /// let items = vec![&b"interstellar"[..], &b"interstate"[..]];
    /// assert_eq!(finder.find_longest_common_word_utf8(items), "interst");
    ///
    /// let items = vec![&b"interstellar"[..], &b"\xff\xfe"[..]];
    /// assert_eq!(finder.find_longest_common_word_utf8(items), "");
    /// ```
    pub fn find_longest_common_word_utf8<I, B>(&self, items: I) -> String
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let items: Vec<B> = items.into_iter().collect();

        let strings: Result<Vec<&str>, _> = items
            .iter()
            .map(|item| str::from_utf8(item.as_ref()))
            .collect();

        match strings {
            Ok(strings) => self.find_longest_common_word(strings),
            Err(err) => {
                debug!(target: TRIE_LOG_TARGET, error = %err, "Rejected non-string input");
                String::new()
            }
        }
    }

    // Follows single children whose pass count covers every string. A branch
    // ends the walk even if the counts would still match.
    fn walk_common_chain<V>(root: &TrieNode<V>, total: usize) -> String {
        let mut prefix = String::new();
        let mut current = root;

        while let Some((symbol, next)) = current.sole_child() {
            if next.pass_count() != total {
                break;
            }
            prefix.push(symbol);
            current = next;
        }

        prefix
    }
}
