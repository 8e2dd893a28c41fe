//! # Prefix Trie
//!
//! A mutable prefix tree (trie) keyed by strings, one node per `char`.
//!
//! Besides the usual map operations the crate offers prefix queries and two
//! analytical queries built on top of the tree:
//!
//! - **Prefix queries**: longest stored prefix of a string, keys under a prefix,
//!   borrowed [`PrefixView`]s of a subtree
//! - **Longest common prefix**: [`LongestCommonPrefixFinder`] over any string collection
//! - **Affix queries**: counting keys by suffix and testing for a structural prefix
//!
//! Children are kept in symbol order, so every enumeration returns keys in
//! ascending string order.
//!
//! ## Example
//!
//! ```rust
//! use prefix_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.put("she", 0).unwrap();
//! trie.put("shells", 1).unwrap();
//! trie.put("sea", 2).unwrap();
//!
//! assert_eq!(trie.get("she").unwrap(), Some(&0));
//! assert_eq!(trie.longest_prefix_of("shellsort").unwrap(), "shells");
//! assert_eq!(trie.keys_with_prefix("sh"), vec!["she", "shells"]);
//! ```

mod affix;
mod common_prefix;
pub mod node;
mod prefix_view;
mod trie;
mod util;

// Re-export public types
pub use crate::common_prefix::LongestCommonPrefixFinder;
pub use crate::node::TrieNode;
pub use crate::prefix_view::{PrefixView, PrefixViewIter};
pub use crate::trie::Trie;

/// Target used by every `tracing` event emitted from this crate.
pub const TRIE_LOG_TARGET: &str = "prefix_trie";

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An argument was rejected before the trie was touched
    #[error("illegal argument for {operation}: {reason}")]
    InvalidArgument {
        /// Name of the rejected operation
        operation: &'static str,
        /// What was wrong with the argument
        reason: &'static str,
    },
}

/// Result alias for fallible trie operations.
pub type Result<T> = std::result::Result<T, Error>;
