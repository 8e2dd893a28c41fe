//! Walks through the trie lessons: a symbol table, the longest common word and
//! the suffix/prefix homework. Run with `RUST_LOG=prefix_trie=trace` to watch
//! insertions and pruning.

use prefix_trie::{LongestCommonPrefixFinder, Trie};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), prefix_trie::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut trie = Trie::new();
    for (i, word) in ["she", "sells", "sea", "shells", "by", "the", "sea", "shore"]
        .iter()
        .enumerate()
    {
        trie.put(word, i)?;
    }
    println!("keys: {:?}", trie.keys());
    println!("keys with prefix \"sh\": {:?}", trie.keys_with_prefix("sh"));
    println!(
        "longest prefix of \"shellsort\": {:?}",
        trie.longest_prefix_of("shellsort")?
    );
    trie.delete("shells")?;
    println!("after deleting \"shells\": {:?}", trie.keys());

    let finder = LongestCommonPrefixFinder::new();
    for strings in &[
        vec!["flower", "flow", "flight"],
        vec!["interspecies", "interstellar", "interstate"],
        vec!["dog", "racecar", "car"],
    ] {
        println!(
            "common prefix of {:?}: {:?}",
            strings,
            finder.find_longest_common_word(strings)
        );
    }

    let mut homework = Trie::new();
    for (i, word) in ["apple", "application", "banana", "cat"].iter().enumerate() {
        homework.put(word, i)?;
    }
    for suffix in &["e", "ion", "a", "at"] {
        println!(
            "words ending with {:?}: {}",
            suffix,
            homework.count_words_with_suffix(suffix)
        );
    }
    for prefix in &["app", "bat", "ban", "ca"] {
        println!("has prefix {:?}: {}", prefix, homework.has_prefix(prefix));
    }

    Ok(())
}
