//! A character trie mapping words to opaque values that can be compacted,
//! once, into a radix tree.
//!
//! A [`CompactTrie`] starts out mutable with one node per symbol. After
//! [`CompactTrie::compress`] every chain of single-child nodes that do not
//! end a word is folded into one node carrying a multi-symbol edge; from then
//! on the trie is read-only and [`CompactTrie::sequence`] becomes available.

mod compact;
mod config;
mod error;
mod node;
mod traversal;
mod word;

pub use compact::CompactTrie;
pub use config::{PrefixMode, TrieConfig, DEFAULT_SEPARATOR};
pub use error::{Operation, Result, TrieError};
pub use word::{Symbol, Word};

const TRIE_LOG_TARGET: &str = "trie";

/// Words made of `char`s, the usual dictionary.
pub type Dictionary<V> = CompactTrie<char, V>;
