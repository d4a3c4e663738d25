use tracing::{debug, trace};

use crate::config::{sanitize, PrefixMode, TrieConfig};
use crate::error::{Operation, Result, TrieError};
use crate::node::Node;
use crate::traversal::{walk, Walk};
use crate::word::{Symbol, Word};
use crate::TRIE_LOG_TARGET;

/// Trie that is written first and then compressed into a radix tree.
///
/// `insert` and `remove` are rejected once the trie is compressed and
/// `sequence` is rejected until it is; everything else works in both states.
#[derive(Debug, Clone)]
pub struct CompactTrie<C, V> {
    root: Node<C, V>,
    compressed: bool,
    config: TrieConfig,
}

impl<C, V> Default for CompactTrie<C, V> {
    fn default() -> Self {
        Self {
            root: Node::default(),
            compressed: false,
            config: TrieConfig::default(),
        }
    }
}

impl<C, V> CompactTrie<C, V>
where
    C: Symbol,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            config: sanitize(&config),
            ..Self::default()
        }
    }

    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Associates `value` with `key`, returning the value it replaced. The
    /// empty key is stored on the root.
    pub fn insert<K>(&mut self, key: &K, value: V) -> Result<Option<V>>
    where
        K: Word<C> + ?Sized,
    {
        self.ensure_mutable(Operation::Insert)?;
        let symbols = key.symbols();
        let previous = self.root.descend_or_insert(&symbols).replace_value(value);
        trace!(target: TRIE_LOG_TARGET, len = symbols.len(), replaced = previous.is_some(), "Inserted word");
        Ok(previous)
    }

    /// Removes `key`, pruning the nodes only it was using. `Ok(None)` when
    /// the word was not stored.
    pub fn remove<K>(&mut self, key: &K) -> Result<Option<V>>
    where
        K: Word<C> + ?Sized,
    {
        self.ensure_mutable(Operation::Remove)?;
        let symbols = key.symbols();
        let removed = self.root.remove(&symbols);
        trace!(target: TRIE_LOG_TARGET, len = symbols.len(), found = removed.is_some(), "Removed word");
        Ok(removed)
    }

    pub fn get<K>(&self, key: &K) -> Option<&V>
    where
        K: Word<C> + ?Sized,
    {
        match walk(&self.root, &key.symbols()) {
            Walk::Exact(path) => path.end().value(),
            Walk::WithinEdge(_) | Walk::Diverged => None,
        }
    }

    pub fn contains_key<K>(&self, key: &K) -> bool
    where
        K: Word<C> + ?Sized,
    {
        self.get(key).is_some()
    }

    /// The symbols `get` consumes for `key`, grouped per node and joined by
    /// the configured separator, e.g. `ca-r-t`. Only valid once compressed.
    pub fn sequence<K>(&self, key: &K) -> Result<Option<String>>
    where
        K: Word<C> + ?Sized,
    {
        if !self.compressed {
            debug!(target: TRIE_LOG_TARGET, operation = %Operation::Sequence, "Rejected call on uncompressed trie");
            return Err(TrieError::NotCompressed(Operation::Sequence));
        }
        let sequence = match walk(&self.root, &key.symbols()) {
            Walk::Exact(path) if path.end().is_terminal() => {
                Some(path.render(&self.config.separator))
            }
            _ => None,
        };
        Ok(sequence)
    }

    /// Number of stored words starting with `prefix`. The empty prefix
    /// counts nothing.
    pub fn count_prefix<K>(&self, prefix: &K) -> usize
    where
        K: Word<C> + ?Sized,
    {
        let symbols = prefix.symbols();
        if symbols.is_empty() {
            return 0;
        }
        match walk(&self.root, &symbols) {
            Walk::Exact(path) => path.end().count_terminals(),
            Walk::WithinEdge(path) => match self.config.prefix_mode {
                PrefixMode::Inclusive => path.end().count_terminals(),
                PrefixMode::NodeBoundary => 0,
            },
            Walk::Diverged => 0,
        }
    }

    /// Stored words starting with `prefix` with their values, in symbol
    /// order. Matches the same words `count_prefix` counts.
    pub fn prefix<K>(&self, prefix: &K) -> Vec<(Vec<C>, &V)>
    where
        K: Word<C> + ?Sized,
    {
        let symbols = prefix.symbols();
        if symbols.is_empty() {
            return vec![];
        }
        let path = match walk(&self.root, &symbols) {
            Walk::Exact(path) => path,
            Walk::WithinEdge(path) if self.config.prefix_mode == PrefixMode::Inclusive => path,
            _ => return vec![],
        };
        let mut found = vec![];
        path.end().collect(&mut path.key(), &mut found);
        found
    }

    /// Every stored word with its value, in symbol order.
    pub fn entries(&self) -> Vec<(Vec<C>, &V)> {
        let mut found = vec![];
        self.root.collect(&mut vec![], &mut found);
        found
    }

    /// Folds every chain of single-child nodes that do not end a word into
    /// the chain's first node. Irreversible; a second call does nothing.
    pub fn compress(&mut self) {
        if self.compressed {
            return;
        }
        let before = self.root.count_nodes();
        let absorbed = self.root.compress();
        self.compressed = true;
        debug!(target: TRIE_LOG_TARGET, absorbed, before, after = before - absorbed, "Compressed trie");
    }

    pub fn len(&self) -> usize {
        self.root.count_terminals()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nodes currently in the trie, root included.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    fn ensure_mutable(&self, operation: Operation) -> Result<()> {
        if self.compressed {
            debug!(target: TRIE_LOG_TARGET, operation = %operation, "Rejected call on compressed trie");
            return Err(TrieError::Compressed(operation));
        }
        Ok(())
    }
}
