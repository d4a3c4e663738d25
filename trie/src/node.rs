use std::collections::BTreeMap;

use crate::word::Symbol;

/// One position in the trie.
///
/// The symbol leading to a node is its key in the parent's `children`. A
/// node is terminal iff it holds a value.
#[derive(Debug, Clone)]
pub(crate) struct Node<C, V> {
    /// Symbols absorbed from single-child descendants during compaction,
    /// matched right after the symbol keying this node. Empty before.
    edge: Vec<C>,
    value: Option<V>,
    children: BTreeMap<C, Node<C, V>>,
}

impl<C, V> Default for Node<C, V> {
    fn default() -> Self {
        Self {
            edge: Vec::new(),
            value: None,
            children: BTreeMap::new(),
        }
    }
}

/// Where a compaction chain stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChainEnd {
    /// No children left, nothing below to compact.
    Leaf,
    /// Terminal or branching, children still need compacting.
    Interior,
}

impl<C, V> Node<C, V>
where
    C: Symbol,
{
    pub fn edge(&self) -> &[C] {
        &self.edge
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    pub fn children(&self) -> &BTreeMap<C, Node<C, V>> {
        &self.children
    }

    /// Follows `symbols` one per level, creating missing nodes.
    pub fn descend_or_insert(&mut self, symbols: &[C]) -> &mut Node<C, V> {
        symbols.iter().fold(self, |node, symbol| {
            node.children.entry(symbol.clone()).or_default()
        })
    }

    pub fn replace_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    /// Clears the value stored under `key` and detaches every node on the way
    /// back up that is left childless and non-terminal. `self` is never
    /// detached.
    pub fn remove(&mut self, key: &[C]) -> Option<V> {
        match key.split_first() {
            None => self.value.take(),
            Some((head, rest)) => {
                let child = self.children.get_mut(head)?;
                debug_assert!(child.edge.is_empty());
                let removed = child.remove(rest)?;
                if child.is_prunable() {
                    self.children.remove(head);
                }
                Some(removed)
            }
        }
    }

    fn is_prunable(&self) -> bool {
        self.children.is_empty() && !self.is_terminal()
    }

    /// Terminal nodes in this subtree, this node included.
    pub fn count_terminals(&self) -> usize {
        let own = if self.is_terminal() { 1 } else { 0 };
        own + self
            .children
            .values()
            .map(Node::count_terminals)
            .sum::<usize>()
    }

    pub fn count_nodes(&self) -> usize {
        1 + self.children.values().map(Node::count_nodes).sum::<usize>()
    }

    /// Pushes every word of this subtree onto `found`, in symbol order.
    /// `key` holds the symbols spelling this node and is restored on return.
    pub fn collect<'a>(&'a self, key: &mut Vec<C>, found: &mut Vec<(Vec<C>, &'a V)>) {
        if let Some(value) = &self.value {
            found.push((key.clone(), value))
        }
        for (symbol, child) in self.children.iter() {
            let depth = key.len();
            key.push(symbol.clone());
            key.extend_from_slice(&child.edge);
            child.collect(key, found);
            key.truncate(depth);
        }
    }

    /// Collapses every chain of single-child non-terminal nodes below this
    /// node into its head. Returns how many nodes were absorbed.
    pub fn compress(&mut self) -> usize {
        let mut absorbed = 0;
        for child in self.children.values_mut() {
            let (merged, end) = child.absorb_chain();
            absorbed += merged;
            match end {
                ChainEnd::Leaf => {}
                ChainEnd::Interior => absorbed += child.compress(),
            }
        }
        absorbed
    }

    fn absorb_chain(&mut self) -> (usize, ChainEnd) {
        let mut merged = 0;
        while self.children.len() == 1 && !self.is_terminal() {
            self.absorb_only_child();
            merged += 1;
        }
        let end = if self.children.is_empty() {
            ChainEnd::Leaf
        } else {
            ChainEnd::Interior
        };
        (merged, end)
    }

    fn absorb_only_child(&mut self) {
        if let Some((symbol, next)) = self.children.pop_first() {
            let Node {
                edge,
                value,
                children,
            } = next;
            self.edge.push(symbol);
            self.edge.extend(edge);
            self.value = value;
            self.children = children;
        }
    }
}
