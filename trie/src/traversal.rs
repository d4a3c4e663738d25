use std::iter;

use crate::node::Node;
use crate::word::Symbol;

/// The nodes a walk stepped through, each with the symbol that keyed it.
#[derive(Debug)]
pub(crate) struct Path<'a, C, V> {
    steps: Vec<(&'a C, &'a Node<C, V>)>,
    end: &'a Node<C, V>,
}

impl<'a, C, V> Path<'a, C, V>
where
    C: Symbol,
{
    pub fn end(&self) -> &'a Node<C, V> {
        self.end
    }

    /// Symbols spelled by the path, each step's edge in full.
    pub fn key(&self) -> Vec<C> {
        self.steps
            .iter()
            .flat_map(|(symbol, node)| iter::once(*symbol).chain(node.edge()))
            .cloned()
            .collect()
    }

    /// One group per step, groups joined by `separator`.
    pub fn render(&self, separator: &str) -> String {
        self.steps
            .iter()
            .map(|(symbol, node)| {
                iter::once(*symbol)
                    .chain(node.edge())
                    .map(ToString::to_string)
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(separator)
    }
}

#[derive(Debug)]
pub(crate) enum Walk<'a, C, V> {
    /// The key ran out exactly on a node.
    Exact(Path<'a, C, V>),
    /// The key ran out part way through the last node's edge, every symbol
    /// consumed so far matched.
    WithinEdge(Path<'a, C, V>),
    /// Missing child or an edge symbol mismatch.
    Diverged,
}

/// Follows `key` from `root`. A node carrying an edge is one step: the key
/// has to match the node's symbol and then its whole edge.
pub(crate) fn walk<'a, C, V>(root: &'a Node<C, V>, key: &[C]) -> Walk<'a, C, V>
where
    C: Symbol,
{
    let mut steps = Vec::new();
    let mut node = root;
    let mut rest = key;
    while let Some((head, tail)) = rest.split_first() {
        let (symbol, child) = match node.children().get_key_value(head) {
            None => return Walk::Diverged,
            Some(entry) => entry,
        };
        steps.push((symbol, child));
        node = child;

        let edge = child.edge();
        if tail.len() < edge.len() {
            return if edge.starts_with(tail) {
                Walk::WithinEdge(Path { steps, end: node })
            } else {
                Walk::Diverged
            };
        }
        let (absorbed, remaining) = tail.split_at(edge.len());
        if absorbed != edge {
            return Walk::Diverged;
        }
        rest = remaining;
    }
    Walk::Exact(Path { steps, end: node })
}
