use std::fmt::{Debug, Display};

/// A single unit of a key. Children are ordered by symbol.
pub trait Symbol: Ord + Clone + Debug + Display {}

impl<T> Symbol for T where T: Ord + Clone + Debug + Display {}

/// Anything that can be split into the symbols a trie is keyed by.
pub trait Word<C>
where
    C: Symbol,
{
    fn symbols(&self) -> Vec<C>;
}

impl Word<char> for str {
    fn symbols(&self) -> Vec<char> {
        self.chars().collect()
    }
}

impl Word<char> for String {
    fn symbols(&self) -> Vec<char> {
        self.as_str().symbols()
    }
}

impl<C> Word<C> for [C]
where
    C: Symbol,
{
    fn symbols(&self) -> Vec<C> {
        self.to_vec()
    }
}

impl<C, const N: usize> Word<C> for [C; N]
where
    C: Symbol,
{
    fn symbols(&self) -> Vec<C> {
        self.to_vec()
    }
}

impl<C> Word<C> for Vec<C>
where
    C: Symbol,
{
    fn symbols(&self) -> Vec<C> {
        self.clone()
    }
}
