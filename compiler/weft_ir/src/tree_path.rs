//! Paths locating a node inside a description tree.

use std::fmt;

use smallvec::SmallVec;

/// Chain of child indices from the root to a node.
///
/// Most declarative trees are shallow, so paths stay inline up to depth 8.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TreePath(SmallVec<[u32; 8]>);

impl TreePath {
    /// The path of the root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of this node's `index`-th child.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.push(index);
        path
    }

    /// Descend into the `index`-th child in place.
    pub fn push(&mut self, index: usize) {
        self.0.push(
            u32::try_from(index).unwrap_or_else(|_| panic!("child index {index} exceeds u32")),
        );
    }

    /// Return to the parent; `None` at the root.
    pub fn pop(&mut self) -> Option<u32> {
        self.0.pop()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges from the root.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn indices(&self) -> &[u32] {
        &self.0
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root")?;
        for index in &self.0 {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
