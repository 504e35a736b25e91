//! The annotated tree produced by binding synthesis.

use std::slice;
use std::sync::Arc;

use weft_ir::TreePath;

use crate::{BindingCode, BindingFunc};

/// A binding whose callable has been created.
#[derive(Clone, Debug)]
pub struct SynthesizedBinding {
    name: Arc<str>,
    code: BindingCode,
    func: BindingFunc,
}

impl SynthesizedBinding {
    pub(crate) fn new(name: Arc<str>, code: BindingCode, func: BindingFunc) -> Self {
        SynthesizedBinding { name, code, func }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The validated code shape the callable was built from.
    pub fn code(&self) -> BindingCode {
        self.code
    }

    pub fn func(&self) -> &BindingFunc {
        &self.func
    }
}

/// A description node with every binding synthesized.
///
/// Bindings and children keep their declaration order.
#[derive(Clone, Debug, Default)]
pub struct SynthesizedNode {
    bindings: Vec<SynthesizedBinding>,
    children: Vec<SynthesizedNode>,
    doc: Option<String>,
}

impl SynthesizedNode {
    pub(crate) fn new(
        bindings: Vec<SynthesizedBinding>,
        children: Vec<SynthesizedNode>,
        doc: Option<String>,
    ) -> Self {
        SynthesizedNode {
            bindings,
            children,
            doc,
        }
    }

    pub fn bindings(&self) -> &[SynthesizedBinding] {
        &self.bindings
    }

    pub fn children(&self) -> &[SynthesizedNode] {
        &self.children
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// `true` for a node with no bindings and no children.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty() && self.children.is_empty()
    }

    /// Total number of bindings in this subtree.
    pub fn binding_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += node.bindings.len();
            pending.extend(node.children.iter());
        }
        count
    }

    /// Every binding in the subtree, pre-order: a node's own bindings first,
    /// then each child's subtree in declaration order.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            pending: vec![(TreePath::root(), self)],
            current: None,
        }
    }
}

/// Drops descendants from a heap worklist, keeping the native stack flat.
impl Drop for SynthesizedNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Pre-order iterator over the bindings of a [`SynthesizedNode`].
pub struct Walk<'a> {
    /// Nodes not yet entered, next node on top.
    pending: Vec<(TreePath, &'a SynthesizedNode)>,
    /// The node whose bindings are being yielded.
    current: Option<(TreePath, slice::Iter<'a, SynthesizedBinding>)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (TreePath, &'a SynthesizedBinding);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((path, bindings)) = &mut self.current {
                if let Some(binding) = bindings.next() {
                    return Some((path.clone(), binding));
                }
            }
            let (path, node) = self.pending.pop()?;
            for (index, child) in node.children.iter().enumerate().rev() {
                self.pending.push((path.child(index), child));
            }
            self.current = Some((path, node.bindings.iter()));
        }
    }
}

#[cfg(test)]
mod tests;
