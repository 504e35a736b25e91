//! Description trees as emitted by the declarative-language compiler.
//!
//! These types mirror the compiler output as-is: fields the compiler may omit
//! are optional here, and a binding's code is either one unit id or a tuple
//! of ids. Shape validation happens once, during binding synthesis.

use crate::CodeId;

/// One declarative element (the root describes the declared type itself).
///
/// Absent `bindings` or `children` are empty, never an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Description {
    /// Bindings in declaration order.
    pub bindings: Vec<BindingDecl>,
    /// Nested elements in declaration order.
    pub children: Vec<Description>,
    /// Documentation for the generated type (root node only).
    pub doc: Option<String>,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_binding(mut self, binding: BindingDecl) -> Self {
        self.bindings.push(binding);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Description) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A binding as declared, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BindingDecl {
    /// The bound attribute name.
    pub name: Option<String>,
    /// The compiled unit(s) implementing the binding.
    pub code: Option<CodeRef>,
}

impl BindingDecl {
    /// A single-expression binding (`name = expr`).
    pub fn read(name: impl Into<String>, code: CodeId) -> Self {
        BindingDecl {
            name: Some(name.into()),
            code: Some(CodeRef::Unit(code)),
        }
    }

    /// A delegate binding (`name := expr`): subscription then update unit.
    pub fn delegate(name: impl Into<String>, subscribe: CodeId, update: CodeId) -> Self {
        BindingDecl {
            name: Some(name.into()),
            code: Some(CodeRef::Tuple(vec![subscribe, update])),
        }
    }
}

/// Code reference of a binding as emitted by the compiler.
///
/// A well-formed `Tuple` has exactly two elements.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodeRef {
    Unit(CodeId),
    Tuple(Vec<CodeId>),
}

impl CodeRef {
    /// Number of unit ids referenced.
    pub fn arity(&self) -> usize {
        match self {
            CodeRef::Unit(_) => 1,
            CodeRef::Tuple(ids) => ids.len(),
        }
    }
}
