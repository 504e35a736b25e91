//! Structural errors in compiler-emitted description trees.

use weft_ir::{CodeId, TreePath};

/// A description tree that does not have the shape the compiler promises.
///
/// These are contract violations by the upstream compiler, not recoverable
/// conditions. Every variant carries the path of the offending node and the
/// binding's name, or its position when the name itself is missing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("binding #{index} at {path} has no name")]
    MissingName { path: TreePath, index: usize },

    #[error("binding #{index} at {path} has an empty name")]
    EmptyName { path: TreePath, index: usize },

    #[error("binding '{name}' at {path} has no code")]
    MissingCode { path: TreePath, name: String },

    #[error(
        "binding '{name}' at {path} has {arity} code units, \
         expected a single unit or a (subscribe, update) pair"
    )]
    InvalidCodeShape {
        path: TreePath,
        name: String,
        arity: usize,
    },

    #[error("binding '{name}' at {path} refers to unknown code unit {code}")]
    UnknownCode {
        path: TreePath,
        name: String,
        code: CodeId,
    },
}

impl StructuralError {
    /// Path of the node holding the malformed binding.
    pub fn path(&self) -> &TreePath {
        match self {
            StructuralError::MissingName { path, .. }
            | StructuralError::EmptyName { path, .. }
            | StructuralError::MissingCode { path, .. }
            | StructuralError::InvalidCodeShape { path, .. }
            | StructuralError::UnknownCode { path, .. } => path,
        }
    }

    /// Name of the malformed binding, when it has one.
    pub fn binding_name(&self) -> Option<&str> {
        match self {
            StructuralError::MissingName { .. } | StructuralError::EmptyName { .. } => None,
            StructuralError::MissingCode { name, .. }
            | StructuralError::InvalidCodeShape { name, .. }
            | StructuralError::UnknownCode { name, .. } => Some(name),
        }
    }
}
