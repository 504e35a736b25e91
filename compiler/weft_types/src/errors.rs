//! Errors raised while deriving a declarative type.

use weft_bind::StructuralError;

/// The requested base lacks the declarative-base capability.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("can't derive declarative type from '{base}'")]
pub struct IncompatibleBaseError {
    /// Qualified name of the rejected base.
    pub base: String,
}

/// Any failure of [`derive_declarative_type`](crate::derive_declarative_type).
///
/// Both kinds abort the whole derivation; no type is produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeriveError {
    #[error(transparent)]
    IncompatibleBase(#[from] IncompatibleBaseError),

    #[error("malformed description: {0}")]
    Structural(#[from] StructuralError),
}
