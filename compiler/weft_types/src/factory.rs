//! Deriving declarative types from description trees.

use std::sync::Arc;

use weft_bind::synthesize;
use weft_ir::{CodeArena, Description, SharedNamespace};

use crate::{
    qualified_name, DeclarativeType, DeriveError, HistoryEntry, IncompatibleBaseError,
    TypeAttributes, TypeRef,
};

/// Inputs of one declarative derivation, as provided by the module loader.
pub struct DeriveRequest<'a> {
    /// Name of the new type.
    pub name: &'a str,
    /// The base; must have the declarative-base capability.
    pub base: &'a TypeRef,
    /// Root description of the definition.
    pub description: &'a Description,
    /// Compiled units referenced by `description`.
    pub code: &'a CodeArena,
    /// Globals captured for the defining module.
    pub namespace: &'a SharedNamespace,
}

/// Derive a new declarative type.
///
/// The base is checked before anything else, so a rejected base leaves no
/// trace. The description is then synthesized exactly once; the result is
/// appended, together with the namespace, to a copy of the base's history.
#[tracing::instrument(level = "debug", skip_all, fields(
    name = request.name,
    base = request.base.name(),
))]
pub fn derive_declarative_type(
    request: &DeriveRequest<'_>,
) -> Result<Arc<DeclarativeType>, DeriveError> {
    let Some(base) = request.base.as_declarative() else {
        let base = qualified_name(&**request.base);
        tracing::debug!(%base, "base lacks the declarative capability");
        return Err(IncompatibleBaseError { base }.into());
    };

    let tree = synthesize(request.description, request.code, request.namespace)?;

    let attributes = TypeAttributes {
        module: request.namespace.module_name().to_string(),
        doc: request.description.doc.clone().unwrap_or_default(),
    };
    let history = base.description_history().extended(HistoryEntry::new(
        Arc::new(tree),
        Arc::clone(request.namespace),
    ));
    tracing::debug!(layers = history.len(), "derived declarative type");

    Ok(Arc::new(DeclarativeType::new(
        request.name.to_string(),
        Arc::clone(request.base),
        attributes,
        history,
    )))
}
