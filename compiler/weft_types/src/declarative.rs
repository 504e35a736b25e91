//! Types produced by declarative derivation.

use crate::{DeclarativeBase, DescriptionHistory, RuntimeType, TypeRef};

/// The only attributes a derived type defines directly.
///
/// All declarative behavior lives in the description history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeAttributes {
    /// Name of the module the definition was loaded from.
    pub module: String,
    /// Documentation from the root description.
    pub doc: String,
}

/// A type derived from a declarative base.
///
/// Itself declarative, so further definitions can derive from it and
/// accumulate their own layer on top of its history.
#[derive(Debug)]
pub struct DeclarativeType {
    name: String,
    base: TypeRef,
    attributes: TypeAttributes,
    history: DescriptionHistory,
}

impl DeclarativeType {
    pub(crate) fn new(
        name: String,
        base: TypeRef,
        attributes: TypeAttributes,
        history: DescriptionHistory,
    ) -> Self {
        DeclarativeType {
            name,
            base,
            attributes,
            history,
        }
    }

    pub fn doc(&self) -> &str {
        &self.attributes.doc
    }

    pub fn attributes(&self) -> &TypeAttributes {
        &self.attributes
    }
}

impl RuntimeType for DeclarativeType {
    fn name(&self) -> &str {
        &self.name
    }

    fn module(&self) -> &str {
        &self.attributes.module
    }

    fn base(&self) -> Option<&TypeRef> {
        Some(&self.base)
    }

    fn as_declarative(&self) -> Option<&dyn DeclarativeBase> {
        Some(self)
    }
}

impl DeclarativeBase for DeclarativeType {
    fn description_history(&self) -> &DescriptionHistory {
        &self.history
    }
}
