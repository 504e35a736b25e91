//! Runtime type traits and the built-in base types.

use std::fmt;
use std::sync::Arc;

use crate::DescriptionHistory;

/// A shared handle to a runtime type.
pub type TypeRef = Arc<dyn RuntimeType>;

/// A type that can be named as the base of a derivation.
pub trait RuntimeType: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Defining module, `""` when unknown.
    fn module(&self) -> &str {
        ""
    }

    /// The sole declared parent, if any.
    fn base(&self) -> Option<&TypeRef> {
        None
    }

    /// The declarative-base capability, when this type has it.
    fn as_declarative(&self) -> Option<&dyn DeclarativeBase> {
        None
    }
}

/// Capability of serving as a base for declarative derivation.
///
/// Implementors expose the descriptions their instances are populated from;
/// a derived type inherits this history and appends its own entry.
pub trait DeclarativeBase: RuntimeType {
    fn description_history(&self) -> &DescriptionHistory;
}

/// Walk the base chain of `ty`, nearest parent first.
pub fn ancestors<'a>(ty: &'a dyn RuntimeType) -> impl Iterator<Item = &'a TypeRef> + 'a {
    std::iter::successors(ty.base(), |&base: &&'a TypeRef| base.base())
}

/// `true` when `ancestor` appears (by identity) in the base chain of `ty`.
pub fn is_proper_subtype(ty: &dyn RuntimeType, ancestor: &TypeRef) -> bool {
    ancestors(ty).any(|base| Arc::ptr_eq(base, ancestor))
}

/// `module.name`, or just `name` for types without a module.
pub fn qualified_name(ty: &dyn RuntimeType) -> String {
    match ty.module() {
        "" => ty.name().to_string(),
        module => format!("{module}.{}", ty.name()),
    }
}

/// A host type without the declarative capability.
#[derive(Clone, Debug)]
pub struct PlainType {
    name: String,
    module: String,
}

impl PlainType {
    pub fn new(name: impl Into<String>, module: impl Into<String>) -> Self {
        PlainType {
            name: name.into(),
            module: module.into(),
        }
    }
}

impl RuntimeType for PlainType {
    fn name(&self) -> &str {
        &self.name
    }

    fn module(&self) -> &str {
        &self.module
    }
}

/// The root declarative base: declarative, with no descriptions of its own.
#[derive(Clone, Debug)]
pub struct DeclarativeRoot {
    name: String,
    module: String,
    history: DescriptionHistory,
}

impl DeclarativeRoot {
    pub fn new(name: impl Into<String>, module: impl Into<String>) -> Self {
        DeclarativeRoot {
            name: name.into(),
            module: module.into(),
            history: DescriptionHistory::new(),
        }
    }
}

impl RuntimeType for DeclarativeRoot {
    fn name(&self) -> &str {
        &self.name
    }

    fn module(&self) -> &str {
        &self.module
    }

    fn as_declarative(&self) -> Option<&dyn DeclarativeBase> {
        Some(self)
    }
}

impl DeclarativeBase for DeclarativeRoot {
    fn description_history(&self) -> &DescriptionHistory {
        &self.history
    }
}
