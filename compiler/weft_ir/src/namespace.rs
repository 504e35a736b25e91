//! Captured global namespaces.
//!
//! A `Namespace` holds the globals visible to every binding expression of one
//! declarative module, plus the name of that module. The compiler-generated
//! loader owns it; once wrapped in a [`SharedNamespace`] it is read-only and
//! stays alive for as long as any binding function closed over it.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::Value;

/// A namespace shared by reference across all binding functions of a walk.
pub type SharedNamespace = Arc<Namespace>;

/// Per-call local bindings handed to a binding function when it runs.
pub type Locals = FxHashMap<String, Value>;

/// Globals captured at module-definition time.
#[derive(Clone, Debug, Default)]
pub struct Namespace {
    /// Name of the defining module, if the loader knows it.
    module: Option<String>,
    /// Global bindings (`FxHashMap` for fast string-key lookups).
    globals: FxHashMap<String, Value>,
}

impl Namespace {
    /// Create an empty namespace with no module name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty namespace for the named module.
    pub fn for_module(module: impl Into<String>) -> Self {
        Namespace {
            module: Some(module.into()),
            globals: FxHashMap::default(),
        }
    }

    /// The defining module's name, or `""` when unknown.
    pub fn module_name(&self) -> &str {
        self.module.as_deref().unwrap_or("")
    }

    /// Define (or redefine) a global.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.globals.insert(name.into(), value);
    }

    /// Builder-style [`Namespace::define`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.define(name, value);
        self
    }

    /// Look up a global by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.globals.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.globals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.globals.is_empty()
    }

    /// Freeze the namespace for sharing across binding functions.
    pub fn into_shared(self) -> SharedNamespace {
        Arc::new(self)
    }
}
