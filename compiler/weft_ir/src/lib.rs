//! Weft IR - data model for declarative type synthesis.
//!
//! This crate contains the structures shared between the binding synthesizer
//! and the type factory:
//! - `Description` trees as emitted by the declarative-language compiler
//! - `CodeId` / `CodeArena` for precompiled expression units
//! - `Namespace` for the globals captured at module-definition time
//! - `Value` / `EvalError` for what expression units produce
//! - `TreePath` for locating a node inside a description tree
//!
//! # Design Philosophy
//!
//! - **Flat code references**: the tree refers to compiled units by
//!   `CodeId(u32)` instead of owning them, so a description stays plain data.
//! - **Raw input, validated output**: `Description` mirrors what the compiler
//!   emits, including missing fields; validation happens in `weft_bind`.
//! - **Shared, read-only context**: namespaces are shared through `Arc` and
//!   never written after they are handed out.

mod code;
mod description;
pub mod errors;
mod namespace;
mod tree_path;
mod value;

pub use code::{CodeArena, CodeId, CompiledExpr, ExprFrame, NativeExpr, SharedExpr};
pub use description::{BindingDecl, CodeRef, Description};
pub use errors::{EvalError, EvalResult};
pub use namespace::{Locals, Namespace, SharedNamespace};
pub use tree_path::TreePath;
pub use value::Value;
