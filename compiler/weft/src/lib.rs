//! Weft - runtime object-model synthesis for declarative UI definitions.
//!
//! A module loader hands Weft what the declarative-language compiler
//! produced for one definition: a description tree, the compiled expression
//! units it references, and the module's captured globals. Weft turns every
//! binding into a callable exactly once and derives a new declarative type
//! whose description history replays those bindings for every instance.
//!
//! ```ignore
//! use weft::{derive_declarative_type, DeriveRequest};
//!
//! let ty = derive_declarative_type(&DeriveRequest {
//!     name: "MainWindow",
//!     base: &declarative_root,
//!     description: &description,
//!     code: &arena,
//!     namespace: &globals,
//! })?;
//! ```
//!
//! # Crates
//!
//! - `weft_ir`: description trees, code units, namespaces, values
//! - `weft_bind`: the binding synthesizer
//! - `weft_types`: declarative type descriptors and the type factory
//!
//! # Tracing
//!
//! Call [`init_tracing`] once at startup. Output is enabled by `RUST_LOG`
//! (e.g. `RUST_LOG=weft_bind=trace`); set `WEFT_LOG_TREE=1` for indented
//! span trees instead of flat lines.

mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with, TracingConfig};

pub use weft_ir::errors::{missing_argument, read_only_binding, undefined_variable};
pub use weft_ir::{
    BindingDecl, CodeArena, CodeId, CodeRef, CompiledExpr, Description, EvalError, EvalResult,
    ExprFrame, Locals, Namespace, NativeExpr, SharedExpr, SharedNamespace, TreePath, Value,
};

pub use weft_bind::{
    synthesize, BindingCode, BindingFunc, ExprFunction, StructuralError, SynthesizedBinding,
    SynthesizedNode, Walk,
};

pub use weft_types::{
    ancestors, derive_declarative_type, is_proper_subtype, qualified_name, DeclarativeBase,
    DeclarativeRoot, DeclarativeType, DeriveError, DeriveRequest, DescriptionHistory,
    HistoryEntry, IncompatibleBaseError, PlainType, RuntimeType, TypeAttributes, TypeRef,
};
