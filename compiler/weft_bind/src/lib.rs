//! Weft Bind - binding synthesis for declarative description trees.
//!
//! Walks a [`weft_ir::Description`] once and turns every binding's compiled
//! unit(s) into callables closed over the module's captured namespace. The
//! result is a new [`SynthesizedNode`] tree; the input is never mutated.
//!
//! # Binding shapes
//!
//! - `Read`: one unit, evaluated whenever the bound attribute is read.
//! - `Delegate`: a subscription unit producing the value and an update unit
//!   consuming values written back. Both compile to one [`BindingFunc`]
//!   carrying `primary` and `update`.
//!
//! # Tracing
//!
//! `synthesize` opens a `debug` span per walk and emits a `trace` event per
//! binding. Enable with `RUST_LOG=weft_bind=trace`.

mod errors;
mod func;
mod stack;
mod synth;
mod tree;

pub use errors::StructuralError;
pub use func::{BindingFunc, ExprFunction};
pub use synth::{synthesize, BindingCode};
pub use tree::{SynthesizedBinding, SynthesizedNode, Walk};
