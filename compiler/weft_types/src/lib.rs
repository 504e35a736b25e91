//! Weft Types - runtime type descriptors for declarative definitions.
//!
//! A declarative definition becomes a [`DeclarativeType`]: a value naming its
//! base, carrying module/doc attributes, and holding the ordered
//! [`DescriptionHistory`] of every description contributed by it and its
//! ancestors. Subclassing is modelled with trait dispatch rather than
//! nominal inheritance:
//!
//! - [`RuntimeType`]: anything that can appear as a base.
//! - [`DeclarativeBase`]: the capability a base needs for declarative
//!   derivation (instance population itself is the base's concern).
//!
//! [`derive_declarative_type`] validates the base, synthesizes the bindings
//! of the description via `weft_bind`, and returns the new type. Nothing is
//! registered globally; the caller owns the result.

mod declarative;
mod errors;
mod factory;
mod history;
mod ty;

pub use declarative::{DeclarativeType, TypeAttributes};
pub use errors::{DeriveError, IncompatibleBaseError};
pub use factory::{derive_declarative_type, DeriveRequest};
pub use history::{DescriptionHistory, HistoryEntry};
pub use ty::{
    ancestors, is_proper_subtype, qualified_name, DeclarativeBase, DeclarativeRoot, PlainType,
    RuntimeType, TypeRef,
};
