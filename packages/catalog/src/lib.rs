//! # Collage Catalog
//!
//! Static registry of element-type descriptors: the set of block types a
//! document may contain, what each one's properties default to, which of
//! those properties are editable (and through which kind of form field),
//! and whether the type may hold children.
//!
//! The catalog is built once at startup and passed by reference into the
//! model and editor layers. It is never mutated afterwards: looking up a
//! tag is a pure read, and an unregistered tag surfaces as [`UnknownType`].

mod catalog;
mod descriptor;
mod error;
mod value;

pub use catalog::Catalog;
pub use descriptor::{ElementDescriptor, FieldKind, FieldSpec};
pub use error::UnknownType;
pub use value::PropValue;
