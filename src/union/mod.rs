//! Polymorphic field decoder
//!
//! Resolves a JSON value declared as "one of several shapes" into exactly
//! one typed alternative.
//!
//! # Overview
//!
//! The upstream API sends some references either as a bare identifier
//! string or as the fully expanded object, with no discriminant tag. Each
//! such field declares an ordered list of alternatives; decoding walks the
//! list and keeps the first alternative whose predicate and construction
//! both succeed. Exhausting the list yields
//! [`Error::NoMatchingAlternative`](crate::Error::NoMatchingAlternative).
//!
//! Typed unions are declared with [`union_field!`](crate::union_field);
//! runtime-defined unions go through the same engine via
//! [`decode_with`] and the [`catalog`](crate::catalog) module.

mod decoder;
mod macros;
mod types;

pub use decoder::{
    decode, decode_str, decode_with, string_value, union_schema, validate, validate_with,
};
pub use types::{Alternative, AlternativeKind, UnionField, Variant};
