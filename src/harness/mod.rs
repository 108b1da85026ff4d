//! The upstream toolkit a reduction sits between.
//!
//! A reduction consumes candidates mined by an external induction engine, and the engine in turn consumes observations of the benchmark operations.
//! This module carries the two small pieces of tooling which feed the engine:
//!
//! - [facts](crate::harness::facts) --- a harness which samples well-typed inputs for registered benchmark operations and records `(inputs…, output)` rows.
//! - [signature](crate::harness::signature) --- transformations of the engine's configuration trees, notably enumeration of the size-k sub-signatures of a declared signature.
//!
//! The engine itself is an opaque collaborator and is not modeled.

pub mod facts;
pub mod generators;
pub mod signature;
