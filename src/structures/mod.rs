//! Structures, in a theoretical sense.
//!
//! - [Terms](crate::structures::term) over the declared vocabulary.
//! - [Formulas](crate::structures::formula), built from equality and predicate atoms with the usual connectives.
//! - [Relations](crate::structures::relation), the candidate records a reduction consumes.

pub mod formula;
pub mod relation;
pub mod term;
