/*!
Candidate relations --- the records a reduction consumes.

A candidate pairs the original [record](Record) with the [formula](crate::structures::formula) it builds to, along with the cached side information the [vacuity filter](crate::procedures::filter) reads.

The three relation markers and their implication directions are fixed by [RelationKind]: the kind is identified once, during parsing, and every later use is over the closed variant type rather than the marker text.
*/

use std::collections::HashSet;

use crate::structures::{formula::Formula, term::Variable};

/// How the two expression groups of a candidate relate.
///
/// The marker `<==` names the right-hand group as the antecedent, matching the ordinary right-to-left reading of the arrow.
/// Several historical variants of this logic disagreed subtly, which is why the mapping lives on the variant type alone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RelationKind {
    /// `===` --- the groups are equivalent.
    Biconditional,

    /// `==>` --- the left group implies the right group.
    Forward,

    /// `<==` --- the right group implies the left group.
    Backward,
}

impl RelationKind {
    /// The marker of the kind, as it appears in a candidate line.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Biconditional => "===",

            Self::Forward => "==>",

            Self::Backward => "<==",
        }
    }

    /// Identifies the kind of a relation text, if a marker is present.
    ///
    /// `===` is examined first, as `==` prefixes both remaining markers.
    pub fn identify(text: &str) -> Option<RelationKind> {
        if text.contains(Self::Biconditional.marker()) {
            Some(Self::Biconditional)
        } else if text.contains(Self::Backward.marker()) {
            Some(Self::Backward)
        } else if text.contains(Self::Forward.marker()) {
            Some(Self::Forward)
        } else {
            None
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// One input line, immutable, keyed by its original content.
///
/// Trailing metadata after a tab is ignored by the logic but preserved here --- the record, never a rewritten formula, is what a reduction reports.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    line: String,
}

impl Record {
    pub fn new(line: impl Into<String>) -> Self {
        Record { line: line.into() }
    }

    /// The original line.
    pub fn line(&self) -> &str {
        &self.line
    }
}

/// A candidate relation: the record together with its built formula and cached side information.
#[derive(Clone, Debug)]
pub struct Candidate {
    /// The record the candidate was built from.
    pub record: Record,

    /// The kind of the relation.
    pub kind: RelationKind,

    /// The formula of the candidate, of the shape `Implies(guard, relation)`.
    pub formula: Formula,

    /// Variables of the left group, post-simplification.
    pub left_variables: HashSet<Variable>,

    /// Variables of the right group, post-simplification.
    pub right_variables: HashSet<Variable>,

    /// Whether the left group contains the literal constant truth.
    pub left_truth: bool,

    /// Whether the right group contains the literal constant truth.
    pub right_truth: bool,
}
