/*!
(The internal representation of) a term over the vocabulary.

Broadly, terms are the value-sorted expressions a candidate relates: variables, numerals, and applications of declared operators.
- 'Internal' variables and operators are indices into the [vocabulary](crate::db::vocabulary).
- 'External' symbols are strings of non-whitespace characters, resolved against the vocabulary when a record is built. \
     Examples: `x`, `hd`, `concat`.

Each (internal) variable is a u32 *v* such that either:
- *v* is 0, or:
- *v - 1* is a variable.

That is, the variables are [0..*m*) for some *m*, and likewise for operators.
This representation allows symbols to be used as the indices of a structure without taking too much space.

# Notes
- The external representation of a symbol is stored in the vocabulary database.
- A numeral denotes a constant of the value domain, interpreted at query time as a bit-vector of the configured width.
*/

use std::collections::HashSet;

/// A variable, as an index into the vocabulary.
pub type Variable = u32;

/// An operator, as an index into the vocabulary.
pub type Operator = u32;

/// A term over the vocabulary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Term {
    /// A declared variable.
    Variable(Variable),

    /// A constant of the value domain.
    Numeral(i64),

    /// An application of a declared operator to value-sorted arguments.
    Apply { operator: Operator, args: Vec<Term> },
}

impl Term {
    /// Extends `collection` with every variable occurring in the term.
    pub fn collect_variables(&self, collection: &mut HashSet<Variable>) {
        match self {
            Term::Variable(v) => {
                collection.insert(*v);
            }

            Term::Numeral(_) => {}

            Term::Apply { args, .. } => {
                for arg in args {
                    arg.collect_variables(collection);
                }
            }
        }
    }
}
