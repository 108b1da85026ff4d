/*!
Tools for building candidates in a context.

# Basic methods

The library has two basic methods for building a context:
- [candidate_from_line], to build a single candidate from its textual representation.
- [read_candidates](crate::context::GenericContext::read_candidates), to read a listing of candidates into a context.

Every symbol of a line is resolved against the [vocabulary](crate::db::vocabulary), which must be complete before any record is processed: an undeclared symbol is a fatal build error, as the input is assumed curated.
Likewise, a line which fails to parse is fatal --- no candidate of a listing is skipped.

Each record builds to exactly one formula, deterministically:
- `left`, `right`, and the optional `guard` are conjunctions of their group atoms, with a missing guard the literal truth.
- The relation formula follows the [kind](crate::structures::relation::RelationKind): `===` is a biconditional, `==>` an implication of the right group by the left, and `<==` an implication of the left group by the right --- the right-hand group is the antecedent.
- The formula of the candidate is `Implies(guard, relation)`.

# Example

```rust
# use spec_sieve::builder::candidate_from_line;
# use spec_sieve::db::vocabulary::{Sort, Vocabulary};
# use spec_sieve::structures::relation::RelationKind;
let mut vocabulary = Vocabulary::default();
vocabulary.declare_variable("x").unwrap();
vocabulary.declare_variable("y").unwrap();
vocabulary.declare_operator("hd", 1, Sort::Value).unwrap();

let candidate = candidate_from_line("hd(x)=y ==> x=y", &vocabulary).unwrap();
assert_eq!(candidate.kind, RelationKind::Forward);
assert!(candidate.left_variables.contains(&0));

assert!(candidate_from_line("tl(x)=y ==> x=y", &vocabulary).is_err());
```
*/

use std::io::BufRead;

use crate::{
    context::{ContextState, GenericContext},
    db::vocabulary::{Sort, Symbol, Vocabulary},
    misc::log::targets::{self},
    oracle::DecisionProcedure,
    structures::{
        formula::Formula,
        relation::{Candidate, Record, RelationKind},
        term::Term,
    },
    types::err::{self, ErrorKind},
};

pub mod line;
use line::{ParsedAtom, ParsedTerm};

/// Details of a read candidate listing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParserInfo {
    /// A count of lines read, blank lines included.
    pub lines_read: usize,

    /// A count of candidates added to the context.
    pub candidates_added: usize,
}

/// Builds the term of a parsed expression, returning the term with its sort.
fn build_term(parsed: &ParsedTerm, vocabulary: &Vocabulary) -> Result<(Term, Sort), err::BuildError> {
    match parsed {
        ParsedTerm::Numeral(numeral) => Ok((Term::Numeral(*numeral), Sort::Value)),

        ParsedTerm::Symbol(name) => {
            if name == "true" {
                // Truth is an atom of the surface grammar, not a value.
                return Err(err::BuildError::SortMismatch(name.clone()));
            }

            match vocabulary.resolve(name) {
                None => Err(err::BuildError::UndeclaredSymbol(name.clone())),

                Some(Symbol::Variable(variable)) => Ok((Term::Variable(variable), Sort::Value)),

                Some(Symbol::Operator(operator)) => {
                    let details = vocabulary.operator(operator);
                    match details.arity {
                        0 => Ok((
                            Term::Apply {
                                operator,
                                args: Vec::default(),
                            },
                            details.sort,
                        )),

                        expected => Err(err::BuildError::ArityMismatch {
                            operator: name.clone(),
                            expected,
                            found: 0,
                        }),
                    }
                }
            }
        }

        ParsedTerm::Call(name, parsed_args) => match vocabulary.resolve(name) {
            None => Err(err::BuildError::UndeclaredSymbol(name.clone())),

            Some(Symbol::Variable(_)) => Err(err::BuildError::SortMismatch(name.clone())),

            Some(Symbol::Operator(operator)) => {
                let details = vocabulary.operator(operator);

                if details.arity != parsed_args.len() {
                    return Err(err::BuildError::ArityMismatch {
                        operator: name.clone(),
                        expected: details.arity,
                        found: parsed_args.len(),
                    });
                }

                let mut args = Vec::with_capacity(parsed_args.len());
                for parsed_arg in parsed_args {
                    match build_term(parsed_arg, vocabulary)? {
                        (term, Sort::Value) => args.push(term),

                        (_, Sort::Bool) => {
                            return Err(err::BuildError::SortMismatch(name.clone()))
                        }
                    }
                }

                Ok((Term::Apply { operator, args }, details.sort))
            }
        },
    }
}

/// Builds the formula of a parsed atom.
fn build_atom(parsed: &ParsedAtom, vocabulary: &Vocabulary) -> Result<Formula, err::BuildError> {
    match parsed {
        ParsedAtom::Truth => Ok(Formula::Top),

        ParsedAtom::Plain(expr) => match build_term(expr, vocabulary)? {
            (Term::Apply { operator, args }, Sort::Bool) => {
                Ok(Formula::Predicate { operator, args })
            }

            _ => {
                let name = match expr {
                    ParsedTerm::Symbol(name) | ParsedTerm::Call(name, _) => name.clone(),

                    ParsedTerm::Numeral(numeral) => numeral.to_string(),
                };
                Err(err::BuildError::SortMismatch(name))
            }
        },

        ParsedAtom::Equality(lhs, rhs) => {
            let (lhs_term, lhs_sort) = build_term(lhs, vocabulary)?;
            let (rhs_term, rhs_sort) = build_term(rhs, vocabulary)?;

            match (lhs_sort, rhs_sort) {
                (Sort::Value, Sort::Value) => Ok(Formula::Equal(lhs_term, rhs_term)),

                _ => Err(err::BuildError::SortMismatch("=".to_owned())),
            }
        }
    }
}

/// Builds an expression-group text as a conjunction, noting whether the group contains the literal truth.
fn build_group(text: &str, vocabulary: &Vocabulary) -> Result<(Formula, bool), ErrorKind> {
    let atoms = line::parse_group(text)?;

    let mentions_truth = atoms.iter().any(|atom| matches!(atom, ParsedAtom::Truth));

    let mut conjuncts = Vec::with_capacity(atoms.len());
    for atom in &atoms {
        conjuncts.push(build_atom(atom, vocabulary)?);
    }

    Ok((Formula::conjunction(conjuncts), mentions_truth))
}

/// Builds the candidate of a line against the vocabulary.
pub fn candidate_from_line(raw: &str, vocabulary: &Vocabulary) -> Result<Candidate, ErrorKind> {
    let split = line::split_line(raw)?;

    let (left, left_truth) = build_group(split.left, vocabulary)?;
    let (right, right_truth) = build_group(split.right, vocabulary)?;

    let guard = match split.guard {
        Some(text) => build_group(text, vocabulary)?.0,

        None => Formula::Top,
    };

    let relation = match split.kind {
        RelationKind::Biconditional => {
            Formula::Equivalent(Box::new(left.clone()), Box::new(right.clone()))
        }

        RelationKind::Forward => {
            Formula::Implies(Box::new(left.clone()), Box::new(right.clone()))
        }

        // The right-hand group is the antecedent.
        RelationKind::Backward => {
            Formula::Implies(Box::new(right.clone()), Box::new(left.clone()))
        }
    };

    let formula = Formula::Implies(Box::new(guard), Box::new(relation));

    // Variable sets are taken post-simplification, so trivial atoms contribute nothing.
    let left_variables = left.simplified().variables();
    let right_variables = right.simplified().variables();

    Ok(Candidate {
        record: Record::new(raw),
        kind: split.kind,
        formula,
        left_variables,
        right_variables,
        left_truth,
        right_truth,
    })
}

impl<P: DecisionProcedure> GenericContext<P> {
    /// Reads a candidate listing into the context, one relation per line.
    ///
    /// Blank lines are skipped; any malformed line is fatal for the whole read, and the context should be discarded.
    ///
    /// ```rust
    /// # use spec_sieve::config::Config;
    /// # use spec_sieve::context::Context;
    /// # use spec_sieve::db::vocabulary::{Sort, Vocabulary};
    /// let mut vocabulary = Vocabulary::default();
    /// vocabulary.declare_variable("x").unwrap();
    /// vocabulary.declare_operator("valid", 1, Sort::Bool).unwrap();
    /// vocabulary.declare_operator("sat", 1, Sort::Bool).unwrap();
    ///
    /// let mut the_context = Context::from_config(Config::default(), vocabulary);
    ///
    /// let info = the_context.read_candidates("valid(x) ==> sat(x)\n".as_bytes()).unwrap();
    /// assert_eq!(info.candidates_added, 1);
    /// ```
    pub fn read_candidates(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {
                self.state = ContextState::Input;
            }

            _ => return Err(ErrorKind::InvalidState),
        }

        let mut info = ParserInfo::default();
        let mut buffer = String::with_capacity(256);

        loop {
            buffer.clear();

            match reader.read_line(&mut buffer) {
                Ok(0) => break,

                Ok(_) => info.lines_read += 1,

                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(info.lines_read))),
            }

            let raw = buffer.trim_end_matches(['\n', '\r']);
            if raw.trim().is_empty() {
                continue;
            }

            match candidate_from_line(raw, &self.vocabulary) {
                Ok(candidate) => {
                    log::trace!(target: targets::BUILD, "Built: {raw}");
                    self.candidates.push(candidate);
                    info.candidates_added += 1;
                }

                Err(e) => {
                    log::warn!(
                        target: targets::PARSE,
                        "Failure at line {}: {e:?}",
                        info.lines_read
                    );
                    return Err(e);
                }
            }
        }

        Ok(info)
    }
}
