/*!
Formulas, built once per candidate record and immutable afterwards.

A formula is a tree of equality and predicate atoms under the usual connectives.
Universal quantification is not stored --- the [oracle](crate::oracle) quantifies over the entire declared vocabulary at query time.

The canonical use is through a [candidate](crate::structures::relation::Candidate), whose formula has the shape `Implies(guard, relation)`.

```rust
# use spec_sieve::structures::formula::Formula;
# use spec_sieve::structures::term::Term;
let left = Formula::Equal(Term::Variable(0), Term::Numeral(1));
let right = Formula::Equal(Term::Variable(0), Term::Variable(0));

assert_eq!(right.simplified(), Formula::Top);
assert!(left.variables().contains(&0));
```
*/

use std::collections::HashSet;

use crate::structures::term::{Operator, Term, Variable};

/// A formula over equality atoms, predicate atoms, and connectives.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Formula {
    /// The literal constant truth.
    Top,

    /// Structural equality of two value-sorted terms.
    Equal(Term, Term),

    /// An application of a boolean-sorted operator.
    Predicate { operator: Operator, args: Vec<Term> },

    /// Conjunction.
    And(Vec<Formula>),

    /// Negation.
    Not(Box<Formula>),

    /// Implication, antecedent first.
    Implies(Box<Formula>, Box<Formula>),

    /// Biconditional.
    Equivalent(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// The conjunction of `conjuncts`, collapsing the empty and singleton cases.
    pub fn conjunction(mut conjuncts: Vec<Formula>) -> Formula {
        match conjuncts.len() {
            0 => Formula::Top,

            1 => conjuncts.pop().unwrap_or(Formula::Top),

            _ => Formula::And(conjuncts),
        }
    }

    /// The set of variables occurring in the formula.
    pub fn variables(&self) -> HashSet<Variable> {
        let mut collection = HashSet::default();
        self.collect_variables(&mut collection);
        collection
    }

    fn collect_variables(&self, collection: &mut HashSet<Variable>) {
        match self {
            Formula::Top => {}

            Formula::Equal(lhs, rhs) => {
                lhs.collect_variables(collection);
                rhs.collect_variables(collection);
            }

            Formula::Predicate { args, .. } => {
                for arg in args {
                    arg.collect_variables(collection);
                }
            }

            Formula::And(conjuncts) => {
                for conjunct in conjuncts {
                    conjunct.collect_variables(collection);
                }
            }

            Formula::Not(inner) => inner.collect_variables(collection),

            Formula::Implies(antecedent, consequent) => {
                antecedent.collect_variables(collection);
                consequent.collect_variables(collection);
            }

            Formula::Equivalent(lhs, rhs) => {
                lhs.collect_variables(collection);
                rhs.collect_variables(collection);
            }
        }
    }

    /// A locally simplified copy of the formula: trivial equalities collapse to [Top](Formula::Top) and conjunctions are flattened with truth removed.
    ///
    /// Variable sets for the vacuity filter are taken from the simplified formula, so `x=x` contributes no variables.
    /// The simplification is syntactic --- no oracle assistance.
    pub fn simplified(&self) -> Formula {
        match self {
            Formula::Top => Formula::Top,

            Formula::Equal(lhs, rhs) => {
                if lhs == rhs {
                    Formula::Top
                } else {
                    self.clone()
                }
            }

            Formula::Predicate { .. } => self.clone(),

            Formula::And(conjuncts) => {
                let mut flattened = Vec::with_capacity(conjuncts.len());
                for conjunct in conjuncts {
                    match conjunct.simplified() {
                        Formula::Top => {}

                        Formula::And(inner) => flattened.extend(inner),

                        other => flattened.push(other),
                    }
                }
                Formula::conjunction(flattened)
            }

            Formula::Not(inner) => Formula::Not(Box::new(inner.simplified())),

            Formula::Implies(antecedent, consequent) => Formula::Implies(
                Box::new(antecedent.simplified()),
                Box::new(consequent.simplified()),
            ),

            Formula::Equivalent(lhs, rhs) => {
                Formula::Equivalent(Box::new(lhs.simplified()), Box::new(rhs.simplified()))
            }
        }
    }
}

#[cfg(test)]
mod formula_tests {
    use super::*;

    #[test]
    fn trivial_equality() {
        let formula = Formula::Equal(Term::Variable(3), Term::Variable(3));
        assert_eq!(formula.simplified(), Formula::Top);
        assert!(formula.simplified().variables().is_empty());
    }

    #[test]
    fn conjunction_flattening() {
        let formula = Formula::And(vec![
            Formula::Top,
            Formula::And(vec![
                Formula::Equal(Term::Variable(0), Term::Numeral(1)),
                Formula::Top,
            ]),
        ]);

        assert_eq!(
            formula.simplified(),
            Formula::Equal(Term::Variable(0), Term::Numeral(1))
        );
    }

    #[test]
    fn variables_of_nested_applications() {
        let term = Term::Apply {
            operator: 0,
            args: vec![
                Term::Apply {
                    operator: 1,
                    args: vec![Term::Variable(2)],
                },
                Term::Variable(5),
            ],
        };
        let formula = Formula::Equal(term, Term::Numeral(0));

        let variables = formula.variables();
        assert!(variables.contains(&2));
        assert!(variables.contains(&5));
        assert_eq!(variables.len(), 2);
    }
}
