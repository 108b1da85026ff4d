/*!
The vacuity filter.

A candidate whose two sides share no vocabulary variable relates disjoint states, and so carries no falsifiable content for the purposes of a reduction.
Such a candidate is discarded before any oracle work --- it never enters the kept database and never costs a query.

The sole exemption is the literal constant truth: a side which contains `true` exempts the candidate, whatever the variable sets.

The check is syntactic and conservative.
It can both over-exclude (a semantically relevant candidate whose variable sets happen to be disjoint in surface form) and under-exclude.
This is accepted behavior --- variable sets are taken from the locally [simplified](crate::structures::formula::Formula::simplified) sides, with no oracle assistance.
*/

use crate::structures::relation::Candidate;

/// Whether the candidate is vacuously irrelevant.
pub fn vacuous(candidate: &Candidate) -> bool {
    if candidate.left_truth || candidate.right_truth {
        return false;
    }

    candidate
        .left_variables
        .is_disjoint(&candidate.right_variables)
}

#[cfg(test)]
mod filter_tests {
    use super::*;
    use crate::{
        builder::candidate_from_line,
        db::vocabulary::{Sort, Vocabulary},
    };

    fn vocabulary() -> Vocabulary {
        let mut vocabulary = Vocabulary::default();
        for name in ["x", "y", "z", "w"] {
            vocabulary.declare_variable(name).unwrap();
        }
        vocabulary.declare_operator("hd", 1, Sort::Value).unwrap();
        vocabulary
    }

    #[test]
    fn disjoint_sides() {
        let candidate = candidate_from_line("x=1 === y=2", &vocabulary()).unwrap();
        assert!(vacuous(&candidate));
    }

    #[test]
    fn shared_variable() {
        let candidate = candidate_from_line("x=1 === x=1", &vocabulary()).unwrap();
        assert!(!vacuous(&candidate));
    }

    #[test]
    fn truth_exempts() {
        let candidate = candidate_from_line("true === y=2", &vocabulary()).unwrap();
        assert!(!vacuous(&candidate));
    }

    #[test]
    fn trivial_equalities_contribute_no_variables() {
        // x=x simplifies away, so the left side has no variables at all.
        let candidate = candidate_from_line("x=x === y=2", &vocabulary()).unwrap();
        assert!(vacuous(&candidate));
    }
}
