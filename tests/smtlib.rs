use spec_sieve::{builder::candidate_from_line, oracle::smtlib};

mod common;
use common::vocabulary;

mod scripts {
    use super::*;

    #[test]
    fn whole_vocabulary_quantification() {
        let vocabulary = vocabulary();

        // The formulas mention x alone; the closures still bind every declared variable.
        let antecedent = candidate_from_line("x=1 === x=1", &vocabulary).unwrap();
        let consequent = candidate_from_line("x=2 === x=2", &vocabulary).unwrap();

        let script = smtlib::implication_script(
            &vocabulary,
            &antecedent.formula,
            &consequent.formula,
            8,
        );

        let binder = "(forall ((x V) (y V) (z V) (w V))";
        assert_eq!(script.matches(binder).count(), 2);
        assert!(script.contains("(not (forall"));
        assert!(script.ends_with("(check-sat)\n"));
    }

    #[test]
    fn declarations_cover_the_vocabulary() {
        let vocabulary = vocabulary();

        let candidate = candidate_from_line("x=1 === x=1", &vocabulary).unwrap();
        let script =
            smtlib::implication_script(&vocabulary, &candidate.formula, &candidate.formula, 8);

        assert!(script.contains("(define-sort V () (_ BitVec 8))"));
        assert!(script.contains("(declare-fun valid (V) Bool)"));
        assert!(script.contains("(declare-fun sat (V) Bool)"));
        assert!(script.contains("(declare-fun hd (V) V)"));
        assert!(script.contains("(declare-fun concat (V V) V)"));
    }

    #[test]
    fn formula_shape() {
        let vocabulary = vocabulary();

        let candidate =
            candidate_from_line("hd(x)=y ==> concat(x,y)=x | valid(x)", &vocabulary).unwrap();
        let script =
            smtlib::implication_script(&vocabulary, &candidate.formula, &candidate.formula, 8);

        // Implies(guard, Implies(left, right)), with the guard the antecedent.
        assert!(script.contains("(=> (valid x) (=> (= (hd x) y) (= (concat x y) x)))"));
    }

    #[test]
    fn numerals_as_bit_vectors() {
        let vocabulary = vocabulary();

        let candidate = candidate_from_line("x=1 === x=-1", &vocabulary).unwrap();
        let script =
            smtlib::implication_script(&vocabulary, &candidate.formula, &candidate.formula, 8);

        assert!(script.contains("(_ bv1 8)"));
        assert!(script.contains("(_ bv255 8)"));
    }
}
