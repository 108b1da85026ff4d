/*!
Rendering of vocabulary and formulas to SMT-LIB2 scripts.

The value domain is a fixed-width bit-vector sort, declared once per script as `V`; vocabulary operators become uninterpreted functions over it, with predicates resulting in `Bool`.
Operator names which are not simple SMT-LIB symbols, or which collide with reserved words, are written pipe-quoted.

A script is complete in itself --- declarations and a single assertion followed by `(check-sat)` --- so each query can be given to a fresh procedure context.
*/

use crate::{
    db::vocabulary::{Sort, Vocabulary},
    structures::{formula::Formula, term::Term},
};

/// The script asking whether `antecedent` implies `consequent`, with both universally quantified over the whole vocabulary.
pub fn implication_script(
    vocabulary: &Vocabulary,
    antecedent: &Formula,
    consequent: &Formula,
    width: u32,
) -> String {
    let mut script = String::with_capacity(1024);

    script.push_str(&format!("(define-sort V () (_ BitVec {width}))\n"));

    for operator in vocabulary.operators() {
        script.push_str("(declare-fun ");
        script.push_str(&symbol(&operator.name));
        script.push_str(" (");
        for index in 0..operator.arity {
            if index > 0 {
                script.push(' ');
            }
            script.push('V');
        }
        script.push_str(") ");
        match operator.sort {
            Sort::Value => script.push('V'),

            Sort::Bool => script.push_str("Bool"),
        }
        script.push_str(")\n");
    }

    script.push_str("(assert (and ");
    write_closure(&mut script, vocabulary, antecedent, width);
    script.push_str(" (not ");
    write_closure(&mut script, vocabulary, consequent, width);
    script.push_str(")))\n(check-sat)\n");

    script
}

/// Writes the universal closure of `formula` over every declared variable.
///
/// SMT-LIB does not permit an empty binder list, so with no declared variables the formula is written bare.
fn write_closure(out: &mut String, vocabulary: &Vocabulary, formula: &Formula, width: u32) {
    if vocabulary.variable_count() == 0 {
        write_formula(out, vocabulary, formula, width);
        return;
    }

    out.push_str("(forall (");
    for (index, name) in vocabulary.variable_names().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        out.push('(');
        out.push_str(&symbol(name));
        out.push_str(" V)");
    }
    out.push_str(") ");
    write_formula(out, vocabulary, formula, width);
    out.push(')');
}

fn write_formula(out: &mut String, vocabulary: &Vocabulary, formula: &Formula, width: u32) {
    match formula {
        Formula::Top => out.push_str("true"),

        Formula::Equal(lhs, rhs) => {
            out.push_str("(= ");
            write_term(out, vocabulary, lhs, width);
            out.push(' ');
            write_term(out, vocabulary, rhs, width);
            out.push(')');
        }

        Formula::Predicate { operator, args } => {
            write_application(out, vocabulary, *operator, args, width);
        }

        Formula::And(conjuncts) => {
            if conjuncts.is_empty() {
                out.push_str("true");
                return;
            }

            out.push_str("(and");
            for conjunct in conjuncts {
                out.push(' ');
                write_formula(out, vocabulary, conjunct, width);
            }
            out.push(')');
        }

        Formula::Not(inner) => {
            out.push_str("(not ");
            write_formula(out, vocabulary, inner, width);
            out.push(')');
        }

        Formula::Implies(antecedent, consequent) => {
            out.push_str("(=> ");
            write_formula(out, vocabulary, antecedent, width);
            out.push(' ');
            write_formula(out, vocabulary, consequent, width);
            out.push(')');
        }

        Formula::Equivalent(lhs, rhs) => {
            out.push_str("(= ");
            write_formula(out, vocabulary, lhs, width);
            out.push(' ');
            write_formula(out, vocabulary, rhs, width);
            out.push(')');
        }
    }
}

fn write_term(out: &mut String, vocabulary: &Vocabulary, term: &Term, width: u32) {
    match term {
        Term::Variable(variable) => {
            out.push_str(&symbol(vocabulary.variable_name(*variable)));
        }

        Term::Numeral(numeral) => {
            // Two's complement into the value width, as bit-vector literals are unsigned.
            let modulus = 1_i128 << width;
            let value = (*numeral as i128).rem_euclid(modulus);
            out.push_str(&format!("(_ bv{value} {width})"));
        }

        Term::Apply { operator, args } => {
            write_application(out, vocabulary, *operator, args, width);
        }
    }
}

fn write_application(
    out: &mut String,
    vocabulary: &Vocabulary,
    operator: crate::structures::term::Operator,
    args: &[Term],
    width: u32,
) {
    let name = symbol(&vocabulary.operator(operator).name);

    if args.is_empty() {
        out.push_str(&name);
        return;
    }

    out.push('(');
    out.push_str(&name);
    for arg in args {
        out.push(' ');
        write_term(out, vocabulary, arg, width);
    }
    out.push(')');
}

/// Words of the SMT-LIB core a vocabulary name may collide with.
const RESERVED_WORDS: [&str; 14] = [
    "and", "or", "not", "xor", "ite", "distinct", "true", "false", "forall", "exists", "let",
    "as", "par", "assert",
];

/// A name as an SMT-LIB symbol, pipe-quoted when it is not a plain symbol of the grammar.
fn symbol(name: &str) -> String {
    let simple = |c: char| c.is_ascii_alphanumeric() || "~!@$%^&*_-+=<>.?/".contains(c);

    let plain = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(simple)
        && !RESERVED_WORDS.contains(&name);

    if plain {
        name.to_owned()
    } else {
        format!("|{name}|")
    }
}
