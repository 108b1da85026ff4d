use spec_sieve::{oracle::Satisfiability, reports::Report};

mod common;
use common::{context_with, Scripted, Uniform};

mod conservativity {
    use super::*;

    #[test]
    fn unknown_verdicts_reduce_nothing() {
        // With every query exhausting its budget the output is every non-vacuous record, in order.
        let listing = "x=1 === x=1
valid(x) ==> sat(x)
sat(x) <== valid(x)
hd(x)=y === cons(y,x)=w
";

        let mut ctx = context_with(Uniform::new(Satisfiability::Unknown));
        ctx.read_candidates(listing.as_bytes()).unwrap();
        assert_eq!(ctx.reduce(), Ok(Report::Complete));

        let kept = ctx.kept_lines().collect::<Vec<_>>();
        assert_eq!(
            kept,
            vec![
                "x=1 === x=1",
                "valid(x) ==> sat(x)",
                "sat(x) <== valid(x)",
                "hd(x)=y === cons(y,x)=w",
            ]
        );

        // Each candidate scanned the whole prefix: 0 + 1 + 2 + 3.
        assert_eq!(ctx.counters.oracle_calls, 6);
        assert_eq!(ctx.counters.unknown_verdicts, 6);
        assert_eq!(ctx.counters.redundant, 0);
    }

    #[test]
    fn invalid_verdicts_reduce_nothing() {
        let listing = "x=1 === x=1\nx=2 === x=2\nx=3 === x=3\n";

        let mut ctx = context_with(Uniform::new(Satisfiability::Satisfiable));
        ctx.read_candidates(listing.as_bytes()).unwrap();
        ctx.reduce().unwrap();

        assert_eq!(ctx.kept.len(), 3);
        assert_eq!(ctx.counters.redundant, 0);
    }
}

mod vacuity {
    use super::*;

    #[test]
    fn vacuous_records_cost_nothing() {
        // The middle record relates disjoint variable sets: discarded, and never queried ---
        // even against a procedure which would prove anything redundant.
        let listing = "x=1 === x=1\nx=1 ==> y=2\nvalid(z) ==> sat(z)\n";

        let mut ctx = context_with(Uniform::new(Satisfiability::Unknown));
        ctx.read_candidates(listing.as_bytes()).unwrap();
        ctx.reduce().unwrap();

        let kept = ctx.kept_lines().collect::<Vec<_>>();
        assert_eq!(kept, vec!["x=1 === x=1", "valid(z) ==> sat(z)"]);

        assert_eq!(ctx.counters.vacuous, 1);
        // One query: the third candidate against the first. The vacuous record made none.
        assert_eq!(ctx.procedure.calls, 1);
    }

    #[test]
    fn literal_truth_exempts_a_side() {
        let listing = "true ==> y=2\n";

        let mut ctx = context_with(Uniform::new(Satisfiability::Unknown));
        ctx.read_candidates(listing.as_bytes()).unwrap();
        ctx.reduce().unwrap();

        assert_eq!(ctx.counters.vacuous, 0);
        assert_eq!(ctx.kept.len(), 1);
    }
}

mod order {
    use super::*;

    /// Two textually distinct lines building the same implication.
    const A: &str = "valid(x) ==> sat(x)";
    const B: &str = "sat(x) <== valid(x)";

    #[test]
    fn first_of_a_mutually_implying_pair_survives() {
        let mut ctx = context_with(Uniform::new(Satisfiability::Unsatisfiable));
        ctx.read_candidates(format!("{A}\n{B}\n").as_bytes()).unwrap();
        ctx.reduce().unwrap();
        assert_eq!(ctx.kept_lines().collect::<Vec<_>>(), vec![A]);

        let mut ctx = context_with(Uniform::new(Satisfiability::Unsatisfiable));
        ctx.read_candidates(format!("{B}\n{A}\n").as_bytes()).unwrap();
        ctx.reduce().unwrap();
        assert_eq!(ctx.kept_lines().collect::<Vec<_>>(), vec![B]);
    }

    #[test]
    fn scan_short_circuits_on_the_first_subsumer() {
        // Three kept candidates, then one the first kept formula already implies:
        // the scan stops there, with no search for a better subsumer.
        let listing = "x=1 === x=1\nx=2 === x=2\nx=3 === x=3\nx=4 === x=4\n";

        let mut ctx = context_with(Scripted::new([
            // Candidates two and three survive their scans.
            Satisfiability::Satisfiable,
            Satisfiability::Satisfiable,
            Satisfiability::Satisfiable,
            // Candidate four falls to the first kept formula.
            Satisfiability::Unsatisfiable,
        ]));

        ctx.read_candidates(listing.as_bytes()).unwrap();
        ctx.reduce().unwrap();

        assert_eq!(ctx.kept.len(), 3);
        assert_eq!(ctx.procedure.calls, 4);
    }
}

mod stability {
    use super::*;

    #[test]
    fn rerunning_on_the_output_changes_nothing() {
        let listing = "x=1 === x=1\nvalid(x) ==> sat(x)\nsat(x) <== valid(x)\n";

        let mut first = context_with(Scripted::new([
            Satisfiability::Satisfiable,
            Satisfiability::Satisfiable,
            Satisfiability::Unsatisfiable,
        ]));
        first.read_candidates(listing.as_bytes()).unwrap();
        first.reduce().unwrap();

        let mut output = Vec::new();
        first.write_kept(&mut output).unwrap();

        // A consistent oracle answers the surviving pair's single query as before.
        let mut second = context_with(Scripted::new([Satisfiability::Satisfiable]));
        second.read_candidates(output.as_slice()).unwrap();
        second.reduce().unwrap();

        let mut reoutput = Vec::new();
        second.write_kept(&mut reoutput).unwrap();

        assert_eq!(output, reoutput);
    }
}
