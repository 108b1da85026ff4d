use spec_sieve::{
    oracle::Satisfiability,
    reports::Report,
    types::err::{self, ErrorKind},
};

mod common;
use common::{context_with, Scripted, Uniform};

mod basic {
    use super::*;

    #[test]
    fn worked_example() {
        // Line three builds the same implication as line two, and so falls to it.
        let listing = "x=1 === x=1
valid(x) ==> sat(x)
sat(x) <== valid(x)
";

        let mut ctx = context_with(Scripted::new([
            Satisfiability::Satisfiable,
            Satisfiability::Satisfiable,
            Satisfiability::Unsatisfiable,
        ]));

        let info = ctx.read_candidates(listing.as_bytes()).unwrap();
        assert_eq!(info.candidates_added, 3);

        assert_eq!(ctx.reduce(), Ok(Report::Complete));

        let kept = ctx.kept_lines().collect::<Vec<_>>();
        assert_eq!(kept, vec!["x=1 === x=1", "valid(x) ==> sat(x)"]);

        assert_eq!(ctx.counters.oracle_calls, 3);
        assert_eq!(ctx.counters.redundant, 1);
        assert_eq!(ctx.counters.vacuous, 0);
    }

    #[test]
    fn first_candidate_needs_no_query() {
        let mut ctx = context_with(Uniform::new(Satisfiability::Unsatisfiable));

        ctx.read_candidates("hd(x)=y ==> concat(x,y)=x\n".as_bytes())
            .unwrap();
        assert!(ctx.reduce().is_ok());

        assert_eq!(ctx.kept.len(), 1);
        assert_eq!(ctx.procedure.calls, 0);
    }

    #[test]
    fn empty_listing() {
        let mut ctx = context_with(Uniform::new(Satisfiability::Unsatisfiable));

        let info = ctx.read_candidates("\n\n".as_bytes()).unwrap();
        assert_eq!(info.lines_read, 2);
        assert_eq!(info.candidates_added, 0);

        assert_eq!(ctx.reduce(), Ok(Report::Complete));
        assert!(ctx.kept.is_empty());
    }

    #[test]
    fn metadata_preserved_on_report() {
        let listing = "x=1 === x=1\t17\t4\n";

        let mut ctx = context_with(Uniform::new(Satisfiability::Satisfiable));
        ctx.read_candidates(listing.as_bytes()).unwrap();
        ctx.reduce().unwrap();

        let mut out = Vec::new();
        ctx.write_kept(&mut out).unwrap();
        assert_eq!(out, "x=1 === x=1\t17\t4\n".as_bytes());
    }

    #[test]
    fn reduction_is_once_only() {
        let mut ctx = context_with(Uniform::new(Satisfiability::Satisfiable));

        ctx.read_candidates("x=1 === x=1\n".as_bytes()).unwrap();
        assert!(ctx.reduce().is_ok());

        assert_eq!(ctx.reduce(), Err(ErrorKind::InvalidState));
        assert!(matches!(
            ctx.read_candidates("x=2 === x=2\n".as_bytes()),
            Err(ErrorKind::InvalidState)
        ));
    }
}

mod fatal_errors {
    use super::*;

    #[test]
    fn malformed_line_aborts_the_read() {
        let listing = "x=1 === x=1\nhd(x)=y\n";

        let mut ctx = context_with(Uniform::new(Satisfiability::Satisfiable));
        assert_eq!(
            ctx.read_candidates(listing.as_bytes()),
            Err(ErrorKind::from(err::ParseError::NoRelationMarker))
        );
    }

    #[test]
    fn undeclared_symbol_aborts_the_read() {
        let listing = "tl(x)=y === x=1\n";

        let mut ctx = context_with(Uniform::new(Satisfiability::Satisfiable));
        assert_eq!(
            ctx.read_candidates(listing.as_bytes()),
            Err(ErrorKind::from(err::BuildError::UndeclaredSymbol(
                "tl".to_owned()
            )))
        );
    }

    #[test]
    fn arity_checked() {
        let mut ctx = context_with(Uniform::new(Satisfiability::Satisfiable));
        assert_eq!(
            ctx.read_candidates("concat(x)=y === x=1\n".as_bytes()),
            Err(ErrorKind::from(err::BuildError::ArityMismatch {
                operator: "concat".to_owned(),
                expected: 2,
                found: 1,
            }))
        );
    }

    #[test]
    fn sorts_checked() {
        let mut ctx = context_with(Uniform::new(Satisfiability::Satisfiable));

        // A value application is no atom.
        assert!(matches!(
            ctx.read_candidates("hd(x) === x=1\n".as_bytes()),
            Err(ErrorKind::Build(err::BuildError::SortMismatch(_)))
        ));

        // A predicate is no value.
        let mut ctx = context_with(Uniform::new(Satisfiability::Satisfiable));
        assert!(matches!(
            ctx.read_candidates("valid(x)=y === x=1\n".as_bytes()),
            Err(ErrorKind::Build(err::BuildError::SortMismatch(_)))
        ));
    }

    #[test]
    fn broken_procedure_aborts_the_reduction() {
        let listing = "x=1 === x=1\nx=2 === x=2\n";

        let mut ctx = context_with(common::Broken {});
        ctx.read_candidates(listing.as_bytes()).unwrap();

        assert!(matches!(
            ctx.reduce(),
            Err(ErrorKind::Oracle(err::OracleError::ProcedureUnavailable(_)))
        ));
    }
}
