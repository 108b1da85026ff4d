//! End-to-end reductions against a real z3 binary.
//!
//! All tests are ignored by default; run them with `cargo test -- --ignored` on a machine with z3 on the PATH.

use spec_sieve::{config::Config, context::Context, reports::Report};

mod common;
use common::vocabulary;

#[test]
#[ignore] // Only run if z3 is installed.
fn worked_example() {
    let listing = "x=1 === x=1
valid(x) ==> sat(x)
sat(x) <== valid(x)
";

    let mut ctx = Context::from_config(Config::default(), vocabulary());

    ctx.read_candidates(listing.as_bytes()).unwrap();
    assert_eq!(ctx.reduce(), Ok(Report::Complete));

    // Lines two and three build the same implication, and so the later falls to the earlier.
    let kept = ctx.kept_lines().collect::<Vec<_>>();
    assert_eq!(kept, vec!["x=1 === x=1", "valid(x) ==> sat(x)"]);
}

#[test]
#[ignore] // Only run if z3 is installed.
fn guarded_weakening() {
    // The unguarded relation implies its guarded form.
    let listing = "hd(x)=y === cons(y,x)=x
hd(x)=y === cons(y,x)=x | valid(x)
";

    let mut ctx = Context::from_config(Config::default(), vocabulary());

    ctx.read_candidates(listing.as_bytes()).unwrap();
    assert_eq!(ctx.reduce(), Ok(Report::Complete));

    let kept = ctx.kept_lines().collect::<Vec<_>>();
    assert_eq!(kept, vec!["hd(x)=y === cons(y,x)=x"]);
}

#[test]
#[ignore] // Only run if z3 is installed.
fn independent_relations_survive() {
    let listing = "hd(concat(x,y))=hd(x) === concat(x,y)=x
cons(x,y)=cons(y,x) === x=y
";

    let mut ctx = Context::from_config(Config::default(), vocabulary());

    ctx.read_candidates(listing.as_bytes()).unwrap();
    assert_eq!(ctx.reduce(), Ok(Report::Complete));

    assert_eq!(ctx.kept.len(), 2);
}
