//! A library for reducing sets of mined candidate specifications to non-redundant subsets.
//!
//! spec_sieve takes a listing of candidate relations between benchmark-operation expressions --- equivalences and implications proposed by some upstream induction engine --- and computes a subset such that every discarded candidate is provably implied by some retained one.
//! An external decision procedure serves as the validity oracle, queried under a per-call time budget.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! A context is built from a [configuration](crate::config) together with a [vocabulary](crate::db::vocabulary) --- the fixed table of variable and operator symbols every candidate must reference exclusively.
//! Candidate relations are added through their [textual representation](crate::builder), and a call to [reduce](crate::procedures::reduce) runs the greedy subsumption pass.
//!
//! Internally, and at a high level, a reduction is viewed in terms of a handful of databases and procedures:
//! - The vocabulary is stored in a [vocabulary database](crate::db::vocabulary).
//! - Candidates which have survived the scan so far are stored in the [kept database](crate::db::kept), in insertion order.
//! - Each fresh candidate is checked for [vacuity](crate::procedures::filter) and then scanned against the kept database via the [oracle](crate::oracle).
//!
//! The kept database only ever grows, and the retained subset is a function of input order.
//! Reordering the input may change which representative of a pair of mutually implying candidates survives, though every survivor set is sound: nothing retained was implied by anything retained before it, at the point it was tested.
//!
//! Aside the reducer, the library carries the small upstream toolkit a reduction run sits between:
//! - A [fact-generation harness](crate::harness::facts) which samples well-typed inputs for registered benchmark operations and records `(inputs…, output)` rows.
//! - [Signature splitting](crate::harness::signature) for induction-engine configuration files, built on a tagged-tree [S-expression reader](crate::generic::sexp).
//!
//! # Example
//!
//! Determining redundancy requires a decision procedure, and any implementation of [DecisionProcedure](crate::oracle::DecisionProcedure) will serve.
//! Here every query is answered `Unknown`, so nothing can be proven redundant and every non-vacuous candidate survives:
//!
//! ```rust
//! # use spec_sieve::config::Config;
//! # use spec_sieve::context::GenericContext;
//! # use spec_sieve::db::vocabulary::{Sort, Vocabulary};
//! # use spec_sieve::oracle::{DecisionProcedure, Satisfiability};
//! # use spec_sieve::reports::Report;
//! # use spec_sieve::types::err::OracleError;
//! # use std::time::Duration;
//! struct Hesitant {}
//!
//! impl DecisionProcedure for Hesitant {
//!     fn check_sat(&mut self, _: &str, _: Duration) -> Result<Satisfiability, OracleError> {
//!         Ok(Satisfiability::Unknown)
//!     }
//! }
//!
//! let mut vocabulary = Vocabulary::default();
//! vocabulary.declare_variable("x").unwrap();
//! vocabulary.declare_operator("valid", 1, Sort::Bool).unwrap();
//! vocabulary.declare_operator("sat", 1, Sort::Bool).unwrap();
//!
//! let mut the_context = GenericContext::from_parts(Config::default(), vocabulary, Hesitant {});
//!
//! let candidates = "valid(x) ==> sat(x)
//! sat(x) <== valid(x)
//! ";
//!
//! assert!(the_context.read_candidates(candidates.as_bytes()).is_ok());
//! assert_eq!(the_context.reduce(), Ok(Report::Complete));
//!
//! let kept = the_context.kept_lines().collect::<Vec<_>>();
//! assert_eq!(kept, vec!["valid(x) ==> sat(x)", "sat(x) <== valid(x)"]);
//! ```
//!
//! With a procedure able to return `Unsatisfiable` the second candidate above would instead be discarded, as both lines build the same implication.
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made throughout, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! No log implementation is provided.
//! The targets are listed in [misc::log].

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;
pub mod oracle;

pub mod harness;

pub mod reports;
