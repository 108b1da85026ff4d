//! Reduces the candidates of a context to a non-redundant subset.
//!
//! # Overview
//!
//! [reduce](crate::context::GenericContext::reduce) casts redundancy removal as a single greedy pass over the candidates, in strict input order, against a growing [kept database](crate::db::kept).
//!
//! For each candidate:
//!
//! - If the [vacuity filter](crate::procedures::filter) marks the candidate, it is discarded --- no oracle query is made.
//! - Otherwise the kept database is scanned in insertion order, and for each kept formula 𝐊 the [oracle](crate::oracle) is asked whether 𝐊 implies the candidate.
//!   + The first `Valid` verdict marks the candidate redundant, and the scan stops --- there is no search for a 'best' subsumer.
//!   + An `Unknown` verdict is treated exactly as `Invalid`: a candidate is never discarded on a timeout, so the pass never drops anything it could not prove redundant.
//! - A candidate no kept formula was proven to imply is appended to the kept database.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!           +---------------+  vacuous   +---------+
//!   +------>| filter        |----------->| discard |
//!   |       +---------------+            +---------+
//!   |               |                         ⌃
//!   |               ⌄                         | on the first Valid
//!   |       +---------------+                 |
//!   |       | scan KEPT     |-----------------+
//!   |       +---------------+
//!   |               |
//!   |               | no kept formula implies the candidate
//!   |               ⌄
//!   |       +---------------+
//!   +-------| append        |
//!           +---------------+
//! ```
//!
//! The worst case is O(*n* × |kept|) oracle queries for *n* candidates.
//! The result is order-dependent: of two mutually implying candidates, whichever is presented first survives.
//! Every survivor set is nonetheless sound --- nothing retained was implied by anything retained before it, at the point it was tested.
//!
//! The pass is fully sequential: each query blocks until the procedure answers, with the time budget enforced inside the [oracle](crate::oracle) rather than here, and each append is committed before the next candidate's scan begins.

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    oracle::{DecisionProcedure, Verdict},
    procedures::filter,
    reports::Report,
    types::err::ErrorKind,
};

impl<P: DecisionProcedure> GenericContext<P> {
    /// Reduces the read candidates, in input order, to a non-redundant subset in the kept database.
    ///
    /// Fails on an oracle breakdown, and the kept database of a failed reduction is partial --- nothing should be reported from it.
    pub fn reduce(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {
                self.state = ContextState::Reducing;
            }

            _ => return Err(ErrorKind::InvalidState),
        }

        let total_time = std::time::Instant::now();
        let candidates = std::mem::take(&mut self.candidates);

        'candidate_loop: for candidate in candidates {
            self.counters.candidates += 1;

            if filter::vacuous(&candidate) {
                self.counters.vacuous += 1;
                log::info!(
                    target: targets::FILTER,
                    "Vacuous: {}",
                    candidate.record.line()
                );
                continue 'candidate_loop;
            }

            'kept_scan: for kept_index in 0..self.kept.len() {
                let kept_formula = self.kept.formula(kept_index).clone();

                match self.oracle_implies(&kept_formula, &candidate.formula)? {
                    Verdict::Valid => {
                        self.counters.redundant += 1;
                        log::info!(
                            target: targets::REDUCTION,
                            "Redundant: {}",
                            candidate.record.line()
                        );
                        continue 'candidate_loop;
                    }

                    Verdict::Invalid => continue 'kept_scan,

                    // Never discard on a timeout.
                    Verdict::Unknown => continue 'kept_scan,
                }
            }

            log::info!(target: targets::REDUCTION, "Kept: {}", candidate.record.line());
            self.kept.push(candidate);
        }

        self.counters.time = total_time.elapsed();
        self.state = ContextState::Finished;

        Ok(self.report())
    }
}
