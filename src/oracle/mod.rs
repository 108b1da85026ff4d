/*!
The oracle --- timeout-bounded validity queries against an external decision procedure.

The single operation is [oracle_implies](crate::context::GenericContext::oracle_implies): given formulas 𝐅₁ and 𝐅₂, both are universally quantified over the **entire declared vocabulary** --- not just the variables each mentions --- and the procedure is asked whether

```text
(forall vocab 𝐅₁) ∧ ¬(forall vocab 𝐅₂)
```

is unsatisfiable within the configured time budget.
Unsatisfiable means 𝐅₁ implies 𝐅₂ and the verdict is [Valid](Verdict::Valid); satisfiable is [Invalid](Verdict::Invalid); an exhausted budget is [Unknown](Verdict::Unknown).

Quantifying over the whole vocabulary is deliberate, and coarser than minimal: it couples verdicts to vocabulary completeness at declaration time, so changing the declarations between runs can change which candidates are judged redundant.

Each query uses an independent, fresh procedure context --- the canonical [Z3Process] backend spawns one solver process per call --- so no session state is shared across calls.
A procedure which cannot be started, or which crashes, is a fatal error rather than an `Unknown`: a reduction never emits partial output on a broken oracle.
*/

use std::time::Duration;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

pub mod smtlib;
pub mod z3;
pub use z3::Z3Process;

/// The answer of the decision procedure to a satisfiability query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Satisfiability {
    Satisfiable,

    Unsatisfiable,

    /// The procedure could not decide within its budget.
    Unknown,
}

/// The verdict of an implication query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// The antecedent was proven to imply the consequent.
    Valid,

    /// The implication has a countermodel.
    Invalid,

    /// The time budget was exhausted before a decision.
    /// Treated exactly as [Invalid](Verdict::Invalid) by the reducer: a timeout is never grounds to discard a candidate.
    Unknown,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => write!(f, "Valid"),
            Self::Invalid => write!(f, "Invalid"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The external decision procedure seam.
///
/// Anything able to answer satisfiability of an SMT-LIB2 script under a time budget serves as a procedure.
/// Implementations are stateless from the library's point of view: every query carries a complete script, including all declarations.
pub trait DecisionProcedure {
    /// The satisfiability of `script`, decided within `timeout`.
    ///
    /// An exhausted budget is the `Unknown` variant, not an error; errors are reserved for a procedure which is unavailable or broken.
    fn check_sat(
        &mut self,
        script: &str,
        timeout: Duration,
    ) -> Result<Satisfiability, err::OracleError>;
}

impl<P: DecisionProcedure> GenericContext<P> {
    /// Queries whether `antecedent` implies `consequent`, under the configured time budget.
    pub fn oracle_implies(
        &mut self,
        antecedent: &Formula,
        consequent: &Formula,
    ) -> Result<Verdict, ErrorKind> {
        let script = smtlib::implication_script(
            &self.vocabulary,
            antecedent,
            consequent,
            self.config.value_width.value,
        );
        let timeout = Duration::from_millis(self.config.oracle_timeout.value);

        self.counters.oracle_calls += 1;
        log::trace!(target: targets::ORACLE, "Query:\n{script}");

        let verdict = match self.procedure.check_sat(&script, timeout)? {
            Satisfiability::Unsatisfiable => Verdict::Valid,

            Satisfiability::Satisfiable => Verdict::Invalid,

            Satisfiability::Unknown => {
                self.counters.unknown_verdicts += 1;
                Verdict::Unknown
            }
        };

        log::debug!(target: targets::ORACLE, "Verdict: {verdict}");
        Ok(verdict)
    }
}
