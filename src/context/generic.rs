use crate::{
    config::Config,
    db::{kept::KeptDB, vocabulary::Vocabulary},
    oracle::DecisionProcedure,
    reports::Report,
    structures::relation::Candidate,
};

use super::{ContextState, Counters};

/// A generic context, parameterised to a decision procedure.
///
/// The procedure is the only shared resource of a run, and the only seam: swapping it is all that's needed to reduce against a different solver, or against a scripted stand-in for tests.
///
/// # Example
///
/// ```rust
/// # use spec_sieve::config::Config;
/// # use spec_sieve::context::GenericContext;
/// # use spec_sieve::db::vocabulary::Vocabulary;
/// # use spec_sieve::oracle::Z3Process;
/// let config = Config::default();
/// let procedure = Z3Process::from_config(&config);
/// let context = GenericContext::from_parts(config, Vocabulary::default(), procedure);
/// ```
pub struct GenericContext<P: DecisionProcedure> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/reduction.
    pub counters: Counters,

    /// The vocabulary database.
    /// See [db::vocabulary](crate::db::vocabulary) for details.
    pub vocabulary: Vocabulary,

    /// Candidates read into the context, in strict input order, awaiting reduction.
    pub candidates: Vec<Candidate>,

    /// The kept database.
    /// See [db::kept](crate::db::kept) for details.
    pub kept: KeptDB,

    /// The status of the context.
    pub state: ContextState,

    /// The decision procedure.
    pub procedure: P,
}

impl<P: DecisionProcedure> GenericContext<P> {
    /// Creates a context from a configuration, a vocabulary, and a decision procedure.
    pub fn from_parts(config: Config, vocabulary: Vocabulary, procedure: P) -> Self {
        Self {
            config,

            counters: Counters::default(),

            vocabulary,

            candidates: Vec::default(),
            kept: KeptDB::default(),

            state: ContextState::Configuration,

            procedure,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Finished => Report::Complete,

            _ => Report::Incomplete,
        }
    }
}
