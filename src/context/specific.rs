use crate::{config::Config, db::vocabulary::Vocabulary, oracle::Z3Process};

use super::GenericContext;

/// A context which uses [Z3Process] as its decision procedure.
pub type Context = GenericContext<Z3Process>;

impl Context {
    /// Creates a context from some given configuration and vocabulary.
    pub fn from_config(config: Config, vocabulary: Vocabulary) -> Self {
        let procedure = Z3Process::from_config(&config);
        Self::from_parts(config, vocabulary, procedure)
    }
}
