#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use spec_sieve::{
    config::Config,
    context::GenericContext,
    db::vocabulary::{Sort, Vocabulary},
    oracle::{DecisionProcedure, Satisfiability},
    types::err::OracleError,
};

/// A procedure which answers from a fixed sequence, in call order.
///
/// Panics when the sequence is exhausted, as the test then queried more than it planned for.
pub struct Scripted {
    pub answers: VecDeque<Satisfiability>,
    pub calls: usize,
}

impl Scripted {
    pub fn new(answers: impl IntoIterator<Item = Satisfiability>) -> Self {
        Scripted {
            answers: answers.into_iter().collect(),
            calls: 0,
        }
    }
}

impl DecisionProcedure for Scripted {
    fn check_sat(&mut self, _: &str, _: Duration) -> Result<Satisfiability, OracleError> {
        self.calls += 1;
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => panic!("Unscripted query"),
        }
    }
}

/// A procedure which answers every query alike.
pub struct Uniform {
    pub answer: Satisfiability,
    pub calls: usize,
}

impl Uniform {
    pub fn new(answer: Satisfiability) -> Self {
        Uniform { answer, calls: 0 }
    }
}

impl DecisionProcedure for Uniform {
    fn check_sat(&mut self, _: &str, _: Duration) -> Result<Satisfiability, OracleError> {
        self.calls += 1;
        Ok(self.answer)
    }
}

/// A procedure which fails every query, as a broken solver would.
pub struct Broken {}

impl DecisionProcedure for Broken {
    fn check_sat(&mut self, _: &str, _: Duration) -> Result<Satisfiability, OracleError> {
        Err(OracleError::ProcedureUnavailable("broken".to_owned()))
    }
}

/// A vocabulary shared by most tests.
pub fn vocabulary() -> Vocabulary {
    let mut vocabulary = Vocabulary::default();

    for name in ["x", "y", "z", "w"] {
        vocabulary.declare_variable(name).unwrap();
    }

    vocabulary.declare_operator("valid", 1, Sort::Bool).unwrap();
    vocabulary.declare_operator("sat", 1, Sort::Bool).unwrap();
    vocabulary.declare_operator("hd", 1, Sort::Value).unwrap();
    vocabulary.declare_operator("concat", 2, Sort::Value).unwrap();
    vocabulary.declare_operator("cons", 2, Sort::Value).unwrap();

    vocabulary
}

/// A context over the shared vocabulary and the given procedure.
pub fn context_with<P: DecisionProcedure>(procedure: P) -> GenericContext<P> {
    GenericContext::from_parts(Config::default(), vocabulary(), procedure)
}
