/*!
The fact-generation harness.

Given a registry of benchmark operations, each declared with a name and a parameter [type-tag](crate::harness::generators::TypeTag) sequence, the harness produces observation rows: fresh well-typed samples per tag, the operation applied, and `(inputs…, output)` recorded delimiter-joined.
An operation which fails on its sampled inputs contributes the configured sentinel in the output column rather than a value.

The registry is explicit and resolved at construction --- there is no reflective discovery of operations --- and all harness state is scoped to the [FactsContext]: the source of samples is owned by the context, so runs are restartable, and two contexts with the same seed produce identical rows.

```rust
# use spec_sieve::harness::facts::{Benchmark, Facts, FactsConfig, OperationError};
# use spec_sieve::harness::generators::TypeTag;
fn double(inputs: &[i64]) -> Result<i64, OperationError> {
    inputs[0].checked_mul(2).ok_or(OperationError {})
}

let registry = vec![Benchmark::new("double", vec![TypeTag::Int], double)];
let mut facts = Facts::from_config(FactsConfig::default(), registry);

let mut out = Vec::new();
facts.write_facts("double", &mut out).unwrap();
assert_eq!(out.split(|b| *b == b'\n').count(), facts.config.count + 1);
```
*/

use std::io::Write;

use rand::SeedableRng;

use crate::{
    generic::MinimalPCG32,
    harness::generators::TypeTag,
    misc::log::targets::{self},
    types::err::{self, ErrorKind},
};

/// The failure of a benchmark operation on its sampled inputs.
///
/// Carries no detail --- the harness records the sentinel whatever the cause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OperationError {}

/// A benchmark operation over sampled values.
pub type Operation = fn(&[i64]) -> Result<i64, OperationError>;

/// A registered benchmark: a name, the parameter tags, and the operation itself.
#[derive(Clone, Debug)]
pub struct Benchmark {
    pub name: String,
    pub tags: Vec<TypeTag>,
    pub operation: Operation,
}

impl Benchmark {
    pub fn new(name: impl Into<String>, tags: Vec<TypeTag>, operation: Operation) -> Self {
        Benchmark {
            name: name.into(),
            tags,
            operation,
        }
    }
}

/// Configuration of a facts context.
#[derive(Clone, Debug)]
pub struct FactsConfig {
    /// Rows to record per benchmark.
    pub count: usize,

    /// The column separator of a row.
    pub delimiter: String,

    /// Recorded in the output column when an operation fails.
    pub sentinel: String,

    /// The seed of the sample stream.
    pub seed: u64,
}

impl Default for FactsConfig {
    fn default() -> Self {
        FactsConfig {
            count: 1000,
            delimiter: "\t".to_owned(),
            sentinel: String::default(),
            seed: 0,
        }
    }
}

/// A generic facts context, parameterised to a source of samples.
pub struct GenericFacts<R: rand::Rng> {
    /// The configuration of the context.
    pub config: FactsConfig,

    /// The registry, fixed at construction.
    benchmarks: Vec<Benchmark>,

    /// The source of samples.
    rng: R,
}

impl<R: rand::Rng> GenericFacts<R> {
    /// Creates a facts context from a configuration, a registry, and a source of samples.
    pub fn from_parts(config: FactsConfig, benchmarks: Vec<Benchmark>, rng: R) -> Self {
        Self {
            config,
            benchmarks,
            rng,
        }
    }

    /// The registered benchmarks, in registration order.
    pub fn benchmarks(&self) -> impl Iterator<Item = &Benchmark> {
        self.benchmarks.iter()
    }

    /// Writes the observation rows of the named benchmark.
    pub fn write_facts(&mut self, name: &str, writer: &mut impl Write) -> Result<(), ErrorKind> {
        let benchmark = match self.benchmarks.iter().find(|b| b.name == name) {
            Some(benchmark) => benchmark,

            None => {
                return Err(ErrorKind::from(err::HarnessError::UnknownBenchmark(
                    name.to_owned(),
                )))
            }
        };

        log::info!(target: targets::HARNESS, "Recording {} rows of {name}", self.config.count);

        let mut row = String::with_capacity(64);

        for _ in 0..self.config.count {
            row.clear();

            let mut inputs = Vec::with_capacity(benchmark.tags.len());
            for tag in &benchmark.tags {
                let input = tag.sample(&mut self.rng);
                row.push_str(&input.to_string());
                row.push_str(&self.config.delimiter);
                inputs.push(input);
            }

            match (benchmark.operation)(&inputs) {
                Ok(output) => row.push_str(&output.to_string()),

                Err(OperationError {}) => row.push_str(&self.config.sentinel),
            }

            if let Err(e) = writeln!(writer, "{row}") {
                return Err(ErrorKind::from(err::HarnessError::WriteFailure(
                    e.to_string(),
                )));
            }
        }

        Ok(())
    }
}

/// A facts context which uses [MinimalPCG32] as its source of samples.
pub type Facts = GenericFacts<MinimalPCG32>;

impl Facts {
    /// Creates a facts context from some given configuration and registry, seeded from the configuration.
    pub fn from_config(config: FactsConfig, benchmarks: Vec<Benchmark>) -> Self {
        let rng = MinimalPCG32::from_seed(config.seed.to_le_bytes());
        Self::from_parts(config, benchmarks, rng)
    }

    /// Restarts the sample stream, as if the context were fresh.
    pub fn restart(&mut self) {
        self.rng = MinimalPCG32::from_seed(self.config.seed.to_le_bytes());
    }
}
