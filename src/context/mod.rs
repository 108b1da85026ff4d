/*!
The context --- to which candidates are added and within which reductions take place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over various parameters.
Though, for the moment this is limited to the decision procedure.

Still, this helps distinguish generic context methods against those intended for external use or a particular application.
In particular, [from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a decision procedure to be supplied alongside a config.

All state of a run is scoped to its context --- the vocabulary, the loaded candidates, the kept database, and the counters.
Nothing is process-wide, and nothing persists once the context is dropped.

# Example
```rust
# use spec_sieve::config::Config;
# use spec_sieve::context::Context;
# use spec_sieve::db::vocabulary::{Sort, Vocabulary};
let mut vocabulary = Vocabulary::default();
vocabulary.declare_variable("x").unwrap();
vocabulary.declare_operator("hd", 1, Sort::Value).unwrap();

let the_context = Context::from_config(Config::default(), vocabulary);
assert!(the_context.kept.is_empty());
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// A reduction is in progress.
    Reducing,

    /// A reduction ran to completion, and the kept database is final.
    Finished,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Reducing => write!(f, "Reducing"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}
