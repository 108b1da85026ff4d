/*!
Configuration of a context.

All configuration for a reduction is contained within the context.
The oracle backend clones the parts it needs when a query is made.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The soft time budget for a single oracle query, in milliseconds.
    ///
    /// Exhausting the budget yields an `Unknown` verdict, never a discard.
    pub oracle_timeout: ConfigOption<u64>,

    /// The bit width of the value sort used in oracle queries.
    pub value_width: ConfigOption<u32>,

    /// Model-based quantifier instantiation in the decision procedure.
    pub mbqi: ConfigOption<bool>,

    /// The decision procedure binary to spawn for each query.
    pub solver_path: String,
}

impl Default for Config {
    /// The default configuration mirrors the reference reduction setup: a two second budget per query over an eight bit value domain.
    fn default() -> Self {
        Config {
            oracle_timeout: ConfigOption {
                name: "timeout",
                min: 1,
                max: 3_600_000,
                value: 2000,
            },

            value_width: ConfigOption {
                name: "width",
                min: 1,
                max: 64,
                value: 8,
            },

            mbqi: ConfigOption {
                name: "mbqi",
                min: false,
                max: true,
                value: false,
            },

            solver_path: "z3".to_owned(),
        }
    }
}
