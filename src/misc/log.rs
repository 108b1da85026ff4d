/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::builder::line) candidate lines
    pub const PARSE: &str = "parse";

    /// Logs related to [building](crate::builder) formulas against the vocabulary
    pub const BUILD: &str = "build";

    /// Logs related to the [vacuity filter](crate::procedures::filter)
    pub const FILTER: &str = "filter";

    /// Logs related to the [oracle](crate::oracle)
    pub const ORACLE: &str = "oracle";

    /// Logs related to the [reduction](crate::procedures::reduce)
    pub const REDUCTION: &str = "reduction";

    /// Logs related to the [fact harness](crate::harness)
    pub const HARNESS: &str = "harness";
}
