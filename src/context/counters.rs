use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Debug)]
pub struct Counters {
    /// A count of every candidate examined during a reduction.
    pub candidates: usize,

    /// A count of candidates discarded as vacuous, without oracle contact.
    pub vacuous: usize,

    /// A count of candidates discarded as redundant, on a `Valid` verdict.
    pub redundant: usize,

    /// A count of every oracle query made.
    pub oracle_calls: usize,

    /// A count of queries whose budget was exhausted.
    ///
    /// Each contributed an `Unknown` verdict, and so never a discard.
    pub unknown_verdicts: usize,

    /// The time taken during a reduction.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            candidates: 0,
            vacuous: 0,
            redundant: 0,

            oracle_calls: 0,
            unknown_verdicts: 0,

            time: Duration::from_secs(0),
        }
    }
}
