/*!
Reports for the context, and serialization of the surviving records.

What a reduction reports is the sequence of original raw lines of the kept candidates, in their retained order --- the textual record, never a rewritten or merged formula.
Either a run completes and the full kept listing is written, or it aborts and nothing is.
*/

use std::io::Write;

use crate::{
    context::{ContextState, GenericContext},
    oracle::DecisionProcedure,
};

/// High-level reports regarding a reduction.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The reduction ran to completion.
    Complete,

    /// The reduction has not run to completion, for some reason.
    Incomplete,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Finished => Self::Complete,

            _ => Self::Incomplete,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complete => write!(f, "Complete"),
            Self::Incomplete => write!(f, "Incomplete"),
        }
    }
}

impl<P: DecisionProcedure> GenericContext<P> {
    /// An iterator over the original lines of kept candidates, in retained order.
    pub fn kept_lines(&self) -> impl Iterator<Item = &str> {
        self.kept.lines()
    }

    /// Writes the kept listing, one record per line, in retained order.
    pub fn write_kept(&self, writer: &mut impl Write) -> std::io::Result<()> {
        for line in self.kept.lines() {
            writeln!(writer, "{line}")?;
        }

        Ok(())
    }
}
