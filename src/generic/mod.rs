//! Generic structures, abstracted from their use in the library.

pub mod minimal_pcg;
pub mod sexp;

pub use minimal_pcg::MinimalPCG32;
