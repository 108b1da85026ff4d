/// A collection of configuration options relevant only to the CLI.
#[derive(Default)]
pub struct CliConfig {
    /// The vocabulary declaration to read, required before any candidate.
    pub vocabulary: Option<String>,

    /// Where to write the kept listing, with stdout the default.
    pub output: Option<String>,
}
