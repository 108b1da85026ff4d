use std::{io::BufReader, path::PathBuf, str::FromStr};

use spec_sieve::{context::Context, db::vocabulary::Vocabulary, generic::sexp, types::err::ErrorKind};

use crate::misc::examine_parser_report;

pub(super) enum ReadError {
    NoPath,
    FailedToOpen,
    ParseError(ErrorKind),
    BadVocabulary(ErrorKind),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::NoPath => write!(f, "Some path to a candidate listing is required."),
            Self::FailedToOpen => write!(f, "Failed to open the file."),
            Self::ParseError(err) => write!(f, "Parse error: '{err:?}'."),
            Self::BadVocabulary(err) => write!(f, "Vocabulary error: '{err:?}'."),
        }
    }
}

/// Reads the vocabulary declaration at `path`.
pub(super) fn read_vocabulary(path: &str) -> Result<Vocabulary, ReadError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let node = match sexp::parse(&text) {
        Ok(node) => node,
        Err(e) => return Err(ReadError::BadVocabulary(ErrorKind::from(e))),
    };

    match Vocabulary::from_sexp(&node) {
        Ok(vocabulary) => Ok(vocabulary),
        Err(e) => Err(ReadError::BadVocabulary(e)),
    }
}

/// Reads the candidate listing at `path` to `context` and writes a report.
/// Results in a [PathBuf] to the read file on success and otherwise a [ReadError].
pub(super) fn read_candidates(path: &str, context: &mut Context) -> Result<PathBuf, ReadError> {
    let path = match PathBuf::from_str(path) {
        Ok(path) => path,
        Err(_) => return Err(ReadError::NoPath),
    };

    eprintln!("c Reading candidate listing from {path:?}");

    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let parse_report = match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            context.read_candidates(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        _ => context.read_candidates(BufReader::new(&file)),
    };

    match examine_parser_report(parse_report) {
        Ok(_) => Ok(path.as_path().to_owned()),

        Err(e) => Err(ReadError::ParseError(e)),
    }
}
