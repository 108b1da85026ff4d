use spec_sieve::{builder::ParserInfo, types::err::ErrorKind};

pub fn examine_parser_report(
    parse_report: Result<ParserInfo, ErrorKind>,
) -> Result<ParserInfo, ErrorKind> {
    match parse_report {
        Ok(info) => {
            eprintln!("c Read      {} lines.", info.lines_read);
            eprintln!("c Built     {} candidates.", info.candidates_added);
            Ok(info)
        }

        Err(e) => {
            eprintln!("c Parse error: {e:?}");
            Err(e)
        }
    }
}
