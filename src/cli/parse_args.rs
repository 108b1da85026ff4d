use spec_sieve::config::Config;

use crate::CliConfig;

/// Parse CLI arguments to a [Config] struct or a [CliConfig] struct.
///
/// If an unrecognised argument or invalid option is found a message is sent and the process is terminated.
pub fn parse_args(args: &mut [String], cfg: &mut Config, cli_options: &mut CliConfig) {
    'arg_examination: for arg in args.iter().skip(1).rev().skip(1) {
        let mut split = arg.split("=");
        match split.next() {
            Some("--output") => {
                if let Some(path) = split.next() {
                    if !path.is_empty() {
                        eprintln!("c The kept listing will be written to {path}");
                        cli_options.output = Some(path.to_owned());
                        continue 'arg_examination;
                    }
                }

                eprintln!("output requires a path");
                std::process::exit(1);
            }

            Some("--vocabulary") => {
                if let Some(path) = split.next() {
                    if !path.is_empty() {
                        cli_options.vocabulary = Some(path.to_owned());
                        continue 'arg_examination;
                    }
                }

                eprintln!("vocabulary requires a path");
                std::process::exit(1);
            }

            // The remaining cases follow a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            // Otherwise, a message is sent.
            //
            // Further, the cases should be in lexicographic order.
            //
            Some("--mbqi") => {
                let (min, max) = cfg.mbqi.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<bool>() {
                        eprintln!("c mbqi set to: {value}");
                        cfg.mbqi.value = value;
                        continue 'arg_examination;
                    }
                }

                eprintln!("mbqi requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--solver") => {
                if let Some(path) = split.next() {
                    if !path.is_empty() {
                        eprintln!("c solver set to: {path}");
                        cfg.solver_path = path.to_owned();
                        continue 'arg_examination;
                    }
                }

                eprintln!("solver requires a path");
                std::process::exit(1);
            }

            Some("--timeout") => {
                let (min, max) = cfg.oracle_timeout.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<u64>() {
                        if min <= value && value <= max {
                            eprintln!("c timeout set to: {value} ms");
                            cfg.oracle_timeout.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                eprintln!("timeout requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--width") => {
                let (min, max) = cfg.value_width.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<u32>() {
                        if min <= value && value <= max {
                            eprintln!("c width set to: {value} bits");
                            cfg.value_width.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                eprintln!("width requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some(_) | None => {
                eprintln!("Unable to parse argument: {arg:?}");
                std::process::exit(1);
            }
        }
    }
}
