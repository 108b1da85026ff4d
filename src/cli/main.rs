use std::io::Write;

use spec_sieve::{config::Config, context::Context};

use config::CliConfig;
use parse_args::parse_args;

mod config;
mod misc;
mod parse_args;
mod read;

fn main() {
    let mut cli_options = CliConfig::default();
    let mut cfg = Config::default();

    let mut args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("c Path to a candidate listing required");
        std::process::exit(1);
    }

    parse_args(&mut args, &mut cfg, &mut cli_options);

    let vocabulary = match &cli_options.vocabulary {
        Some(path) => match read::read_vocabulary(path) {
            Ok(vocabulary) => vocabulary,

            Err(e) => {
                eprintln!("c {e}");
                std::process::exit(1);
            }
        },

        None => {
            eprintln!("c A vocabulary declaration is required (--vocabulary=<path>)");
            std::process::exit(1);
        }
    };

    let mut ctx: Context = Context::from_config(cfg, vocabulary);

    let path = match args.last() {
        Some(path) => path.clone(),

        None => {
            eprintln!("c Path to a candidate listing required");
            std::process::exit(1);
        }
    };

    if let Err(e) = read::read_candidates(&path, &mut ctx) {
        eprintln!("c {e}");
        std::process::exit(1);
    }

    let result = match ctx.reduce() {
        Ok(report) => report,

        Err(e) => {
            eprintln!("c Reduction error: {e:?}");
            std::process::exit(2);
        }
    };

    eprintln!("c Examined  {} candidates.", ctx.counters.candidates);
    eprintln!("c Vacuous   {}.", ctx.counters.vacuous);
    eprintln!("c Redundant {}.", ctx.counters.redundant);
    eprintln!("c Kept      {}.", ctx.kept.len());
    eprintln!(
        "c Queries   {} ({} unknown).",
        ctx.counters.oracle_calls, ctx.counters.unknown_verdicts
    );
    eprintln!("c Time      {:.2?}.", ctx.counters.time);

    let written = match &cli_options.output {
        Some(path) => match std::fs::File::create(path) {
            Ok(mut file) => ctx.write_kept(&mut file),

            Err(_) => {
                eprintln!("c Failed to create {path}");
                std::process::exit(1);
            }
        },

        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            let outcome = ctx.write_kept(&mut handle);
            let _ = handle.flush();
            outcome
        }
    };

    if written.is_err() {
        eprintln!("c Failed to write the kept listing");
        std::process::exit(1);
    }

    eprintln!("s {result}");
}
