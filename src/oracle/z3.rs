/*!
The canonical decision procedure backend: a z3 process per query.

A fresh process is spawned for every call, the script written to its standard input, and the first status line of its output classified.
The soft budget is passed in milliseconds (`-t`), with a hard wall-clock ceiling (`-T`) a couple of seconds above it in case the soft budget is ignored inside a quantifier instantiation.

Failure to spawn the process, or a crash, is reported as an [OracleError](crate::types::err::OracleError) --- fatal for a reduction --- while a budget exhausted inside the solver is the ordinary `Unknown`.
*/

use std::{
    io::Write,
    process::{Command, Stdio},
    time::Duration,
};

use crate::{
    config::Config,
    oracle::{DecisionProcedure, Satisfiability},
    types::err::{self},
};

/// A z3 binary to spawn for each query.
#[derive(Clone, Debug)]
pub struct Z3Process {
    /// The binary, as a path or a name to be found through the usual lookup.
    path: String,

    /// Whether to leave model-based quantifier instantiation on.
    mbqi: bool,
}

impl Z3Process {
    pub fn from_config(config: &Config) -> Self {
        Z3Process {
            path: config.solver_path.clone(),
            mbqi: config.mbqi.value,
        }
    }
}

impl DecisionProcedure for Z3Process {
    fn check_sat(
        &mut self,
        script: &str,
        timeout: Duration,
    ) -> Result<Satisfiability, err::OracleError> {
        let hard_ceiling = timeout.as_secs() + 2;

        let mut command = Command::new(&self.path);
        command
            .arg("-smt2")
            .arg("-in")
            .arg(format!("-t:{}", timeout.as_millis()))
            .arg(format!("-T:{hard_ceiling}"));

        if !self.mbqi {
            command.arg("auto_config=false").arg("smt.mbqi=false");
        }

        command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = match command.spawn() {
            Ok(child) => child,

            Err(e) => return Err(err::OracleError::ProcedureUnavailable(e.to_string())),
        };

        match child.stdin.take() {
            Some(mut stdin) => {
                if let Err(e) = stdin.write_all(script.as_bytes()) {
                    return Err(err::OracleError::ProcedureFailure(e.to_string()));
                }
                // Dropping the handle closes the stream, else the solver waits for further input.
            }

            None => {
                return Err(err::OracleError::ProcedureFailure(
                    "No stdin handle".to_owned(),
                ))
            }
        }

        let output = match child.wait_with_output() {
            Ok(output) => output,

            Err(e) => return Err(err::OracleError::ProcedureFailure(e.to_string())),
        };

        let stdout = String::from_utf8_lossy(&output.stdout);

        for line in stdout.lines() {
            match line.trim() {
                "unsat" => return Ok(Satisfiability::Unsatisfiable),

                "sat" => return Ok(Satisfiability::Satisfiable),

                "unknown" | "timeout" => return Ok(Satisfiability::Unknown),

                _ => continue,
            }
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(err::OracleError::UnexpectedOutput(format!(
            "{}{}",
            stdout.trim(),
            stderr.trim()
        )))
    }
}

#[cfg(test)]
mod z3_tests {
    use super::*;

    fn z3() -> Z3Process {
        Z3Process::from_config(&Config::default())
    }

    #[test]
    #[ignore] // Only run if z3 is installed.
    fn plain_unsat() {
        let script = "(declare-const p Bool)\n(assert (and p (not p)))\n(check-sat)\n";
        let result = z3().check_sat(script, Duration::from_millis(2000));
        assert_eq!(result, Ok(Satisfiability::Unsatisfiable));
    }

    #[test]
    #[ignore] // Only run if z3 is installed.
    fn plain_sat() {
        let script = "(declare-const p Bool)\n(assert p)\n(check-sat)\n";
        let result = z3().check_sat(script, Duration::from_millis(2000));
        assert_eq!(result, Ok(Satisfiability::Satisfiable));
    }

    #[test]
    fn missing_binary() {
        let mut missing = Z3Process {
            path: "a_solver_most_unlikely_to_exist".to_owned(),
            mbqi: false,
        };
        let result = missing.check_sat("(check-sat)\n", Duration::from_millis(10));
        assert!(matches!(
            result,
            Err(err::OracleError::ProcedureUnavailable(_))
        ));
    }
}
