//! Choosing an account name with an external fuzzy finder.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

const FZF: &str = "fzf";

/// fzf's exit code when the query matched nothing.
const FZF_NO_MATCH: i32 = 1;

#[derive(Debug, Error)]
pub enum SubprocessError {
    #[error("starting {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("talking to {program}: {source}")]
    Io {
        program: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {}", describe_exit(.code))]
    Status {
        program: &'static str,
        /// `None` when killed by a signal.
        code: Option<i32>,
    },
    #[error("no account was selected")]
    NoSelection,
}

pub trait AccountSelector {
    /// Returns the account chosen by the user from `candidates`.
    fn select(&self, label: &str, candidates: &[String]) -> Result<String, SubprocessError>;
}

/// Runs `fzf` on the terminal. The typed query is printed along with any
/// selection, so an account that is not yet in the journal can be entered by
/// typing it in full.
#[derive(Debug, Default)]
pub struct Fzf;

impl AccountSelector for Fzf {
    fn select(&self, label: &str, candidates: &[String]) -> Result<String, SubprocessError> {
        let io_err = |source: io::Error| SubprocessError::Io {
            program: FZF,
            source,
        };

        let mut child = Command::new(FZF)
            .arg("--multi")
            .arg("--print-query")
            .arg("--prompt")
            .arg(format!("{}> ", label))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| SubprocessError::Spawn {
                program: FZF,
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // fzf may exit before reading everything, e.g. on an early Esc.
            match stdin.write_all(candidates.join("\n").as_bytes()) {
                Err(e) if e.kind() != io::ErrorKind::BrokenPipe => return Err(io_err(e)),
                _ => {}
            }
        }

        let output = child.wait_with_output().map_err(io_err)?;
        debug!(status = %output.status, "{} finished", FZF);
        choose(output.status.code(), &String::from_utf8_lossy(&output.stdout))
    }
}

/// Decides the outcome of an fzf run from its exit code and output. A "no
/// match" exit still yields the typed query as a new account name.
fn choose(code: Option<i32>, stdout: &str) -> Result<String, SubprocessError> {
    match (code, parse_fzf_output(stdout)) {
        (Some(0), Some(account)) | (Some(FZF_NO_MATCH), Some(account)) => {
            Ok(account.to_string())
        }
        (Some(0), None) => Err(SubprocessError::NoSelection),
        _ => Err(SubprocessError::Status { program: FZF, code }),
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "a signal".to_string(),
    }
}

/// Picks the account from `fzf --print-query` output: the first selected line,
/// or else the query itself. The first output line is the query, so it is only
/// used when nothing was selected, even though it comes first.
pub fn parse_fzf_output(stdout: &str) -> Option<&str> {
    let mut lines = stdout.lines().map(str::trim);
    let query = lines.next().unwrap_or("");
    lines
        .find(|line| !line.is_empty())
        .or_else(|| Some(query).filter(|q| !q.is_empty()))
}
