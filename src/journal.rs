//! Reads and appends to the Ledger journal file that the wizard works on.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

/// Journal used when no path is given on the command line.
pub const DEFAULT_PATH: &str = "ledger.txt";

#[derive(Debug, Error)]
#[error("reading {path:?}: {source}")]
pub struct ReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error)]
#[error("appending to {path:?}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Specifies the journal file to read accounts from and append entries to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Journal {
    path: PathBuf,
}

impl Default for Journal {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:?}", self.path)
    }
}

impl FromStr for Journal {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Journal {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full contents of the journal. The file is closed before this
    /// returns. Bytes that are not valid UTF-8 are replaced rather than
    /// rejected.
    pub fn read(&self) -> Result<String, ReadError> {
        let mut bytes = Vec::new();
        File::open(&self.path)
            .and_then(|mut f| f.read_to_end(&mut bytes))
            .map_err(|source| ReadError {
                path: self.path.clone(),
                source,
            })?;
        let (content, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
        if had_errors {
            warn!(path = ?self.path(), "journal is not valid UTF-8, replaced bad bytes");
        }
        debug!(path = ?self.path(), bytes = bytes.len(), "read journal");
        Ok(content.into_owned())
    }

    /// Appends `text` followed by a newline to the end of the journal in a
    /// single write. The journal must already exist.
    pub fn append(&self, text: &str) -> Result<(), WriteError> {
        let mut buf = String::with_capacity(text.len() + 1);
        buf.push_str(text);
        buf.push('\n');

        OpenOptions::new()
            .append(true)
            .open(&self.path)
            .and_then(|mut f| f.write_all(buf.as_bytes()))
            .map_err(|source| WriteError {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = ?self.path(), bytes = buf.len(), "appended to journal");
        Ok(())
    }
}
