use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read log: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed checked events count on line {line}: {source}")]
    MalformedCount {
        line: usize,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<O, E = Error> = std::result::Result<O, E>;

pub trait ResultExt<T>: Sized {
    /// Attach the 1-based line number to a count parse failure
    fn on_line(self, line: usize) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, ParseIntError> {
    fn on_line(self, line: usize) -> Result<T> {
        self.map_err(|source| Error::MalformedCount { line, source })
    }
}
