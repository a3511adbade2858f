use std::backtrace::Backtrace;
use std::path::PathBuf;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("{0} is not in the guest list")]
    UnknownGuest(String),
    #[error("{path}:{line}: expected two comma-separated guest names")]
    MalformedPair { path: PathBuf, line: usize },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write output")]
    Output(#[source] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<PlanError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<PlanError> for Error {
    fn from(inner: PlanError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
