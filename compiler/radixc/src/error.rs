use std::io;
use std::path::PathBuf;

/// Failures of the driver itself. Scan failures are reported as output,
/// not as errors.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),
    /// Input file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    /// Report could not be written.
    #[error("cannot write report: {0}")]
    Write(#[from] io::Error),
}
