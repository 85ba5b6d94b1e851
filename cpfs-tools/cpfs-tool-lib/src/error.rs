use cpfs::{CpfsError, CpfsErrorConvertible};
use std::io;
use thiserror::Error;

/// Failures of the file backed block device. The io::Error text carries the platform error code.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("Cannot open disk {path}. Error: {source}")]
    Open { path: String, source: io::Error },
    #[error("Failed to seek to block {block_index}. Error: {source}")]
    Seek { block_index: u64, source: io::Error },
    #[error("Failed to write block {block_index}. Error: {source}")]
    Write { block_index: u64, source: io::Error },
    #[error("Short write on block {block_index}: wrote {written} of {expected} bytes")]
    ShortWrite {
        block_index: u64,
        written: usize,
        expected: usize,
    },
    #[error("Failed to flush disk. Error: {0}")]
    Flush(#[source] io::Error),
}

impl CpfsErrorConvertible for DeviceError {}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{0}")]
    Argument(clap::Error),
    #[error("Invalid block count \"{0}\", expected a whole number up to 4294967295")]
    InvalidBlockCount(String),
    #[error("{0}")]
    Format(CpfsError<DeviceError>),
}

/// Process exit code for every unsuccessful run, including help and version requests.
pub const FAILURE_EXIT_CODE: i32 = -1;

impl ToolError {
    /// Anything other than exactly `<disk_path> <total_blocks>` is a failed invocation,
    /// so clap's help and version output still exit with the failure code.
    pub fn exit_code(&self) -> i32 {
        return FAILURE_EXIT_CODE;
    }
}

impl From<clap::Error> for ToolError {
    fn from(e: clap::Error) -> Self {
        return ToolError::Argument(e);
    }
}

impl From<CpfsError<DeviceError>> for ToolError {
    fn from(e: CpfsError<DeviceError>) -> Self {
        return ToolError::Format(e);
    }
}

impl From<DeviceError> for ToolError {
    fn from(e: DeviceError) -> Self {
        return ToolError::Format(e.into_cpfs_error());
    }
}
