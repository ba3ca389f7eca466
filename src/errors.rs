use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Represents all possible errors in the syncfiles crate.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Hash, Eq)]
pub enum Error {
    /// Error indicating a failure to stat, open or read a local file.
    #[error("Failed to read {what}: {how}")]
    Read {
        /// The item that failed to be read.
        what: String,
        /// The reason for the failure.
        how: String,
    },

    /// Error indicating a failure to parse data.
    #[error("Failed to parse {what}: {how}")]
    Parse {
        /// The item that failed to be parse.
        what: String,
        /// The reason for the failure.
        how: String,
    },

    /// Error indicating a value could not be rendered for humans.
    #[error("Failed to format {what}: {how}")]
    Format {
        /// The item that failed to be formatted.
        what: String,
        /// The reason for the failure.
        how: String,
    },
}
