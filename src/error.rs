#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

/// Classified failures a grading run can end with. The display string of
/// each variant is what the platform sees in the `error` field of the
/// result document.
#[derive(thiserror::Error, Debug)]
pub enum GradeError {
    /// The submitted artifact does not exist at the given path.
    #[error("Submission file `{path}` not found")]
    NotFound {
        /// The path that was probed.
        path: String,
    },
    /// The submitted artifact could not be read or is not well-formed XML.
    #[error("XML parsing failed: {message}")]
    Parse {
        /// Diagnostic describing the defect.
        message: String,
    },
    /// The caller did not supply a path to grade.
    #[error("Missing submission file argument")]
    MissingArgument,
    /// Any failure not covered by the classified variants.
    #[error("Internal error: {message}")]
    Internal {
        /// Preserved message of the underlying failure.
        message: String,
    },
}

impl GradeError {
    /// Wraps a read or parser diagnostic as a `Parse` failure.
    pub fn parse(err: impl Display) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }

    /// Wraps an unclassified failure, preserving its message.
    pub fn internal(err: impl Display) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}
