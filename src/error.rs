//! Error types for panel operations.

use thiserror::Error;

use crate::model::BoxHandle;

/// Errors returned by [`LabelsPanel`](crate::LabelsPanel) operations.
///
/// None of these are fatal; the panel is left unchanged when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelsError {
    /// No viewport context (and therefore no image view) is installed yet.
    #[error("No target image view is bound")]
    NoTargetView,

    /// The host could not create the elements backing a new entry.
    #[error("Failed to create label elements: {reason}")]
    AllocationFailure {
        /// Description reported by the host
        reason: String,
    },

    /// The handle does not name a live entry.
    #[error("Unknown bounding box: {0}")]
    UnknownBox(BoxHandle),
}

impl LabelsError {
    /// Create an allocation failure with a reason.
    pub fn allocation_failure(reason: impl Into<String>) -> Self {
        Self::AllocationFailure {
            reason: reason.into(),
        }
    }
}
