use serde::Serialize;

use super::params::Advisory;
use super::transfer::{TransferError, TransferOutcome};
use crate::codes::SliceKind;
use crate::core::QcewError;
use crate::table::Table;

/// Everything one slice download produced: the parsed table, the
/// pre-flight advisories and the transfer outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliceResponse {
    /// The URL that was requested.
    pub url: String,
    /// The slice dimension, if the requested name was recognised.
    pub slice: Option<SliceKind>,
    pub code: String,
    /// Parsed rows; empty when nothing usable was downloaded.
    pub table: Table,
    pub advisories: Vec<Advisory>,
    pub transfer: TransferOutcome,
}

impl SliceResponse {
    /// The transfer completed without warnings.
    pub fn is_complete(&self) -> bool {
        matches!(self.transfer, TransferOutcome::Completed { .. })
    }

    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }

    /// Keep the table, turning a failed transfer into an error.
    ///
    /// Transfer warnings still yield the (possibly empty) table.
    pub fn into_table(self) -> Result<Table, QcewError> {
        match self.transfer {
            TransferOutcome::Failed(TransferError::Status { status }) => Err(QcewError::Status {
                status,
                url: self.url,
            }),
            TransferOutcome::Failed(TransferError::Transport { message }) => {
                Err(QcewError::Transfer {
                    url: self.url,
                    message,
                })
            }
            TransferOutcome::Completed { .. } | TransferOutcome::Warning { .. } => Ok(self.table),
        }
    }
}
