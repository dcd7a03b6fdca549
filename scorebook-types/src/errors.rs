use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum ExportError {
    #[error("No plays to export")]
    NothingToExport,
    #[error("Failed to write CSV: {0}")]
    Csv(String),
}
