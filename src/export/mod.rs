//! Export sinks for projection tables
//!
//! A sink accepts the computed rows and aggregates plus any rendered chart
//! images, and returns a byte blob in its target format. The projection engine
//! has no dependency on any document library; a failing sink leaves the
//! already-computed result untouched.

mod csv;
mod xlsx;

pub use self::csv::CsvSink;
pub use self::xlsx::XlsxSink;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::projection::ProjectionResult;

/// Errors produced while serializing a projection table
#[derive(Debug, Error)]
pub enum ExportError {
    /// Spreadsheet writer failure
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// CSV writer failure
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run-level metadata stamped into exported documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Document title
    pub title: String,

    /// When the projection was generated
    pub generated_at: DateTime<Utc>,
}

impl RunMetadata {
    /// Create metadata stamped with the current time
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            generated_at: Utc::now(),
        }
    }
}

/// A rendered chart image ready for embedding
#[derive(Debug, Clone)]
pub struct ChartImage {
    /// Chart name, used as a sheet or caption label
    pub name: String,

    /// PNG-encoded image bytes
    pub png: Vec<u8>,
}

/// A serialization target for projection output.
///
/// Implementations that cannot embed images simply ignore `charts`.
pub trait TableSink {
    /// Serialize the result set into the sink's format
    fn render(
        &self,
        result: &ProjectionResult,
        meta: &RunMetadata,
        charts: &[ChartImage],
    ) -> Result<Vec<u8>, ExportError>;
}
