//! Miette-based error diagnostics for CLI error presentation.
//!
//! A malformed snapshot record is shown with the offending line as source
//! and the failing field labelled.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::domain::{DomainError, RecordError};
use crate::error::Error;

/// Malformed snapshot record with the record line as source context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(eddep::malformed_record))]
pub struct RecordDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// The record line as read from the snapshot.
    #[source_code]
    pub src: String,

    /// The failing field, or the whole line when no single field is at fault.
    #[label("{label}")]
    pub span: SourceSpan,

    /// Label text attached to the span.
    pub label: String,

    #[help]
    pub help: Option<String>,
}

impl RecordDiagnostic {
    /// Build a diagnostic for a record read from `file`.
    #[must_use]
    pub fn new(file: &str, error: &RecordError) -> Self {
        let (offset, len) = field_span(&error.record, error.field());
        Self {
            message: format!("malformed record in {file}, row {}", error.row),
            src: error.record.clone(),
            span: (offset, len).into(),
            label: error.kind.to_string(),
            help: Some(
                "the snapshot looks corrupt; capture the station again or remove the file"
                    .to_string(),
            ),
        }
    }

    /// Diagnostic for `error` when it is a malformed record.
    #[must_use]
    pub fn from_error(error: &Error) -> Option<Self> {
        match error {
            Error::Domain(DomainError::MalformedRecord { file, source }) => {
                Some(Self::new(file, source))
            }
            _ => None,
        }
    }
}

/// Byte span of field `index` in a `;`-delimited record, or of the whole
/// record when `index` is `None` or out of range.
fn field_span(record: &str, index: Option<usize>) -> (usize, usize) {
    let whole = (0, record.len());
    let Some(index) = index else {
        return whole;
    };

    let mut offset = 0;
    for (position, field) in record.split(';').enumerate() {
        if position == index {
            return (offset, field.len());
        }
        offset += field.len() + 1;
    }
    whole
}
