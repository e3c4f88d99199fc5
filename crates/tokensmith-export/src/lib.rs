//! JSON export pipeline for tokensmith token stores.
//!
//! A pure transformation from a [`tokensmith_store::TokenStore`] to the
//! canonical `ExportDocument`, with pretty/minified serialization, key
//! naming-convention normalization, and file delivery.

mod document;
mod naming;

pub use document::{
    export, to_json_string, write_to_file, ExportBorders, ExportDocument, ExportFonts,
    ExportFormat, ExportMeta, ExportOptions, ExportTextStyle, ExportTypography, Num,
    EXPORT_FILENAME,
};
pub use naming::NamingConvention;

use thiserror::Error;

/// Errors during export delivery. Building the document itself cannot fail:
/// malformed values are rejected at the store's CRUD boundary.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
