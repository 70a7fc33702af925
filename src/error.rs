//! # Error Types
//!
//! This module defines error types used throughout the factura library.

use thiserror::Error;

/// Main error type for factura operations
#[derive(Debug, Error)]
pub enum FacturaError {
    /// PDF document assembly or serialization error
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Signature image decoding or conversion error
    #[error("Image error: {0}")]
    Image(String),

    /// A numeric field rejected by strict validation
    #[error("Invalid {field}: {value:?}")]
    InvalidAmount {
        field: &'static str,
        value: String,
    },

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
