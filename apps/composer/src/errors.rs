//! Boundary error type.
//!
//! The core pipeline is total over its inputs and never surfaces an error:
//! missing sections degrade to defaults, unmatched placeholders pass through,
//! oversized certification lists are truncated. Only the edges can fail:
//! template resolution and file I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
