//! Shared error types for the services crate.

use thiserror::Error;

use literacy_core::games::{AssignmentError, QuizError, SlotError, TriageError};

/// Errors emitted while building content from the catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error(transparent)]
    Triage(#[from] TriageError),
}
