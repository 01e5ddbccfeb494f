use thiserror::Error;

use crate::games::{AssignmentError, QuizError, SlotError, TriageError};
use crate::model::ResultError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Result(#[from] ResultError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error(transparent)]
    Triage(#[from] TriageError),
}
