//! The five mini-game state machines.
//!
//! Each game is a plain struct with pure transition methods, owned by
//! exactly one UI component instance and testable without a rendering
//! layer. Methods that can complete a play-through return the final
//! `(score, total)` pair on the transition into the terminal state, so
//! a caller reporting upward cannot double-report.

pub mod assignment;
pub mod grid;
pub mod quiz;
pub mod slots;
pub mod triage;

pub use assignment::{AssignmentError, AssignmentGame, AssignmentItem};
pub use grid::{ControlMode, GridGame, GridOutcome};
pub use quiz::{Question, QuizError, QuizGame};
pub use slots::{SlotError, SlotGame, SlotItem};
pub use triage::{Judgment, TriageAction, TriageCard, TriageError, TriageGame};
