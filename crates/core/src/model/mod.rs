mod module;
mod progress;
mod result;

pub use module::{ModuleId, ParseModuleIdError};
pub use progress::SessionProgress;
pub use result::{ModuleResult, ResultError, ScoreBand};
