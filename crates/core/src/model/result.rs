use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ModuleId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResultError {
    #[error("total must be positive")]
    ZeroTotal,

    #[error("score {score} exceeds total {total}")]
    ScoreOutOfRange { score: u32, total: u32 },
}

/// Final outcome of one module play-through.
///
/// Produced exactly once per completed play-through; a replay produces
/// a new value that replaces the old one in the session aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleResult {
    module: ModuleId,
    score: u32,
    total: u32,
    completed_at: DateTime<Utc>,
}

impl ModuleResult {
    /// Builds a validated result.
    ///
    /// # Errors
    ///
    /// Returns `ResultError::ZeroTotal` when `total` is zero and
    /// `ResultError::ScoreOutOfRange` when `score > total`.
    pub fn new(
        module: ModuleId,
        score: u32,
        total: u32,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, ResultError> {
        if total == 0 {
            return Err(ResultError::ZeroTotal);
        }
        if score > total {
            return Err(ResultError::ScoreOutOfRange { score, total });
        }

        Ok(Self {
            module,
            score,
            total,
            completed_at,
        })
    }

    #[must_use]
    pub fn module(&self) -> ModuleId {
        self.module
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Score as a rounded percentage of the total.
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.score * 200 + self.total) / (self.total * 2)
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score, self.total)
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}

/// Coarse rating of a (score, total) pair for result feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// Every point earned.
    Perfect,
    /// At least 70 percent.
    Good,
    /// At least 50 percent.
    Fair,
    /// Below 50 percent.
    Low,
}

impl ScoreBand {
    /// Bands a raw pair. A zero total is treated as `Low` rather than
    /// an error since this is display-only.
    #[must_use]
    pub fn for_score(score: u32, total: u32) -> Self {
        if total == 0 {
            return ScoreBand::Low;
        }
        if score >= total {
            ScoreBand::Perfect
        } else if score * 10 >= total * 7 {
            ScoreBand::Good
        } else if score * 2 >= total {
            ScoreBand::Fair
        } else {
            ScoreBand::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn rejects_zero_total() {
        let err = ModuleResult::new(ModuleId::Concepts, 0, 0, fixed_now()).unwrap_err();
        assert_eq!(err, ResultError::ZeroTotal);
    }

    #[test]
    fn rejects_score_above_total() {
        let err = ModuleResult::new(ModuleId::Concepts, 13, 12, fixed_now()).unwrap_err();
        assert!(matches!(
            err,
            ResultError::ScoreOutOfRange {
                score: 13,
                total: 12
            }
        ));
    }

    #[test]
    fn percent_rounds_to_nearest() {
        let result = ModuleResult::new(ModuleId::Concepts, 1, 3, fixed_now()).unwrap();
        assert_eq!(result.percent(), 33);
        let result = ModuleResult::new(ModuleId::Concepts, 2, 3, fixed_now()).unwrap();
        assert_eq!(result.percent(), 67);
    }

    #[test]
    fn banding_thresholds() {
        assert_eq!(ScoreBand::for_score(12, 12), ScoreBand::Perfect);
        assert_eq!(ScoreBand::for_score(9, 12), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(6, 12), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(5, 12), ScoreBand::Low);
        assert_eq!(ScoreBand::for_score(0, 0), ScoreBand::Low);
    }

    #[test]
    fn perfect_flag_matches_band() {
        let result = ModuleResult::new(ModuleId::Prompting, 3, 3, fixed_now()).unwrap();
        assert!(result.is_perfect());
        assert_eq!(result.band(), ScoreBand::Perfect);
    }
}
