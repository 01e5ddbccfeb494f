/// Stability the operator starts with; also the maximum score.
pub const MAX_STABILITY: u32 = 100;
/// Number of steps a play-through lasts when the grid holds.
pub const STEP_BUDGET: u32 = 100;
/// Output may lag demand by this much before the grid suffers.
pub const MISMATCH_THRESHOLD: f64 = 25.0;
/// Stability lost on every step the mismatch exceeds the threshold.
pub const MISMATCH_PENALTY: u32 = 2;

/// Lower bound of the operator-controlled output range.
pub const OUTPUT_MIN: f64 = 0.0;
/// Upper bound of the operator-controlled output range.
pub const OUTPUT_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// The operator sets the output by hand.
    Manual,
    /// The output tracks demand exactly every step.
    Assisted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridOutcome {
    /// The full step budget elapsed with stability remaining.
    Stable,
    /// Stability hit zero before the budget ran out.
    Blackout,
}

/// Power-grid balancing simulation.
///
/// Each tick the caller feeds in the hidden demand value for the
/// elapsed step count; the game compares it against the operator's
/// output and erodes stability on large mismatches. Switching to
/// assisted control is one-way within a play-through.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGame {
    tick: u32,
    output: f64,
    demand: f64,
    stability: u32,
    mode: ControlMode,
    outcome: Option<GridOutcome>,
}

impl Default for GridGame {
    fn default() -> Self {
        Self::new()
    }
}

impl GridGame {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick: 0,
            output: 50.0,
            demand: 50.0,
            stability: MAX_STABILITY,
            mode: ControlMode::Manual,
            outcome: None,
        }
    }

    #[must_use]
    pub fn tick(&self) -> u32 {
        self.tick
    }

    #[must_use]
    pub fn output(&self) -> f64 {
        self.output
    }

    /// The most recent demand value fed into `step`.
    #[must_use]
    pub fn demand(&self) -> f64 {
        self.demand
    }

    #[must_use]
    pub fn stability(&self) -> u32 {
        self.stability
    }

    #[must_use]
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GridOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Sets the manual output, clamped to the control range. Ignored in
    /// assisted mode and after the play-through ended.
    pub fn set_output(&mut self, value: f64) {
        if self.is_over() || self.mode == ControlMode::Assisted {
            return;
        }
        self.output = value.clamp(OUTPUT_MIN, OUTPUT_MAX);
    }

    /// Hands control to the autopilot. One-way: returning to manual
    /// requires a fresh play-through.
    pub fn engage_autopilot(&mut self) {
        if self.is_over() {
            return;
        }
        self.mode = ControlMode::Assisted;
    }

    /// Advances one step with the given demand value.
    ///
    /// A tick that arrives after the play-through ended is a benign
    /// no-op. Returns the outcome only on the step that terminates the
    /// play-through, so a caller reporting the result sees it exactly
    /// once.
    pub fn step(&mut self, demand: f64) -> Option<GridOutcome> {
        if self.is_over() {
            return None;
        }

        self.tick += 1;
        if self.tick >= STEP_BUDGET {
            self.demand = demand;
            if self.mode == ControlMode::Assisted {
                self.output = demand;
            }
            self.outcome = Some(GridOutcome::Stable);
            return self.outcome;
        }

        self.demand = demand;
        match self.mode {
            ControlMode::Assisted => {
                self.output = demand;
            }
            ControlMode::Manual => {
                if (self.output - demand).abs() > MISMATCH_THRESHOLD {
                    self.stability = self.stability.saturating_sub(MISMATCH_PENALTY);
                    if self.stability == 0 {
                        self.outcome = Some(GridOutcome::Blackout);
                        return self.outcome;
                    }
                }
            }
        }
        None
    }

    /// The final `(score, total)` pair: remaining stability on success,
    /// zero on blackout. Present only once terminal.
    #[must_use]
    pub fn result(&self) -> Option<(u32, u32)> {
        self.outcome.map(|outcome| match outcome {
            GridOutcome::Stable => (self.stability, MAX_STABILITY),
            GridOutcome::Blackout => (0, MAX_STABILITY),
        })
    }

    /// Returns to the initial manual state for a fresh play-through.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_within_threshold_keeps_stability() {
        let mut game = GridGame::new();
        game.set_output(50.0);
        for _ in 0..50 {
            assert_eq!(game.step(60.0), None);
        }
        assert_eq!(game.stability(), MAX_STABILITY);
    }

    #[test]
    fn mismatch_erodes_stability_per_step() {
        let mut game = GridGame::new();
        game.set_output(10.0);
        game.step(80.0);
        game.step(80.0);
        assert_eq!(game.stability(), MAX_STABILITY - 2 * MISMATCH_PENALTY);
    }

    #[test]
    fn blackout_the_instant_stability_reaches_zero() {
        let mut game = GridGame::new();
        game.set_output(0.0);
        let mut outcome = None;
        let mut steps = 0;
        while outcome.is_none() {
            outcome = game.step(90.0);
            steps += 1;
        }
        assert_eq!(outcome, Some(GridOutcome::Blackout));
        assert_eq!(game.stability(), 0);
        assert_eq!(steps, (MAX_STABILITY / MISMATCH_PENALTY) as usize);
        assert_eq!(game.result(), Some((0, MAX_STABILITY)));
    }

    #[test]
    fn surviving_the_budget_scores_remaining_stability() {
        let mut game = GridGame::new();
        game.set_output(50.0);
        // Two early mismatched steps, then tight tracking.
        game.step(90.0);
        game.step(90.0);
        let mut outcome = None;
        while outcome.is_none() {
            outcome = game.step(50.0);
        }
        assert_eq!(outcome, Some(GridOutcome::Stable));
        assert_eq!(game.result(), Some((MAX_STABILITY - 4, MAX_STABILITY)));
        assert_eq!(game.tick(), STEP_BUDGET);
    }

    #[test]
    fn assisted_mode_always_matches_demand() {
        let mut game = GridGame::new();
        game.engage_autopilot();
        for demand in [12.0, 88.0, 43.5] {
            game.step(demand);
            assert_eq!(game.output(), demand);
        }
        assert_eq!(game.stability(), MAX_STABILITY);
    }

    #[test]
    fn set_output_is_ignored_in_assisted_mode() {
        let mut game = GridGame::new();
        game.engage_autopilot();
        game.step(40.0);
        game.set_output(0.0);
        assert_eq!(game.output(), 40.0);
    }

    #[test]
    fn set_output_clamps_to_control_range() {
        let mut game = GridGame::new();
        game.set_output(250.0);
        assert_eq!(game.output(), OUTPUT_MAX);
        game.set_output(-3.0);
        assert_eq!(game.output(), OUTPUT_MIN);
    }

    #[test]
    fn late_ticks_are_noops() {
        let mut game = GridGame::new();
        game.set_output(0.0);
        while game.step(90.0).is_none() {}
        let ended_at = game.tick();

        assert_eq!(game.step(90.0), None);
        assert_eq!(game.tick(), ended_at);
        assert_eq!(game.result(), Some((0, MAX_STABILITY)));
    }

    #[test]
    fn reset_returns_to_manual_full_stability() {
        let mut game = GridGame::new();
        game.engage_autopilot();
        game.step(70.0);
        game.reset();
        assert_eq!(game.mode(), ControlMode::Manual);
        assert_eq!(game.stability(), MAX_STABILITY);
        assert_eq!(game.tick(), 0);
        assert!(!game.is_over());
    }
}
