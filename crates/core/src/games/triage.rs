use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TriageError {
    #[error("a triage game needs at least one card")]
    NoCards,
}

/// The two verdicts the player can hand down on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageAction {
    /// The request is unsafe and should be refused.
    Block,
    /// The request is fine to answer.
    Allow,
}

/// One request card with its ground-truth label and rationale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageCard {
    text: String,
    risky: bool,
    reason: String,
}

impl TriageCard {
    #[must_use]
    pub fn new(text: impl Into<String>, risky: bool, reason: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            risky,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The ground-truth label: `true` means the card deserves `Block`.
    #[must_use]
    pub fn risky(&self) -> bool {
        self.risky
    }

    /// Shown in the review once the card has been judged.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// One committed verdict, kept for the post-game review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judgment {
    action: TriageAction,
    correct: bool,
}

impl Judgment {
    #[must_use]
    pub fn action(&self) -> TriageAction {
        self.action
    }

    #[must_use]
    pub fn correct(&self) -> bool {
        self.correct
    }
}

/// One-pass card triage game.
///
/// Cards are judged in order, one verdict each, no revisiting. The
/// judgment log grows by exactly one entry per verdict and doubles as
/// the review transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageGame {
    cards: Vec<TriageCard>,
    judged: Vec<Judgment>,
}

impl TriageGame {
    /// # Errors
    ///
    /// Returns `TriageError::NoCards` for an empty deck.
    pub fn new(cards: Vec<TriageCard>) -> Result<Self, TriageError> {
        if cards.is_empty() {
            return Err(TriageError::NoCards);
        }
        Ok(Self {
            cards,
            judged: Vec::new(),
        })
    }

    #[must_use]
    pub fn cards(&self) -> &[TriageCard] {
        &self.cards
    }

    /// The card awaiting a verdict, `None` once every card is judged.
    #[must_use]
    pub fn current(&self) -> Option<&TriageCard> {
        self.cards.get(self.judged.len())
    }

    /// Verdicts so far, in card order.
    #[must_use]
    pub fn judgments(&self) -> &[Judgment] {
        &self.judged
    }

    /// Judged cards paired with their verdicts, for the review list.
    pub fn review(&self) -> impl Iterator<Item = (&TriageCard, &Judgment)> {
        self.cards.iter().zip(&self.judged)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.judged.len() == self.cards.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.judged.iter().filter(|j| j.correct).count() as u32
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.cards.len() as u32
    }

    /// Commits a verdict on the current card.
    ///
    /// A verdict after the last card is a no-op. Returns the final
    /// `(score, total)` pair on the call that judges the last card,
    /// and `None` otherwise.
    pub fn judge(&mut self, action: TriageAction) -> Option<(u32, u32)> {
        let card = self.cards.get(self.judged.len())?;
        let correct = (action == TriageAction::Block) == card.risky;
        self.judged.push(Judgment { action, correct });

        if self.is_finished() {
            return Some((self.score(), self.total()));
        }
        None
    }

    /// The final result, present only once every card is judged.
    #[must_use]
    pub fn result(&self) -> Option<(u32, u32)> {
        self.is_finished().then(|| (self.score(), self.total()))
    }

    /// Clears the judgment log for a fresh pass over the same deck.
    pub fn reset(&mut self) {
        self.judged.clear();
    }
}
