use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("a slot game needs at least one role")]
    NoRoles,

    #[error("item {item} references unknown role {role}")]
    BadItemRole { item: usize, role: usize },

    #[error("role {0} has no matching item in the pool")]
    MissingRoleItem(usize),

    #[error("role {0} has more than one matching item in the pool")]
    DuplicateRoleItem(usize),

    #[error("unknown item index {0}")]
    UnknownItem(usize),

    #[error("unknown slot index {0}")]
    UnknownSlot(usize),

    #[error("every slot must be filled before submitting")]
    Incomplete,

    #[error("already submitted; reset to play again")]
    Submitted,
}

/// A pool entry: either the good item for one role, or a distractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotItem {
    text: String,
    role: Option<usize>,
}

impl SlotItem {
    /// The good item for the given role.
    #[must_use]
    pub fn good(text: impl Into<String>, role: usize) -> Self {
        Self {
            text: text.into(),
            role: Some(role),
        }
    }

    /// A distractor that belongs in no slot.
    #[must_use]
    pub fn distractor(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: None,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn role(&self) -> Option<usize> {
        self.role
    }
}

/// Fixed-role slot-matching game.
///
/// A shuffled pool of good items (one per role) and distractors must
/// be placed into the labeled slots. A slot holds at most one item;
/// placing into an occupied slot silently replaces the occupant, and
/// an item moved into a new slot vacates its old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGame {
    roles: Vec<String>,
    pool: Vec<SlotItem>,
    placements: Vec<Option<usize>>,
    submitted: bool,
}

impl SlotGame {
    /// # Errors
    ///
    /// Returns a `SlotError` when the role list is empty, an item
    /// references a role out of range, or a role does not have exactly
    /// one good item in the pool.
    pub fn new(roles: Vec<String>, pool: Vec<SlotItem>) -> Result<Self, SlotError> {
        if roles.is_empty() {
            return Err(SlotError::NoRoles);
        }
        for (index, item) in pool.iter().enumerate() {
            if let Some(role) = item.role {
                if role >= roles.len() {
                    return Err(SlotError::BadItemRole { item: index, role });
                }
            }
        }
        for role in 0..roles.len() {
            let count = pool.iter().filter(|item| item.role == Some(role)).count();
            match count {
                0 => return Err(SlotError::MissingRoleItem(role)),
                1 => {}
                _ => return Err(SlotError::DuplicateRoleItem(role)),
            }
        }

        let placements = vec![None; roles.len()];
        Ok(Self {
            roles,
            pool,
            placements,
            submitted: false,
        })
    }

    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    #[must_use]
    pub fn pool(&self) -> &[SlotItem] {
        &self.pool
    }

    /// The pool index placed in a slot, if any.
    #[must_use]
    pub fn placement(&self, slot: usize) -> Option<usize> {
        self.placements.get(slot).copied().flatten()
    }

    /// The item placed in a slot, if any.
    #[must_use]
    pub fn placed_item(&self, slot: usize) -> Option<&SlotItem> {
        self.placement(slot).and_then(|index| self.pool.get(index))
    }

    /// Whether a pool item currently sits in any slot.
    #[must_use]
    pub fn is_placed(&self, item: usize) -> bool {
        self.placements.contains(&Some(item))
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whether every slot is filled (the submit precondition).
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.placements.iter().all(Option::is_some)
    }

    /// Places a pool item into a slot, vacating the item's previous
    /// slot and replacing any current occupant.
    ///
    /// # Errors
    ///
    /// Returns `SlotError::Submitted`, `UnknownItem` or `UnknownSlot`.
    pub fn place(&mut self, item: usize, slot: usize) -> Result<(), SlotError> {
        if self.submitted {
            return Err(SlotError::Submitted);
        }
        if item >= self.pool.len() {
            return Err(SlotError::UnknownItem(item));
        }
        if slot >= self.roles.len() {
            return Err(SlotError::UnknownSlot(slot));
        }
        for placement in &mut self.placements {
            if *placement == Some(item) {
                *placement = None;
            }
        }
        self.placements[slot] = Some(item);
        Ok(())
    }

    /// Freezes the game and returns the final `(score, total)` pair.
    ///
    /// # Errors
    ///
    /// Returns `SlotError::Incomplete` when a slot is empty and
    /// `SlotError::Submitted` on a repeat call.
    pub fn submit(&mut self) -> Result<(u32, u32), SlotError> {
        if self.submitted {
            return Err(SlotError::Submitted);
        }
        if !self.is_ready() {
            return Err(SlotError::Incomplete);
        }
        self.submitted = true;
        Ok((self.score(), self.total()))
    }

    /// Correctness of a slot's occupant, available after submission.
    #[must_use]
    pub fn slot_correct(&self, slot: usize) -> Option<bool> {
        if !self.submitted {
            return None;
        }
        let item = self.placed_item(slot)?;
        Some(item.role == Some(slot))
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.placements
            .iter()
            .enumerate()
            .filter(|(slot, placement)| {
                placement
                    .and_then(|index| self.pool.get(index))
                    .is_some_and(|item| item.role == Some(*slot))
            })
            .count() as u32
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.roles.len() as u32
    }

    /// The final result, present only once submitted.
    #[must_use]
    pub fn result(&self) -> Option<(u32, u32)> {
        self.submitted.then(|| (self.score(), self.total()))
    }

    /// The distinguished fully-correct outcome.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.submitted && self.score() == self.total()
    }

    /// Empties every slot and un-submits for a fresh play-through.
    pub fn reset(&mut self) {
        for placement in &mut self.placements {
            *placement = None;
        }
        self.submitted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> SlotGame {
        // Pool order: good role 0, good role 1, good role 2, then
        // three distractors.
        SlotGame::new(
            vec!["role".into(), "context".into(), "format".into()],
            vec![
                SlotItem::good("you are a senior grid engineer", 0),
                SlotItem::good("a storm severed a 154 kV line", 1),
                SlotItem::good("write the recovery steps as a checklist", 2),
                SlotItem::distractor("just write something"),
                SlotItem::distractor("make it good somehow"),
                SlotItem::distractor("figure it out yourself"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn pool_must_cover_every_role_exactly_once() {
        let missing = SlotGame::new(
            vec!["a".into(), "b".into()],
            vec![SlotItem::good("x", 0)],
        )
        .unwrap_err();
        assert_eq!(missing, SlotError::MissingRoleItem(1));

        let duplicate = SlotGame::new(
            vec!["a".into()],
            vec![SlotItem::good("x", 0), SlotItem::good("y", 0)],
        )
        .unwrap_err();
        assert_eq!(duplicate, SlotError::DuplicateRoleItem(0));
    }

    #[test]
    fn placing_vacates_previous_slot() {
        let mut game = game();
        game.place(0, 0).unwrap();
        game.place(0, 2).unwrap();
        assert_eq!(game.placement(0), None);
        assert_eq!(game.placement(2), Some(0));
    }

    #[test]
    fn placing_replaces_occupant_deterministically() {
        let mut game = game();
        game.place(3, 1).unwrap();
        game.place(1, 1).unwrap();
        assert_eq!(game.placement(1), Some(1));
        assert!(!game.is_placed(3));
    }

    #[test]
    fn submit_requires_all_slots_filled() {
        let mut game = game();
        game.place(0, 0).unwrap();
        game.place(1, 1).unwrap();
        assert_eq!(game.submit().unwrap_err(), SlotError::Incomplete);
    }

    #[test]
    fn perfect_placement_flips_the_distinguished_state() {
        let mut game = game();
        game.place(0, 0).unwrap();
        game.place(1, 1).unwrap();
        game.place(2, 2).unwrap();
        assert_eq!(game.submit().unwrap(), (3, 3));
        assert!(game.is_perfect());
        assert_eq!(game.slot_correct(0), Some(true));
    }

    #[test]
    fn distractors_and_misplaced_goods_score_zero() {
        let mut game = game();
        game.place(3, 0).unwrap();
        game.place(2, 1).unwrap();
        game.place(4, 2).unwrap();
        assert_eq!(game.submit().unwrap(), (0, 3));
        assert!(!game.is_perfect());
        assert_eq!(game.slot_correct(1), Some(false));
    }

    #[test]
    fn submitted_state_rejects_placement() {
        let mut game = game();
        game.place(0, 0).unwrap();
        game.place(1, 1).unwrap();
        game.place(2, 2).unwrap();
        game.submit().unwrap();
        assert_eq!(game.place(3, 0).unwrap_err(), SlotError::Submitted);
        assert_eq!(game.submit().unwrap_err(), SlotError::Submitted);
    }

    #[test]
    fn correctness_is_hidden_before_submit() {
        let mut game = game();
        game.place(0, 0).unwrap();
        assert_eq!(game.slot_correct(0), None);
    }

    #[test]
    fn reset_clears_placements() {
        let mut game = game();
        game.place(0, 0).unwrap();
        game.place(1, 1).unwrap();
        game.place(2, 2).unwrap();
        game.submit().unwrap();

        game.reset();
        assert!(!game.is_submitted());
        assert_eq!(game.placement(0), None);
        assert_eq!(game.result(), None);
        game.place(5, 0).unwrap();
    }
}
