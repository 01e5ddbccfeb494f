use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("an assignment game needs at least two categories, got {0}")]
    TooFewCategories(usize),

    #[error("an assignment game needs at least one item")]
    NoItems,

    #[error("item {item} references unknown category {category}")]
    BadItemCategory { item: usize, category: usize },

    #[error("unknown item index {0}")]
    UnknownItem(usize),

    #[error("unknown category index {0}")]
    UnknownCategory(usize),

    #[error("every item must be assigned before submitting")]
    Incomplete,

    #[error("already submitted; reset to play again")]
    Submitted,
}

/// One item to be filed under its correct category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentItem {
    text: String,
    category: usize,
}

impl AssignmentItem {
    #[must_use]
    pub fn new(text: impl Into<String>, category: usize) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn category(&self) -> usize {
        self.category
    }
}

/// Assign-to-category game.
///
/// Items may be reassigned freely until submission; submitting
/// requires every item to carry an assignment and freezes the state
/// into a read-only review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentGame {
    categories: Vec<String>,
    items: Vec<AssignmentItem>,
    assignments: Vec<Option<usize>>,
    submitted: bool,
}

impl AssignmentGame {
    /// # Errors
    ///
    /// Returns an `AssignmentError` when the category list is too
    /// short, the item list is empty, or an item references a category
    /// that does not exist.
    pub fn new(
        categories: Vec<String>,
        items: Vec<AssignmentItem>,
    ) -> Result<Self, AssignmentError> {
        if categories.len() < 2 {
            return Err(AssignmentError::TooFewCategories(categories.len()));
        }
        if items.is_empty() {
            return Err(AssignmentError::NoItems);
        }
        for (index, item) in items.iter().enumerate() {
            if item.category >= categories.len() {
                return Err(AssignmentError::BadItemCategory {
                    item: index,
                    category: item.category,
                });
            }
        }

        let assignments = vec![None; items.len()];
        Ok(Self {
            categories,
            items,
            assignments,
            submitted: false,
        })
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn items(&self) -> &[AssignmentItem] {
        &self.items
    }

    #[must_use]
    pub fn assignment(&self, item: usize) -> Option<usize> {
        self.assignments.get(item).copied().flatten()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whether every item carries an assignment (the submit precondition).
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.assignments.iter().all(Option::is_some)
    }

    /// Assigns or reassigns an item. Rejected once submitted.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentError::Submitted`, `UnknownItem` or
    /// `UnknownCategory`.
    pub fn assign(&mut self, item: usize, category: usize) -> Result<(), AssignmentError> {
        if self.submitted {
            return Err(AssignmentError::Submitted);
        }
        if item >= self.items.len() {
            return Err(AssignmentError::UnknownItem(item));
        }
        if category >= self.categories.len() {
            return Err(AssignmentError::UnknownCategory(category));
        }
        self.assignments[item] = Some(category);
        Ok(())
    }

    /// Removes an item's assignment before submission.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentError::Submitted` or `UnknownItem`.
    pub fn clear(&mut self, item: usize) -> Result<(), AssignmentError> {
        if self.submitted {
            return Err(AssignmentError::Submitted);
        }
        if item >= self.items.len() {
            return Err(AssignmentError::UnknownItem(item));
        }
        self.assignments[item] = None;
        Ok(())
    }

    /// Freezes the game and returns the final `(score, total)` pair.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentError::Incomplete` when an item is
    /// unassigned and `AssignmentError::Submitted` on a repeat call.
    pub fn submit(&mut self) -> Result<(u32, u32), AssignmentError> {
        if self.submitted {
            return Err(AssignmentError::Submitted);
        }
        if !self.is_ready() {
            return Err(AssignmentError::Incomplete);
        }
        self.submitted = true;
        Ok((self.score(), self.total()))
    }

    /// Correctness of an item's assignment, available after submission.
    #[must_use]
    pub fn correct(&self, item: usize) -> Option<bool> {
        if !self.submitted {
            return None;
        }
        let expected = self.items.get(item)?.category;
        Some(self.assignment(item) == Some(expected))
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.items
            .iter()
            .zip(&self.assignments)
            .filter(|(item, assigned)| **assigned == Some(item.category))
            .count() as u32
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.items.len() as u32
    }

    /// The final result, present only once submitted.
    #[must_use]
    pub fn result(&self) -> Option<(u32, u32)> {
        self.submitted.then(|| (self.score(), self.total()))
    }

    /// Clears all assignments and un-submits for a fresh play-through.
    pub fn reset(&mut self) {
        for slot in &mut self.assignments {
            *slot = None;
        }
        self.submitted = false;
    }
}
