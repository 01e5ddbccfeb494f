use std::collections::BTreeMap;

use crate::model::{ModuleId, ModuleResult};

/// Latest result per module for the current session.
///
/// Lifetime is one process run; nothing is persisted. The aggregate
/// figures are recomputed from the mapping on every read so they can
/// never drift from the stored results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionProgress {
    results: BTreeMap<ModuleId, ModuleResult>,
}

impl SessionProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a module result, replacing any earlier result for the
    /// same module. Last write wins; no history is kept.
    pub fn report(&mut self, result: ModuleResult) {
        self.results.insert(result.module(), result);
    }

    #[must_use]
    pub fn result(&self, module: ModuleId) -> Option<&ModuleResult> {
        self.results.get(&module)
    }

    /// Whether the module has been completed at least once.
    #[must_use]
    pub fn completed(&self, module: ModuleId) -> bool {
        self.results.contains_key(&module)
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.results.values().map(ModuleResult::score).sum()
    }

    #[must_use]
    pub fn total_possible(&self) -> u32 {
        self.results.values().map(ModuleResult::total).sum()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.results.len()
    }

    /// True once every module has reported at least one result.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_count() == ModuleId::ALL.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleResult> {
        self.results.values()
    }
}
