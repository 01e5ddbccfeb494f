use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for one of the five learning modules.
///
/// The set is closed: every scored mini-game belongs to exactly one of
/// these, and the session aggregator keys its results by this id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    /// AI concepts and history (quiz).
    Concepts,
    /// How language models work (category assignment).
    Mechanics,
    /// AI on the power grid (control simulation).
    Applications,
    /// Prompt construction (slot matching).
    Prompting,
    /// Safe usage and security (request triage).
    Ethics,
}

impl ModuleId {
    /// All modules, in tab order.
    pub const ALL: [ModuleId; 5] = [
        ModuleId::Concepts,
        ModuleId::Mechanics,
        ModuleId::Applications,
        ModuleId::Prompting,
        ModuleId::Ethics,
    ];

    /// Human-readable tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ModuleId::Concepts => "AI Concepts & History",
            ModuleId::Mechanics => "How AI Works",
            ModuleId::Applications => "AI in the Field",
            ModuleId::Prompting => "Prompting Tips",
            ModuleId::Ethics => "AI Cautions",
        }
    }

    /// Short label for narrow tab bars.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            ModuleId::Concepts => "Concepts",
            ModuleId::Mechanics => "Mechanics",
            ModuleId::Applications => "Applications",
            ModuleId::Prompting => "Prompting",
            ModuleId::Ethics => "Cautions",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ModuleId::Concepts => "concepts",
            ModuleId::Mechanics => "mechanics",
            ModuleId::Applications => "applications",
            ModuleId::Prompting => "prompting",
            ModuleId::Ethics => "ethics",
        }
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({})", self.as_str())
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing a `ModuleId` from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModuleIdError {
    raw: String,
}

impl fmt::Display for ParseModuleIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown module id: {}", self.raw)
    }
}

impl std::error::Error for ParseModuleIdError {}

impl FromStr for ModuleId {
    type Err = ParseModuleIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseModuleIdError { raw: s.to_string() })
    }
}
