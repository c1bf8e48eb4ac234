//! Enumerations shared across the workspace.
//!
//! With the `typescript` feature enabled, these types can be exported to
//! TypeScript using ts-rs so the rendering layer shares the same vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Error types for parsing goal records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Category string outside the fixed enumeration
    #[error("Unknown goal category: {0}")]
    UnknownCategory(String),

    /// Capability tag string outside the known set
    #[error("Unknown capability tag: {0}")]
    UnknownCapability(String),

    /// Priority string not recognized
    #[error("Unknown priority: {0}")]
    UnknownPriority(String),

    /// Status string not recognized
    #[error("Unknown goal status: {0}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// Lowercase and fold `-` and spaces into `_` so "Debt-Payoff" and
/// "debt payoff" parse the same way.
fn normalize_key(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

/// Goal category.
///
/// Raw goal records carry the category as a string; the dashboard classifier
/// maps anything outside this list to [`GoalCategory::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    // ========== Financial ==========
    Savings,
    Investment,
    DebtPayoff,

    // ========== Learning ==========
    Language,
    Education,
    SkillDevelopment,

    // ========== Health ==========
    WeightLoss,
    Fitness,
    Wellness,

    // ========== Travel ==========
    Travel,
    Immigration,

    // ========== Work ==========
    Career,
    Business,

    // ========== Personal ==========
    Habits,
    Creative,
    Reading,
    Relationships,
    General,
}

impl GoalCategory {
    /// Canonical snake_case name, as stored in goal records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Savings => "savings",
            Self::Investment => "investment",
            Self::DebtPayoff => "debt_payoff",
            Self::Language => "language",
            Self::Education => "education",
            Self::SkillDevelopment => "skill_development",
            Self::WeightLoss => "weight_loss",
            Self::Fitness => "fitness",
            Self::Wellness => "wellness",
            Self::Travel => "travel",
            Self::Immigration => "immigration",
            Self::Career => "career",
            Self::Business => "business",
            Self::Habits => "habits",
            Self::Creative => "creative",
            Self::Reading => "reading",
            Self::Relationships => "relationships",
            Self::General => "general",
        }
    }

    /// Whether progress on this category is measured in money.
    pub fn is_financial(&self) -> bool {
        matches!(self, Self::Savings | Self::Investment | Self::DebtPayoff)
    }

    /// Whether this category is typically tracked as a recurring habit.
    pub fn is_habitual(&self) -> bool {
        matches!(
            self,
            Self::Habits
                | Self::Fitness
                | Self::WeightLoss
                | Self::Wellness
                | Self::Language
                | Self::Reading
        )
    }

    /// All categories in declaration order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Savings,
            Self::Investment,
            Self::DebtPayoff,
            Self::Language,
            Self::Education,
            Self::SkillDevelopment,
            Self::WeightLoss,
            Self::Fitness,
            Self::Wellness,
            Self::Travel,
            Self::Immigration,
            Self::Career,
            Self::Business,
            Self::Habits,
            Self::Creative,
            Self::Reading,
            Self::Relationships,
            Self::General,
        ]
    }
}

impl Default for GoalCategory {
    fn default() -> Self {
        Self::General
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_key(s);
        let category = match key.as_str() {
            "savings" | "saving" => Self::Savings,
            "investment" | "investing" => Self::Investment,
            "debt_payoff" | "debt" => Self::DebtPayoff,
            "language" | "language_learning" => Self::Language,
            "education" => Self::Education,
            "skill_development" | "skills" => Self::SkillDevelopment,
            "weight_loss" => Self::WeightLoss,
            "fitness" => Self::Fitness,
            "wellness" => Self::Wellness,
            "travel" => Self::Travel,
            "immigration" => Self::Immigration,
            "career" => Self::Career,
            "business" => Self::Business,
            "habits" | "habit" => Self::Habits,
            "creative" => Self::Creative,
            "reading" => Self::Reading,
            "relationships" => Self::Relationships,
            "general" => Self::General,
            _ => return Err(ModelError::UnknownCategory(s.to_string())),
        };
        Ok(category)
    }
}

/// Capability tag linking a goal to a domain of expertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum CapabilityTag {
    Financial,
    Travel,
    Health,
    Learning,
    Research,
    Business,
    Weather,
    Legal,
}

impl CapabilityTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Travel => "travel",
            Self::Health => "health",
            Self::Learning => "learning",
            Self::Research => "research",
            Self::Business => "business",
            Self::Weather => "weather",
            Self::Legal => "legal",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Financial,
            Self::Travel,
            Self::Health,
            Self::Learning,
            Self::Research,
            Self::Business,
            Self::Weather,
            Self::Legal,
        ]
    }
}

impl fmt::Display for CapabilityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapabilityTag {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = match normalize_key(s).as_str() {
            "financial" | "finance" => Self::Financial,
            "travel" => Self::Travel,
            "health" => Self::Health,
            "learning" => Self::Learning,
            "research" => Self::Research,
            "business" => Self::Business,
            "weather" => Self::Weather,
            "legal" => Self::Legal,
            _ => return Err(ModelError::UnknownCapability(s.to_string())),
        };
        Ok(tag)
    }
}

/// Goal priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl FromStr for Priority {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_key(s).as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ModelError::UnknownPriority(s.to_string())),
        }
    }
}

/// Goal lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Planning,
    InProgress,
    Completed,
}

impl GoalStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Planning | Self::InProgress)
    }
}

impl Default for GoalStatus {
    fn default() -> Self {
        Self::Planning
    }
}

impl FromStr for GoalStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_key(s).as_str() {
            "planning" => Ok(Self::Planning),
            "in_progress" | "active" => Ok(Self::InProgress),
            "completed" | "done" => Ok(Self::Completed),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

/// Kind of debt, as recorded by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum DebtType {
    CreditCard,
    StudentLoan,
    AutoLoan,
    Mortgage,
    PersonalLoan,
    Medical,
    Other,
}

impl Default for DebtType {
    fn default() -> Self {
        Self::Other
    }
}
