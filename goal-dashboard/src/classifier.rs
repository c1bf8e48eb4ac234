//! Goal classification.
//!
//! Turns a raw goal record into the normalized feature set that widget
//! eligibility predicates are evaluated against.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use goal_model::{CapabilityTag, Goal, GoalCategory};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ClassifierConfig;
use crate::types::CostBracket;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Normalized view of a goal used for widget selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct GoalFeatures {
    pub goal_id: String,
    pub category: GoalCategory,
    /// Raw category string when it fell back to `general`
    pub unknown_category: Option<String>,
    /// Target date present and after evaluation time
    pub has_deadline: bool,
    pub cost_bracket: Option<CostBracket>,
    pub estimated_cost: Option<f64>,
    pub capabilities: BTreeSet<CapabilityTag>,
    /// `current_saved / estimated_cost`; may exceed 1
    pub progress_ratio: f64,
}

/// Classifies goals using configurable cost brackets.
#[derive(Debug, Clone, Default)]
pub struct GoalClassifier {
    config: ClassifierConfig,
}

impl GoalClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Derive features for `goal` as of `now`.
    pub fn classify(&self, goal: &Goal, now: DateTime<Utc>) -> GoalFeatures {
        let (category, unknown_category) = match goal.category.parse::<GoalCategory>() {
            Ok(category) => (category, None),
            Err(_) => {
                warn!(
                    goal_id = %goal.id,
                    category = %goal.category,
                    "Unknown goal category, falling back to general"
                );
                (GoalCategory::General, Some(goal.category.clone()))
            }
        };

        let estimated_cost = goal
            .estimated_cost
            .filter(|cost| cost.is_finite() && *cost > 0.0);

        let progress_ratio = match estimated_cost {
            Some(cost) if goal.current_saved.is_finite() => goal.current_saved.max(0.0) / cost,
            _ => 0.0,
        };

        GoalFeatures {
            goal_id: goal.id.clone(),
            category,
            unknown_category,
            has_deadline: goal.target_date.is_some_and(|target| target > now),
            cost_bracket: estimated_cost.map(|cost| self.bracket_for(cost)),
            estimated_cost,
            capabilities: self.capabilities(goal),
            progress_ratio,
        }
    }

    /// Bracket for a positive cost.
    pub fn bracket_for(&self, cost: f64) -> CostBracket {
        if cost >= self.config.premium_from {
            CostBracket::Premium
        } else if cost >= self.config.high_from {
            CostBracket::High
        } else if cost >= self.config.medium_from {
            CostBracket::Medium
        } else {
            CostBracket::Low
        }
    }

    fn capabilities(&self, goal: &Goal) -> BTreeSet<CapabilityTag> {
        goal.assigned_capabilities
            .iter()
            .filter_map(|raw| match raw.parse::<CapabilityTag>() {
                Ok(tag) => Some(tag),
                Err(_) => {
                    debug!(goal_id = %goal.id, tag = %raw, "Dropping unknown capability tag");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_known_category() {
        let goal = Goal::new("Pay off cards", GoalCategory::DebtPayoff);
        let features = GoalClassifier::new().classify(&goal, now());
        assert_eq!(features.category, GoalCategory::DebtPayoff);
        assert!(features.unknown_category.is_none());
    }

    #[test]
    fn test_unknown_category_falls_back_to_general() {
        let goal = Goal::new("Moon base", GoalCategory::General).with_raw_category("space_colony");
        let features = GoalClassifier::new().classify(&goal, now());
        assert_eq!(features.category, GoalCategory::General);
        assert_eq!(features.unknown_category.as_deref(), Some("space_colony"));
    }

    #[test]
    fn test_deadline_must_be_in_the_future() {
        let classifier = GoalClassifier::new();
        let base = Goal::new("Trip", GoalCategory::Travel);

        assert!(!classifier.classify(&base, now()).has_deadline);

        let future = base.clone().with_target_date(now() + Duration::days(30));
        assert!(classifier.classify(&future, now()).has_deadline);

        let today = base.clone().with_target_date(now());
        assert!(!classifier.classify(&today, now()).has_deadline);

        let past = base.with_target_date(now() - Duration::days(1));
        assert!(!classifier.classify(&past, now()).has_deadline);
    }

    #[test]
    fn test_cost_brackets() {
        let classifier = GoalClassifier::new();
        assert_eq!(classifier.bracket_for(500.0), CostBracket::Low);
        assert_eq!(classifier.bracket_for(1_000.0), CostBracket::Medium);
        assert_eq!(classifier.bracket_for(25_000.0), CostBracket::High);
        assert_eq!(classifier.bracket_for(50_000.0), CostBracket::Premium);

        let free = Goal::new("Read more", GoalCategory::Reading).with_estimated_cost(0.0);
        let features = classifier.classify(&free, now());
        assert_eq!(features.cost_bracket, None);
        assert_eq!(features.estimated_cost, None);
    }

    #[test]
    fn test_custom_brackets() {
        let classifier = GoalClassifier::with_config(ClassifierConfig {
            medium_from: 100.0,
            high_from: 200.0,
            premium_from: 300.0,
        });
        assert_eq!(classifier.bracket_for(250.0), CostBracket::High);
    }

    #[test]
    fn test_capabilities_are_parsed_and_deduplicated() {
        let goal = Goal::new("Relocate", GoalCategory::Immigration).with_capabilities([
            "legal",
            "Travel",
            "travel",
            "astrology",
        ]);
        let features = GoalClassifier::new().classify(&goal, now());
        let tags: Vec<_> = features.capabilities.into_iter().collect();
        assert_eq!(tags, vec![CapabilityTag::Travel, CapabilityTag::Legal]);
    }

    #[test]
    fn test_progress_ratio_can_exceed_one() {
        let goal = Goal::new("Laptop", GoalCategory::Savings)
            .with_estimated_cost(2_000.0)
            .with_current_saved(2_500.0);
        let features = GoalClassifier::new().classify(&goal, now());
        assert_eq!(features.progress_ratio, 1.25);

        let no_cost = Goal::new("Laptop", GoalCategory::Savings).with_current_saved(300.0);
        assert_eq!(GoalClassifier::new().classify(&no_cost, now()).progress_ratio, 0.0);
    }
}
