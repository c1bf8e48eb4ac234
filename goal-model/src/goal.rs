//! The goal aggregate root.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::progress::DomainProgress;
use crate::types::{GoalCategory, GoalStatus, Priority};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// A personal goal, as snapshotted from the persistence layer.
///
/// `category` and `assigned_capabilities` stay as raw strings here: records
/// written by older clients may hold values outside the current enumerations,
/// and normalizing them is the dashboard classifier's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Raw category string
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
    /// Amount saved so far; may exceed `estimated_cost`
    #[serde(default)]
    pub current_saved: f64,
    #[serde(default)]
    pub target_date: Option<DateTime<Utc>>,
    /// Raw capability tag strings
    #[serde(default)]
    pub assigned_capabilities: Vec<String>,
    /// Advisory achievability rating (0-100)
    #[serde(default)]
    pub feasibility_score: Option<u8>,
    #[serde(default)]
    pub smart_goal_data: Option<SmartGoalData>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a goal with a fresh id and default state.
    pub fn new(title: impl Into<String>, category: GoalCategory) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            category: category.as_str().to_string(),
            priority: Priority::default(),
            status: GoalStatus::default(),
            estimated_cost: None,
            current_saved: 0.0,
            target_date: None,
            assigned_capabilities: Vec::new(),
            feasibility_score: None,
            smart_goal_data: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder: set the id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder: set a raw category string, bypassing the enumeration.
    pub fn with_raw_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder: set priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Builder: set status.
    pub fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder: set estimated cost.
    pub fn with_estimated_cost(mut self, cost: f64) -> Self {
        self.estimated_cost = Some(cost);
        self
    }

    /// Builder: set amount saved so far.
    pub fn with_current_saved(mut self, saved: f64) -> Self {
        self.current_saved = saved;
        self
    }

    /// Builder: set target date.
    pub fn with_target_date(mut self, target: DateTime<Utc>) -> Self {
        self.target_date = Some(target);
        self
    }

    /// Builder: set assigned capability tags.
    pub fn with_capabilities<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assigned_capabilities = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set feasibility score (clamped to 100).
    pub fn with_feasibility_score(mut self, score: u8) -> Self {
        self.feasibility_score = Some(score.min(100));
        self
    }

    /// Builder: set SMART annotation.
    pub fn with_smart_data(mut self, data: SmartGoalData) -> Self {
        self.smart_goal_data = Some(data);
        self
    }

    /// Per-domain progress payload, if any.
    pub fn progress(&self) -> Option<&DomainProgress> {
        self.smart_goal_data.as_ref().and_then(|s| s.progress.as_ref())
    }
}

/// SMART annotation attached to a goal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct SmartGoalData {
    pub specific: Option<String>,
    pub measurable: Option<String>,
    pub achievable: Option<String>,
    pub relevant: Option<String>,
    pub timebound: Option<String>,
    pub progress: Option<DomainProgress>,
}

impl SmartGoalData {
    /// Builder: attach a progress payload.
    pub fn with_progress(mut self, progress: DomainProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Number of SMART fields with non-blank text (0-5).
    pub fn completeness(&self) -> u8 {
        [
            &self.specific,
            &self.measurable,
            &self.achievable,
            &self.relevant,
            &self.timebound,
        ]
        .iter()
        .filter(|field| field.as_deref().is_some_and(|s| !s.trim().is_empty()))
        .count() as u8
    }
}
