//! Layout descriptor returned to the rendering layer.

use chrono::{DateTime, Utc};
use goal_model::GoalCategory;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::classifier::GoalFeatures;
use crate::composition::Placement;
use crate::config::Breakpoint;
use crate::props::WidgetProps;
use crate::types::{DashboardWarning, GridPosition};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// A widget on an assembled dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct LayoutWidget {
    pub widget_id: String,
    pub title: String,
    pub required: bool,
    pub props: WidgetProps,
    /// Descriptor default props, passed through for renderer options
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub options: serde_json::Value,
    pub placements: Vec<Placement>,
}

impl LayoutWidget {
    /// Position at the named breakpoint.
    pub fn position_for(&self, breakpoint: &str) -> Option<GridPosition> {
        self.placements
            .iter()
            .find(|p| p.breakpoint == breakpoint)
            .map(|p| p.position)
    }
}

/// Ordered, positioned widgets with resolved props for one goal.
///
/// Equality and [`fingerprint`](Self::fingerprint) ignore `evaluated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct LayoutDescriptor {
    pub goal_id: String,
    pub category: GoalCategory,
    pub evaluated_at: DateTime<Utc>,
    pub features: GoalFeatures,
    pub widgets: Vec<LayoutWidget>,
    pub breakpoints: Vec<Breakpoint>,
    pub warnings: Vec<DashboardWarning>,
}

impl LayoutDescriptor {
    pub fn widget(&self, id: &str) -> Option<&LayoutWidget> {
        self.widgets.iter().find(|w| w.widget_id == id)
    }

    pub fn widget_ids(&self) -> Vec<&str> {
        self.widgets.iter().map(|w| w.widget_id.as_str()).collect()
    }

    pub fn has_warning(&self, predicate: impl Fn(&DashboardWarning) -> bool) -> bool {
        self.warnings.iter().any(predicate)
    }

    /// SHA-256 of the JSON-serialized structure, hex encoded.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_vec(&self.structure()).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(&json);
        hex::encode(hasher.finalize())
    }

    fn structure(&self) -> Structure<'_> {
        Structure {
            goal_id: &self.goal_id,
            category: self.category,
            features: &self.features,
            widgets: &self.widgets,
            breakpoints: &self.breakpoints,
            warnings: &self.warnings,
        }
    }
}

impl PartialEq for LayoutDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.structure() == other.structure()
    }
}

/// Everything but the evaluation time.
#[derive(PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Structure<'a> {
    goal_id: &'a str,
    category: GoalCategory,
    features: &'a GoalFeatures,
    widgets: &'a [LayoutWidget],
    breakpoints: &'a [Breakpoint],
    warnings: &'a [DashboardWarning],
}
