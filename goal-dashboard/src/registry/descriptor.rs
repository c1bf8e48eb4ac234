//! Widget descriptors and eligibility predicates.

use goal_model::{CapabilityTag, GoalCategory};
use serde::{Deserialize, Serialize};

use crate::classifier::GoalFeatures;
use crate::types::{CostBracket, GridSpan};

/// Which prop resolver fills a widget's props.
///
/// Renderers bind to widget ids, not to this kind; several widgets may share
/// one resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropsKind {
    GoalOverview,
    OverallProgress,
    SmartSummary,
    SavingsPlan,
    DebtPayoff,
    Budget,
    Streak,
    Milestones,
    DeadlineCountdown,
    Feasibility,
    AgentActivity,
    /// Only the descriptor's default props template
    Static,
}

/// Goal attributes a widget requires. Every specified clause must hold;
/// an empty clause places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Eligibility {
    /// Goal category must be one of these
    pub categories: Vec<GoalCategory>,
    /// Goal must carry at least one of these tags
    pub capabilities: Vec<CapabilityTag>,
    /// Estimated cost must be at least this amount
    pub min_estimated_cost: Option<f64>,
    /// Cost bracket must be at least this one
    pub min_cost_bracket: Option<CostBracket>,
    /// Goal must have a target date in the future
    pub requires_deadline: bool,
}

impl Eligibility {
    /// No constraints.
    pub fn any() -> Self {
        Self::default()
    }

    /// Builder: restrict to categories.
    pub fn in_categories(mut self, categories: impl IntoIterator<Item = GoalCategory>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Builder: require one of these capability tags.
    pub fn with_capabilities(mut self, tags: impl IntoIterator<Item = CapabilityTag>) -> Self {
        self.capabilities = tags.into_iter().collect();
        self
    }

    /// Builder: require a minimum estimated cost.
    pub fn min_cost(mut self, amount: f64) -> Self {
        self.min_estimated_cost = Some(amount);
        self
    }

    /// Builder: require a minimum cost bracket.
    pub fn min_bracket(mut self, bracket: CostBracket) -> Self {
        self.min_cost_bracket = Some(bracket);
        self
    }

    /// Builder: require a future deadline.
    pub fn with_deadline(mut self) -> Self {
        self.requires_deadline = true;
        self
    }

    /// True when no clause is specified.
    pub fn is_unconstrained(&self) -> bool {
        self.categories.is_empty()
            && self.capabilities.is_empty()
            && self.min_estimated_cost.is_none()
            && self.min_cost_bracket.is_none()
            && !self.requires_deadline
    }

    /// Evaluate the predicate against classified goal features.
    pub fn matches(&self, features: &GoalFeatures) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&features.category) {
            return false;
        }

        if !self.capabilities.is_empty()
            && !self
                .capabilities
                .iter()
                .any(|tag| features.capabilities.contains(tag))
        {
            return false;
        }

        if let Some(min) = self.min_estimated_cost {
            if !features.estimated_cost.is_some_and(|cost| cost >= min) {
                return false;
            }
        }

        if let Some(min) = self.min_cost_bracket {
            if !features.cost_bracket.is_some_and(|bracket| bracket >= min) {
                return false;
            }
        }

        !self.requires_deadline || features.has_deadline
    }
}

/// A widget the composition engine can place on a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    pub id: String,
    pub title: String,
    /// Always shown, regardless of the goal
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub eligibility: Eligibility,
    pub props: PropsKind,
    /// Template merged into static props
    #[serde(default)]
    pub default_props: serde_json::Value,
    #[serde(default)]
    pub span: GridSpan,
}

impl WidgetDescriptor {
    /// A widget shown on every dashboard.
    pub fn required(id: impl Into<String>, title: impl Into<String>, props: PropsKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            required: true,
            eligibility: Eligibility::any(),
            props,
            default_props: serde_json::Value::Null,
            span: GridSpan::single(),
        }
    }

    /// A widget shown when `eligibility` matches.
    pub fn optional(
        id: impl Into<String>,
        title: impl Into<String>,
        props: PropsKind,
        eligibility: Eligibility,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            required: false,
            eligibility,
            props,
            default_props: serde_json::Value::Null,
            span: GridSpan::single(),
        }
    }

    /// Builder: set grid span.
    pub fn with_span(mut self, span: GridSpan) -> Self {
        self.span = span;
        self
    }

    /// Builder: set default props template.
    pub fn with_default_props(mut self, props: serde_json::Value) -> Self {
        self.default_props = props;
        self
    }

    /// Whether the widget belongs on a goal with these features.
    pub fn is_eligible(&self, features: &GoalFeatures) -> bool {
        self.required || self.eligibility.matches(features)
    }
}
