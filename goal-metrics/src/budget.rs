//! Planned vs. actual spend.

use goal_model::BudgetItem;
use serde::{Deserialize, Serialize};

use crate::non_negative;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Share of the budget used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum UsagePercent {
    /// Actual as a percentage of estimated; may exceed 100
    Value(f64),
    /// Money spent against a zero budget
    Unbounded,
}

impl UsagePercent {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Unbounded => None,
        }
    }
}

/// Variance between an estimate and actual spend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct BudgetVariance {
    pub estimated: f64,
    pub actual: f64,
    /// `actual - estimated`; positive means overspent
    pub variance: f64,
    pub over_budget: bool,
    pub percent_used: UsagePercent,
}

/// Compare `actual` spend against `estimated`. Negative amounts count as zero.
pub fn budget_variance(estimated: f64, actual: f64) -> BudgetVariance {
    let estimated = non_negative(estimated);
    let actual = non_negative(actual);
    let variance = actual - estimated;

    let percent_used = if estimated > 0.0 {
        UsagePercent::Value(actual / estimated * 100.0)
    } else if actual > 0.0 {
        UsagePercent::Unbounded
    } else {
        UsagePercent::Value(0.0)
    };

    BudgetVariance {
        estimated,
        actual,
        variance,
        over_budget: variance > 0.0,
        percent_used,
    }
}

/// Variance for one budget category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    pub category: String,
    pub variance: BudgetVariance,
}

/// Variance per category plus the overall total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub lines: Vec<BudgetLine>,
    pub total: BudgetVariance,
    /// Categories whose actual spend exceeds the estimate, in input order
    pub over_budget_categories: Vec<String>,
}

impl BudgetSummary {
    /// True when any line, or the total, exceeds its estimate.
    pub fn is_over_budget(&self) -> bool {
        self.total.over_budget || !self.over_budget_categories.is_empty()
    }
}

pub fn budget_summary(items: &[BudgetItem]) -> BudgetSummary {
    let lines: Vec<BudgetLine> = items
        .iter()
        .map(|item| BudgetLine {
            category: item.category.clone(),
            variance: budget_variance(item.estimated, item.actual),
        })
        .collect();

    let estimated: f64 = lines.iter().map(|l| l.variance.estimated).sum();
    let actual: f64 = lines.iter().map(|l| l.variance.actual).sum();

    let over_budget_categories = lines
        .iter()
        .filter(|l| l.variance.over_budget)
        .map(|l| l.category.clone())
        .collect();

    BudgetSummary {
        total: budget_variance(estimated, actual),
        lines,
        over_budget_categories,
    }
}
