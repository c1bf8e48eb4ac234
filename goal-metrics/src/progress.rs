//! Progress percentages.

use serde::{Deserialize, Serialize};

use crate::non_negative;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Clamp to [0, 100]; NaN becomes 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Equal-weighted average of financial and task progress, each clamped first.
pub fn overall_goal_progress(financial_percent: f64, task_percent: f64) -> f64 {
    (clamp_percent(financial_percent) + clamp_percent(task_percent)) / 2.0
}

/// Completed steps as a percentage of all steps.
pub fn task_completion_percent(completed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    clamp_percent(completed as f64 / total as f64 * 100.0)
}

/// Saved amount against a target.
///
/// `percent` is the true ratio and goes above 100 when the goal is over-saved;
/// `over` says so explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct FinancialProgress {
    pub target: Option<f64>,
    pub current: f64,
    pub percent: f64,
    pub over: bool,
    /// Amount saved beyond the target
    pub overage: f64,
}

impl FinancialProgress {
    /// Percentage capped at 100, for progress bars.
    pub fn display_percent(&self) -> f64 {
        clamp_percent(self.percent)
    }
}

pub fn financial_progress(target: Option<f64>, current: f64) -> FinancialProgress {
    let current = non_negative(current);
    let target = target.map(non_negative);

    match target {
        Some(t) if t > 0.0 => FinancialProgress {
            target: Some(t),
            current,
            percent: current / t * 100.0,
            over: current > t,
            overage: (current - t).max(0.0),
        },
        Some(t) => FinancialProgress {
            target: Some(t),
            current,
            percent: 0.0,
            over: current > 0.0,
            overage: current,
        },
        None => FinancialProgress {
            target: None,
            current,
            percent: 0.0,
            over: false,
            overage: 0.0,
        },
    }
}
