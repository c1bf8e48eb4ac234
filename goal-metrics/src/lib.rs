//! Goal Metrics - pure projections over goal state
//!
//! Every function here is deterministic and total. Degenerate input (negative
//! amounts, deadlines in the past, zero totals) is clamped instead of rejected,
//! because these numbers are advisory. The two cases a caller must be able to
//! tell apart from a plain number get their own variants:
//!
//! - [`PayoffOutcome::NeverResolves`]: the payment does not cover accruing interest
//! - [`UsagePercent::Unbounded`]: money spent against a zero budget
//!
//! # Modules
//!
//! - [`savings`]: required savings per day/week/month to hit a deadline
//! - [`debt`]: amortized payoff, avalanche/snowball ordering, extra payment allocation
//! - [`budget`]: planned vs. actual variance
//! - [`streak`]: streak levels and milestone progress
//! - [`progress`]: financial, task and overall progress percentages

pub mod budget;
pub mod debt;
pub mod progress;
pub mod savings;
pub mod streak;

// Re-export main functions for convenience
pub use budget::{budget_summary, budget_variance, BudgetLine, BudgetSummary, BudgetVariance, UsagePercent};
pub use debt::{
    allocate_extra_payment, amortized_payoff_periods, debt_payoff_plan, sort_debts_by_strategy, total_interest,
    DebtPlan, DebtPlanEntry, DebtStrategy, ParseStrategyError, PayoffOutcome,
};
pub use progress::{
    clamp_percent, financial_progress, overall_goal_progress, task_completion_percent,
    FinancialProgress,
};
pub use savings::{days_left, required_periodic_savings, savings_plan, SavingsPeriod, SavingsPlan};
pub use streak::{
    progress_to_next_milestone, streak_at_risk, streak_level, streak_snapshot, MilestoneProgress,
    StreakLevel, StreakSnapshot, STREAK_THRESHOLDS,
};

/// Treat NaN, infinities and negatives as zero.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
