//! Required savings rate to reach a target by a deadline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::non_negative;

#[cfg(feature = "typescript")]
use ts_rs::TS;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Period a savings amount is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum SavingsPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl SavingsPeriod {
    /// Days per period. A month is a flat 30 days.
    pub fn days(&self) -> u32 {
        match self {
            Self::Daily => 1,
            Self::Weekly => 7,
            Self::Monthly => 30,
        }
    }
}

impl Default for SavingsPeriod {
    fn default() -> Self {
        Self::Monthly
    }
}

/// Whole days until `deadline`, rounded up and never below 1.
pub fn days_left(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let seconds = (deadline - now).num_seconds() as f64;
    let days = (seconds / SECONDS_PER_DAY).ceil();
    if days.is_finite() && days >= 1.0 {
        days as i64
    } else {
        1
    }
}

/// Amount to set aside each `period` to close the gap between `current` and
/// `target` by `deadline`.
///
/// A deadline on or before `now` counts as one remaining day. Always `>= 0`,
/// and exactly `0.0` once `current >= target`.
pub fn required_periodic_savings(
    target: f64,
    current: f64,
    deadline: DateTime<Utc>,
    now: DateTime<Utc>,
    period: SavingsPeriod,
) -> f64 {
    let remaining = (non_negative(target) - non_negative(current)).max(0.0);
    if remaining == 0.0 {
        return 0.0;
    }
    let daily = remaining / days_left(deadline, now) as f64;
    daily * period.days() as f64
}

/// Savings requirement for all periods at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct SavingsPlan {
    pub target: f64,
    pub current: f64,
    pub remaining: f64,
    pub days_left: i64,
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
    /// Deadline was on or before evaluation time
    pub deadline_passed: bool,
}

impl SavingsPlan {
    pub fn amount_for(&self, period: SavingsPeriod) -> f64 {
        match period {
            SavingsPeriod::Daily => self.daily,
            SavingsPeriod::Weekly => self.weekly,
            SavingsPeriod::Monthly => self.monthly,
        }
    }

    pub fn is_met(&self) -> bool {
        self.remaining == 0.0
    }
}

/// Build a [`SavingsPlan`] for a target and deadline.
pub fn savings_plan(
    target: f64,
    current: f64,
    deadline: DateTime<Utc>,
    now: DateTime<Utc>,
) -> SavingsPlan {
    let target_amount = non_negative(target);
    let current_amount = non_negative(current);
    let per = |period| required_periodic_savings(target, current, deadline, now, period);

    SavingsPlan {
        target: target_amount,
        current: current_amount,
        remaining: (target_amount - current_amount).max(0.0),
        days_left: days_left(deadline, now),
        daily: per(SavingsPeriod::Daily),
        weekly: per(SavingsPeriod::Weekly),
        monthly: per(SavingsPeriod::Monthly),
        deadline_passed: deadline <= now,
    }
}
