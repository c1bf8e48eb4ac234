//! Per-domain progress records owned by a goal.
//!
//! These live inside [`SmartGoalData::progress`](crate::SmartGoalData) and are
//! never shared between goals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::DebtType;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// A single debt tracked by a debt payoff goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub name: String,
    /// Outstanding balance
    pub balance: f64,
    /// Balance when tracking started; never below `balance`
    pub original_balance: f64,
    /// Annual interest rate in percent (18.9 means 18.9%)
    pub interest_rate: f64,
    pub minimum_payment: f64,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, rename = "type")]
    pub debt_type: DebtType,
}

impl Debt {
    /// Create a debt whose original balance equals the current balance.
    pub fn new(
        id: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            balance,
            original_balance: balance,
            interest_rate,
            minimum_payment,
            due_date: None,
            debt_type: DebtType::Other,
        }
    }

    /// Builder: set display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: set the original balance.
    pub fn with_original_balance(mut self, original_balance: f64) -> Self {
        self.original_balance = original_balance;
        self
    }

    /// Builder: set the debt type.
    pub fn with_type(mut self, debt_type: DebtType) -> Self {
        self.debt_type = debt_type;
        self
    }

    /// Amount already repaid against the original balance.
    pub fn paid_off(&self) -> f64 {
        (self.original_balance - self.balance).max(0.0)
    }

    /// Share of the original balance already repaid, in [0, 100].
    pub fn paid_off_percent(&self) -> f64 {
        if self.original_balance <= 0.0 || !self.original_balance.is_finite() {
            return if self.balance <= 0.0 { 100.0 } else { 0.0 };
        }
        (self.paid_off() / self.original_balance * 100.0).clamp(0.0, 100.0)
    }
}

/// Streak of consecutive qualifying periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    /// Period label ("days", "weeks", "sessions")
    #[serde(default = "default_streak_unit")]
    pub unit: String,
    #[serde(default)]
    pub last_activity_date: Option<DateTime<Utc>>,
}

fn default_streak_unit() -> String {
    "days".to_string()
}

impl Streak {
    pub fn new(current_streak: u32) -> Self {
        Self {
            current_streak,
            longest_streak: current_streak,
            unit: default_streak_unit(),
            last_activity_date: None,
        }
    }

    /// Copy with `longest_streak` raised to at least `current_streak`.
    pub fn normalized(&self) -> Self {
        Self {
            longest_streak: self.longest_streak.max(self.current_streak),
            ..self.clone()
        }
    }
}

impl Default for Streak {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Planned vs. actual spend for one budget line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub category: String,
    pub estimated: f64,
    #[serde(default)]
    pub actual: f64,
}

impl BudgetItem {
    pub fn new(category: impl Into<String>, estimated: f64, actual: f64) -> Self {
        Self {
            category: category.into(),
            estimated,
            actual,
        }
    }
}

/// Step completion counts for a goal's action plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct TaskProgress {
    pub completed: u32,
    pub total: u32,
}

/// Nested per-domain progress payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct DomainProgress {
    pub debts: Vec<Debt>,
    /// Extra monthly amount applied on top of all minimum payments
    pub extra_monthly_payment: Option<f64>,
    pub streak: Option<Streak>,
    pub budget: Vec<BudgetItem>,
    pub tasks: Option<TaskProgress>,
}
