//! Debt payoff projections.
//!
//! Payoff time uses the standard amortization formula
//! `n = -ln(1 - B*r/P) / ln(1 + r)` with `r` the monthly rate. When the payment
//! does not exceed the interest accruing each month the balance never falls,
//! and the projection says so with [`PayoffOutcome::NeverResolves`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Months, Utc};
use goal_model::Debt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::non_negative;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Upper bound for month-by-month simulation (100 years).
const MAX_SIMULATED_MONTHS: u32 = 1_200;

/// Result of a payoff projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayoffOutcome {
    /// Balance reaches zero after `months` payments
    Resolves { months: u32 },
    /// Payment never outpaces interest
    NeverResolves,
}

impl PayoffOutcome {
    pub fn months(&self) -> Option<u32> {
        match self {
            Self::Resolves { months } => Some(*months),
            Self::NeverResolves => None,
        }
    }

    pub fn is_resolvable(&self) -> bool {
        matches!(self, Self::Resolves { .. })
    }

    /// Calendar date of the final payment, counting from `from`.
    pub fn payoff_date(&self, from: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.months()
            .and_then(|months| from.checked_add_months(Months::new(months)))
    }

    /// The later of two outcomes; `NeverResolves` dominates.
    pub fn max(self, other: Self) -> Self {
        match (self, other) {
            (Self::Resolves { months: a }, Self::Resolves { months: b }) => Self::Resolves {
                months: a.max(b),
            },
            _ => Self::NeverResolves,
        }
    }
}

/// Number of monthly payments needed to clear `balance`.
pub fn amortized_payoff_periods(
    balance: f64,
    annual_rate_percent: f64,
    monthly_payment: f64,
) -> PayoffOutcome {
    let balance = non_negative(balance);
    if balance == 0.0 {
        return PayoffOutcome::Resolves { months: 0 };
    }

    let payment = non_negative(monthly_payment);
    if payment == 0.0 {
        return PayoffOutcome::NeverResolves;
    }

    let monthly_rate = non_negative(annual_rate_percent) / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return PayoffOutcome::Resolves {
            months: to_months((balance / payment).ceil()),
        };
    }

    if payment <= balance * monthly_rate {
        return PayoffOutcome::NeverResolves;
    }

    let periods = -(1.0 - balance * monthly_rate / payment).ln() / (1.0 + monthly_rate).ln();
    PayoffOutcome::Resolves {
        months: to_months(periods.ceil()),
    }
}

fn to_months(periods: f64) -> u32 {
    if periods.is_finite() {
        periods.clamp(0.0, u32::MAX as f64) as u32
    } else {
        u32::MAX
    }
}

/// Total interest paid when `balance` is repaid at `monthly_payment`.
///
/// `None` when the debt never resolves.
pub fn total_interest(balance: f64, annual_rate_percent: f64, monthly_payment: f64) -> Option<f64> {
    let outcome = amortized_payoff_periods(balance, annual_rate_percent, monthly_payment);
    let months = outcome.months()?.min(MAX_SIMULATED_MONTHS);

    let monthly_rate = non_negative(annual_rate_percent) / 100.0 / 12.0;
    let payment = non_negative(monthly_payment);
    let mut remaining = non_negative(balance);
    let mut interest_paid = 0.0;

    for _ in 0..months {
        if remaining <= 0.0 {
            break;
        }
        let interest = remaining * monthly_rate;
        interest_paid += interest;
        remaining = (remaining + interest - payment).max(0.0);
    }

    Some(interest_paid)
}

/// Debt payoff ordering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum DebtStrategy {
    /// Highest interest rate first
    Avalanche,
    /// Smallest balance first
    Snowball,
}

impl DebtStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Avalanche => "avalanche",
            Self::Snowball => "snowball",
        }
    }
}

impl Default for DebtStrategy {
    fn default() -> Self {
        Self::Avalanche
    }
}

impl fmt::Display for DebtStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown debt strategy: {0}")]
pub struct ParseStrategyError(pub String);

impl FromStr for DebtStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avalanche" => Ok(Self::Avalanche),
            "snowball" => Ok(Self::Snowball),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Order debts for payoff. Equal keys keep their input order.
pub fn sort_debts_by_strategy(debts: &[Debt], strategy: DebtStrategy) -> Vec<Debt> {
    let mut sorted = debts.to_vec();
    match strategy {
        DebtStrategy::Avalanche => {
            sorted.sort_by(|a, b| b.interest_rate.total_cmp(&a.interest_rate));
        }
        DebtStrategy::Snowball => {
            sorted.sort_by(|a, b| a.balance.total_cmp(&b.balance));
        }
    }
    sorted
}

/// Split `extra` across debts in proportion to each one's share of the total
/// outstanding balance. Output is index-aligned with `debts`.
pub fn allocate_extra_payment(debts: &[Debt], extra: f64) -> Vec<f64> {
    let extra = non_negative(extra);
    let total: f64 = debts.iter().map(|d| non_negative(d.balance)).sum();

    if extra == 0.0 || total == 0.0 {
        return vec![0.0; debts.len()];
    }

    debts
        .iter()
        .map(|d| extra * non_negative(d.balance) / total)
        .collect()
}

/// Projection for one debt within a [`DebtPlan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct DebtPlanEntry {
    pub debt_id: String,
    pub name: String,
    pub balance: f64,
    pub interest_rate: f64,
    pub minimum_payment: f64,
    /// Share of the extra payment routed to this debt
    pub extra_allocated: f64,
    /// Minimum plus allocated extra
    pub monthly_payment: f64,
    pub outcome: PayoffOutcome,
    /// `None` when the debt never resolves
    pub total_interest: Option<f64>,
    pub paid_off_percent: f64,
}

/// Payoff plan across all debts of a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct DebtPlan {
    pub strategy: DebtStrategy,
    /// Entries in payoff order
    pub entries: Vec<DebtPlanEntry>,
    pub total_balance: f64,
    pub total_original_balance: f64,
    pub total_monthly_payment: f64,
    pub extra_monthly_payment: f64,
    pub paid_off_percent: f64,
    /// Time until the last debt clears
    pub longest: PayoffOutcome,
    /// Debts whose payment never outpaces interest
    pub unresolvable: Vec<String>,
}

/// Build a payoff plan: order by `strategy`, spread `extra` by balance share,
/// and project each debt.
pub fn debt_payoff_plan(debts: &[Debt], extra: f64, strategy: DebtStrategy) -> DebtPlan {
    let ordered = sort_debts_by_strategy(debts, strategy);
    let allocations = allocate_extra_payment(&ordered, extra);

    let mut entries = Vec::with_capacity(ordered.len());
    let mut longest = PayoffOutcome::Resolves { months: 0 };
    let mut unresolvable = Vec::new();

    for (debt, allocated) in ordered.iter().zip(allocations) {
        let monthly_payment = non_negative(debt.minimum_payment) + allocated;
        let outcome = amortized_payoff_periods(debt.balance, debt.interest_rate, monthly_payment);

        if !outcome.is_resolvable() {
            debug!(
                debt_id = %debt.id,
                balance = debt.balance,
                rate = debt.interest_rate,
                payment = monthly_payment,
                "Debt payment does not cover interest"
            );
            unresolvable.push(debt.id.clone());
        }
        longest = longest.max(outcome);

        entries.push(DebtPlanEntry {
            debt_id: debt.id.clone(),
            name: debt.name.clone(),
            balance: debt.balance,
            interest_rate: debt.interest_rate,
            minimum_payment: debt.minimum_payment,
            extra_allocated: allocated,
            monthly_payment,
            outcome,
            total_interest: total_interest(debt.balance, debt.interest_rate, monthly_payment),
            paid_off_percent: debt.paid_off_percent(),
        });
    }

    let total_balance: f64 = debts.iter().map(|d| non_negative(d.balance)).sum();
    let total_original_balance: f64 = debts.iter().map(|d| non_negative(d.original_balance)).sum();
    let paid_off_percent = if total_original_balance > 0.0 {
        ((total_original_balance - total_balance) / total_original_balance * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    DebtPlan {
        strategy,
        total_monthly_payment: entries.iter().map(|e| e.monthly_payment).sum(),
        entries,
        total_balance,
        total_original_balance,
        extra_monthly_payment: non_negative(extra),
        paid_off_percent,
        longest,
        unresolvable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_debts() -> Vec<Debt> {
        vec![
            Debt::new("visa", 3_200.0, 18.9, 95.0).with_original_balance(5_000.0),
            Debt::new("student", 12_500.0, 4.2, 140.0).with_original_balance(20_000.0),
            Debt::new("car", 8_900.0, 6.5, 320.0).with_original_balance(15_000.0),
        ]
    }

    #[test]
    fn test_zero_interest_payoff() {
        assert_eq!(
            amortized_payoff_periods(10_000.0, 0.0, 500.0),
            PayoffOutcome::Resolves { months: 20 }
        );
        assert_eq!(
            amortized_payoff_periods(10_001.0, 0.0, 500.0),
            PayoffOutcome::Resolves { months: 21 }
        );
    }

    #[test]
    fn test_payment_below_interest_never_resolves() {
        // 12% APR on 10k accrues exactly 100/month
        assert_eq!(
            amortized_payoff_periods(10_000.0, 12.0, 100.0),
            PayoffOutcome::NeverResolves
        );
        assert_eq!(
            amortized_payoff_periods(10_000.0, 12.0, 50.0),
            PayoffOutcome::NeverResolves
        );
        assert_eq!(amortized_payoff_periods(500.0, 0.0, 0.0), PayoffOutcome::NeverResolves);
    }

    #[test]
    fn test_amortized_payoff_matches_formula() {
        // 5k at 18% with 200/month: n = -ln(1 - 75/200) / ln(1.015) = 31.57
        assert_eq!(
            amortized_payoff_periods(5_000.0, 18.0, 200.0),
            PayoffOutcome::Resolves { months: 32 }
        );
    }

    #[test]
    fn test_zero_balance_is_already_paid() {
        assert_eq!(amortized_payoff_periods(0.0, 22.0, 0.0), PayoffOutcome::Resolves { months: 0 });
        assert_eq!(amortized_payoff_periods(-40.0, 22.0, 10.0), PayoffOutcome::Resolves { months: 0 });
    }

    #[test]
    fn test_huge_balance_is_finite_or_flagged() {
        let outcome = amortized_payoff_periods(1e15, 3.0, 1e13);
        assert!(outcome.is_resolvable());
        assert_eq!(amortized_payoff_periods(1e15, 3.0, 1.0), PayoffOutcome::NeverResolves);
    }

    #[test]
    fn test_avalanche_orders_by_rate_descending() {
        let sorted = sort_debts_by_strategy(&sample_debts(), DebtStrategy::Avalanche);
        let rates: Vec<f64> = sorted.iter().map(|d| d.interest_rate).collect();
        assert_eq!(rates, vec![18.9, 6.5, 4.2]);
    }

    #[test]
    fn test_snowball_orders_by_balance_ascending() {
        let sorted = sort_debts_by_strategy(&sample_debts(), DebtStrategy::Snowball);
        let balances: Vec<f64> = sorted.iter().map(|d| d.balance).collect();
        assert_eq!(balances, vec![3_200.0, 8_900.0, 12_500.0]);
    }

    #[test]
    fn test_strategy_sort_is_stable() {
        let debts = vec![
            Debt::new("a", 1_000.0, 10.0, 50.0),
            Debt::new("b", 2_000.0, 10.0, 50.0),
            Debt::new("c", 1_000.0, 12.0, 50.0),
        ];
        let avalanche: Vec<_> = sort_debts_by_strategy(&debts, DebtStrategy::Avalanche)
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(avalanche, vec!["c", "a", "b"]);

        let snowball: Vec<_> = sort_debts_by_strategy(&debts, DebtStrategy::Snowball)
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(snowball, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("Snowball".parse::<DebtStrategy>().unwrap(), DebtStrategy::Snowball);
        assert_eq!(
            "hurricane".parse::<DebtStrategy>().unwrap_err(),
            ParseStrategyError("hurricane".to_string())
        );
    }

    #[test]
    fn test_extra_payment_split_by_balance_share() {
        let debts = vec![
            Debt::new("a", 1_000.0, 5.0, 50.0),
            Debt::new("b", 3_000.0, 5.0, 50.0),
        ];
        let split = allocate_extra_payment(&debts, 200.0);
        assert!((split[0] - 50.0).abs() < 1e-9);
        assert!((split[1] - 150.0).abs() < 1e-9);

        assert_eq!(allocate_extra_payment(&debts, 0.0), vec![0.0, 0.0]);
        let cleared = vec![Debt::new("z", 0.0, 5.0, 0.0)];
        assert_eq!(allocate_extra_payment(&cleared, 100.0), vec![0.0]);
    }

    #[test]
    fn test_total_interest() {
        assert_eq!(total_interest(10_000.0, 0.0, 500.0), Some(0.0));
        assert_eq!(total_interest(10_000.0, 12.0, 100.0), None);

        let interest = total_interest(5_000.0, 18.0, 200.0).unwrap();
        assert!(interest > 1_000.0 && interest < 1_400.0);
    }

    #[test]
    fn test_payoff_plan_totals() {
        let plan = debt_payoff_plan(&sample_debts(), 300.0, DebtStrategy::Avalanche);

        assert_eq!(plan.entries.len(), 3);
        assert_eq!(plan.entries[0].debt_id, "visa");
        assert!((plan.total_balance - 24_600.0).abs() < 1e-9);
        assert!((plan.total_original_balance - 40_000.0).abs() < 1e-9);
        assert!((plan.paid_off_percent - 38.5).abs() < 1e-9);

        let extra: f64 = plan.entries.iter().map(|e| e.extra_allocated).sum();
        assert!((extra - 300.0).abs() < 1e-9);
        assert!((plan.total_monthly_payment - 855.0).abs() < 1e-9);
        assert!(plan.longest.is_resolvable());
        assert!(plan.unresolvable.is_empty());
    }

    #[test]
    fn test_payoff_plan_flags_unresolvable_debt() {
        let debts = vec![
            Debt::new("payday", 2_000.0, 36.0, 40.0),
            Debt::new("card", 500.0, 20.0, 50.0),
        ];
        let plan = debt_payoff_plan(&debts, 0.0, DebtStrategy::Snowball);
        assert_eq!(plan.longest, PayoffOutcome::NeverResolves);
        assert_eq!(plan.unresolvable, vec!["payday".to_string()]);
        assert_eq!(plan.entries[0].debt_id, "card");
        assert!(plan.entries[1].total_interest.is_none());
    }

    #[test]
    fn test_empty_plan() {
        let plan = debt_payoff_plan(&[], 100.0, DebtStrategy::Snowball);
        assert!(plan.entries.is_empty());
        assert_eq!(plan.longest, PayoffOutcome::Resolves { months: 0 });
        assert_eq!(plan.paid_off_percent, 0.0);
    }

    #[test]
    fn test_payoff_date() {
        let start = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
        let outcome = PayoffOutcome::Resolves { months: 14 };
        let expected = Utc.with_ymd_and_hms(2027, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(outcome.payoff_date(start), Some(expected));
        assert_eq!(PayoffOutcome::NeverResolves.payoff_date(start), None);
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&PayoffOutcome::Resolves { months: 3 }).unwrap();
        assert_eq!(json, r#"{"kind":"resolves","months":3}"#);
        let never = serde_json::to_string(&PayoffOutcome::NeverResolves).unwrap();
        assert_eq!(never, r#"{"kind":"never_resolves"}"#);
    }
}
