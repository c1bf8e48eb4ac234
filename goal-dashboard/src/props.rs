//! Prop resolution.
//!
//! Each [`PropsKind`] maps to one resolver that computes a widget's props from
//! the goal, its classified features and the metric library. Resolvers never
//! fail; degenerate input becomes a [`DashboardWarning`] next to best-effort
//! props.

use chrono::{DateTime, Utc};
use goal_metrics::{
    budget_summary, clamp_percent, debt_payoff_plan, financial_progress, overall_goal_progress,
    savings_plan, streak_level, streak_snapshot, task_completion_percent, BudgetSummary, DebtPlan,
    FinancialProgress, SavingsPeriod, SavingsPlan, StreakSnapshot, STREAK_THRESHOLDS,
};
use goal_model::{Goal, GoalCategory, GoalStatus, Priority};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::classifier::GoalFeatures;
use crate::config::MetricsConfig;
use crate::registry::{PropsKind, WidgetDescriptor};
use crate::status::{AgentStatus, AgentStatusSnapshot};
use crate::types::{DashboardWarning, WarningSink};

#[cfg(feature = "typescript")]
use ts_rs::TS;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Fractions of the target marked on money and task milestone ladders.
const LADDER_STEPS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Data handed to a widget renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum WidgetProps {
    GoalOverview {
        title: String,
        category: GoalCategory,
        priority: Priority,
        status: GoalStatus,
        feasibility_score: Option<u8>,
        target_date: Option<DateTime<Utc>>,
        days_remaining: Option<i64>,
    },
    OverallProgress {
        financial: FinancialProgress,
        task_percent: Option<f64>,
        /// Average of the available inputs, in [0, 100]
        overall_percent: f64,
    },
    SmartSummary {
        specific: Option<String>,
        measurable: Option<String>,
        achievable: Option<String>,
        relevant: Option<String>,
        timebound: Option<String>,
        /// Filled SMART fields (0-5)
        completeness: u8,
    },
    SavingsPlan {
        /// Present when the goal has both a cost and a target date
        plan: Option<SavingsPlan>,
        progress: FinancialProgress,
        period: SavingsPeriod,
        amount_per_period: Option<f64>,
    },
    DebtPayoff {
        plan: DebtPlan,
        /// Date the last debt clears, if every debt resolves
        payoff_date: Option<DateTime<Utc>>,
    },
    Budget {
        summary: BudgetSummary,
    },
    Streak {
        snapshot: Option<StreakSnapshot>,
    },
    Milestones {
        basis: MilestoneBasis,
        steps: Vec<MilestoneStep>,
    },
    DeadlineCountdown {
        target_date: Option<DateTime<Utc>>,
        /// Whole days until the deadline, rounded up; negative once overdue
        days_remaining: Option<i64>,
        overdue: bool,
    },
    Feasibility {
        score: Option<u8>,
        rating: FeasibilityRating,
    },
    AgentActivity {
        statuses: Vec<AgentStatus>,
    },
    Static {
        template: Value,
    },
}

impl WidgetProps {
    /// Resolver kind these props came from.
    pub fn kind(&self) -> PropsKind {
        match self {
            Self::GoalOverview { .. } => PropsKind::GoalOverview,
            Self::OverallProgress { .. } => PropsKind::OverallProgress,
            Self::SmartSummary { .. } => PropsKind::SmartSummary,
            Self::SavingsPlan { .. } => PropsKind::SavingsPlan,
            Self::DebtPayoff { .. } => PropsKind::DebtPayoff,
            Self::Budget { .. } => PropsKind::Budget,
            Self::Streak { .. } => PropsKind::Streak,
            Self::Milestones { .. } => PropsKind::Milestones,
            Self::DeadlineCountdown { .. } => PropsKind::DeadlineCountdown,
            Self::Feasibility { .. } => PropsKind::Feasibility,
            Self::AgentActivity { .. } => PropsKind::AgentActivity,
            Self::Static { .. } => PropsKind::Static,
        }
    }
}

/// What a milestone ladder measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum MilestoneBasis {
    Savings,
    Streak,
    Tasks,
    None,
}

/// One rung of a milestone ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct MilestoneStep {
    pub label: String,
    pub target: f64,
    pub reached: bool,
}

/// Banded feasibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum FeasibilityRating {
    High,
    Moderate,
    Low,
    VeryLow,
    Unknown,
}

impl FeasibilityRating {
    pub fn from_score(score: Option<u8>) -> Self {
        match score {
            Some(s) if s >= 75 => Self::High,
            Some(s) if s >= 50 => Self::Moderate,
            Some(s) if s >= 25 => Self::Low,
            Some(_) => Self::VeryLow,
            None => Self::Unknown,
        }
    }
}

/// Inputs shared by every resolver for one assembly.
pub(crate) struct PropsContext<'a> {
    pub goal: &'a Goal,
    pub features: &'a GoalFeatures,
    pub now: DateTime<Utc>,
    pub metrics: &'a MetricsConfig,
    pub statuses: Option<&'a AgentStatusSnapshot>,
}

/// Signed whole days from `now` to `target`, rounded up.
pub(crate) fn days_until(target: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    ((target - now).num_seconds() as f64 / SECONDS_PER_DAY).ceil() as i64
}

/// Resolve props for one selected widget.
pub(crate) fn resolve_props(
    widget: &WidgetDescriptor,
    ctx: &PropsContext<'_>,
    warnings: &mut WarningSink,
) -> WidgetProps {
    match widget.props {
        PropsKind::GoalOverview => goal_overview(ctx),
        PropsKind::OverallProgress => overall_progress(ctx),
        PropsKind::SmartSummary => smart_summary(ctx),
        PropsKind::SavingsPlan => savings(widget, ctx, warnings),
        PropsKind::DebtPayoff => debt_payoff(ctx, warnings),
        PropsKind::Budget => budget(ctx, warnings),
        PropsKind::Streak => WidgetProps::Streak {
            snapshot: ctx
                .goal
                .progress()
                .and_then(|p| p.streak.as_ref())
                .map(|s| streak_snapshot(s, ctx.now)),
        },
        PropsKind::Milestones => milestones(ctx),
        PropsKind::DeadlineCountdown => {
            let days_remaining = ctx.goal.target_date.map(|t| days_until(t, ctx.now));
            WidgetProps::DeadlineCountdown {
                target_date: ctx.goal.target_date,
                days_remaining,
                overdue: ctx.goal.target_date.is_some_and(|t| t <= ctx.now),
            }
        }
        PropsKind::Feasibility => WidgetProps::Feasibility {
            score: ctx.goal.feasibility_score,
            rating: FeasibilityRating::from_score(ctx.goal.feasibility_score),
        },
        PropsKind::AgentActivity => WidgetProps::AgentActivity {
            statuses: match ctx.statuses {
                Some(snapshot) => snapshot.for_capabilities(&ctx.features.capabilities),
                None => AgentStatusSnapshot::new().for_capabilities(&ctx.features.capabilities),
            },
        },
        PropsKind::Static => WidgetProps::Static {
            template: static_template(widget, ctx),
        },
    }
}

fn goal_overview(ctx: &PropsContext<'_>) -> WidgetProps {
    let goal = ctx.goal;
    WidgetProps::GoalOverview {
        title: goal.title.clone(),
        category: ctx.features.category,
        priority: goal.priority,
        status: goal.status,
        feasibility_score: goal.feasibility_score,
        target_date: goal.target_date,
        days_remaining: goal.target_date.map(|t| days_until(t, ctx.now)),
    }
}

fn task_percent(ctx: &PropsContext<'_>) -> Option<f64> {
    ctx.goal
        .progress()
        .and_then(|p| p.tasks.as_ref())
        .filter(|t| t.total > 0)
        .map(|t| task_completion_percent(t.completed, t.total))
}

fn overall_progress(ctx: &PropsContext<'_>) -> WidgetProps {
    let financial = financial_progress(ctx.features.estimated_cost, ctx.goal.current_saved);
    let task_percent = task_percent(ctx);

    let overall_percent = match (ctx.features.estimated_cost, task_percent) {
        (Some(_), Some(tasks)) => overall_goal_progress(financial.percent, tasks),
        (Some(_), None) => financial.display_percent(),
        (None, Some(tasks)) => tasks,
        (None, None) => 0.0,
    };

    WidgetProps::OverallProgress {
        financial,
        task_percent,
        overall_percent,
    }
}

fn smart_summary(ctx: &PropsContext<'_>) -> WidgetProps {
    let smart = ctx.goal.smart_goal_data.clone().unwrap_or_default();
    let completeness = smart.completeness();
    WidgetProps::SmartSummary {
        specific: smart.specific,
        measurable: smart.measurable,
        achievable: smart.achievable,
        relevant: smart.relevant,
        timebound: smart.timebound,
        completeness,
    }
}

fn savings(
    widget: &WidgetDescriptor,
    ctx: &PropsContext<'_>,
    warnings: &mut WarningSink,
) -> WidgetProps {
    let period = ctx.metrics.savings_period;
    let progress = financial_progress(ctx.features.estimated_cost, ctx.goal.current_saved);

    let plan = match (ctx.features.estimated_cost, ctx.goal.target_date) {
        (Some(cost), Some(deadline)) => {
            Some(savings_plan(cost, ctx.goal.current_saved, deadline, ctx.now))
        }
        (None, _) => {
            warnings.push(DashboardWarning::MissingEstimatedCost {
                widget_id: widget.id.clone(),
            });
            None
        }
        (Some(_), None) => None,
    };

    WidgetProps::SavingsPlan {
        amount_per_period: plan.as_ref().map(|p| p.amount_for(period)),
        plan,
        progress,
        period,
    }
}

fn debt_payoff(ctx: &PropsContext<'_>, warnings: &mut WarningSink) -> WidgetProps {
    let progress = ctx.goal.progress();
    let debts = progress.map(|p| p.debts.as_slice()).unwrap_or_default();
    let extra = progress
        .and_then(|p| p.extra_monthly_payment)
        .unwrap_or(ctx.metrics.default_extra_payment);

    let plan = debt_payoff_plan(debts, extra, ctx.metrics.debt_strategy);
    for debt_id in &plan.unresolvable {
        warnings.push(DashboardWarning::DebtNeverResolves {
            debt_id: debt_id.clone(),
        });
    }

    let payoff_date = if plan.entries.is_empty() {
        None
    } else {
        plan.longest.payoff_date(ctx.now)
    };

    WidgetProps::DebtPayoff { plan, payoff_date }
}

fn budget(ctx: &PropsContext<'_>, warnings: &mut WarningSink) -> WidgetProps {
    let items = ctx
        .goal
        .progress()
        .map(|p| p.budget.as_slice())
        .unwrap_or_default();
    let summary = budget_summary(items);

    if summary.is_over_budget() {
        warnings.push(DashboardWarning::OverBudget {
            categories: summary.over_budget_categories.clone(),
        });
    }

    WidgetProps::Budget { summary }
}

fn milestones(ctx: &PropsContext<'_>) -> WidgetProps {
    let progress = ctx.goal.progress();

    if let Some(cost) = ctx.features.estimated_cost {
        let saved = ctx.goal.current_saved;
        let steps = LADDER_STEPS
            .iter()
            .map(|fraction| {
                let target = cost * fraction;
                MilestoneStep {
                    label: format!("{:.0}%", fraction * 100.0),
                    target,
                    reached: saved >= target,
                }
            })
            .collect();
        return WidgetProps::Milestones {
            basis: MilestoneBasis::Savings,
            steps,
        };
    }

    if let Some(streak) = progress.and_then(|p| p.streak.as_ref()) {
        let steps = STREAK_THRESHOLDS
            .iter()
            .filter(|&&threshold| threshold > 0)
            .map(|&threshold| MilestoneStep {
                label: streak_level(threshold).label().to_string(),
                target: threshold as f64,
                reached: streak.current_streak >= threshold,
            })
            .collect();
        return WidgetProps::Milestones {
            basis: MilestoneBasis::Streak,
            steps,
        };
    }

    if let Some(percent) = task_percent(ctx) {
        let steps = LADDER_STEPS
            .iter()
            .map(|fraction| {
                let target = clamp_percent(fraction * 100.0);
                MilestoneStep {
                    label: format!("{:.0}%", target),
                    target,
                    reached: percent >= target,
                }
            })
            .collect();
        return WidgetProps::Milestones {
            basis: MilestoneBasis::Tasks,
            steps,
        };
    }

    WidgetProps::Milestones {
        basis: MilestoneBasis::None,
        steps: Vec::new(),
    }
}

/// Descriptor template plus goal context. Keys set by the template win.
fn static_template(widget: &WidgetDescriptor, ctx: &PropsContext<'_>) -> Value {
    let mut template = match &widget.default_props {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    let context = [
        ("goalTitle", json!(ctx.goal.title)),
        ("category", json!(ctx.features.category)),
        ("capabilities", json!(ctx.features.capabilities)),
    ];
    for (key, value) in context {
        template.entry(key).or_insert(value);
    }

    Value::Object(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::GoalClassifier;
    use chrono::{Duration, TimeZone};
    use goal_model::{BudgetItem, Debt, DomainProgress, SmartGoalData, Streak, TaskProgress};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap()
    }

    fn resolve(goal: &Goal, widget: &WidgetDescriptor) -> (WidgetProps, Vec<DashboardWarning>) {
        let features = GoalClassifier::new().classify(goal, now());
        let metrics = MetricsConfig::default();
        let ctx = PropsContext {
            goal,
            features: &features,
            now: now(),
            metrics: &metrics,
            statuses: None,
        };
        let mut sink = WarningSink::default();
        let props = resolve_props(widget, &ctx, &mut sink);
        (props, sink.into_vec())
    }

    fn widget(kind: PropsKind) -> WidgetDescriptor {
        WidgetDescriptor::required("w", "W", kind)
    }

    fn with_progress(goal: Goal, progress: DomainProgress) -> Goal {
        goal.with_smart_data(SmartGoalData::default().with_progress(progress))
    }

    #[test]
    fn test_days_until_is_signed() {
        assert_eq!(days_until(now() + Duration::hours(30), now()), 2);
        assert_eq!(days_until(now(), now()), 0);
        assert_eq!(days_until(now() - Duration::days(3), now()), -3);
    }

    #[test]
    fn test_overall_progress_uses_available_inputs() {
        let money = Goal::new("Car", GoalCategory::Savings)
            .with_estimated_cost(10_000.0)
            .with_current_saved(4_000.0);
        let (props, _) = resolve(&money, &widget(PropsKind::OverallProgress));
        match props {
            WidgetProps::OverallProgress {
                task_percent,
                overall_percent,
                ..
            } => {
                assert_eq!(task_percent, None);
                assert_eq!(overall_percent, 40.0);
            }
            other => panic!("unexpected props {:?}", other),
        }

        let both = with_progress(
            money,
            DomainProgress {
                tasks: Some(TaskProgress {
                    completed: 4,
                    total: 5,
                }),
                ..Default::default()
            },
        );
        let (props, _) = resolve(&both, &widget(PropsKind::OverallProgress));
        match props {
            WidgetProps::OverallProgress {
                overall_percent, ..
            } => assert_eq!(overall_percent, 60.0),
            other => panic!("unexpected props {:?}", other),
        }
    }

    #[test]
    fn test_over_saved_progress_keeps_true_percent() {
        let goal = Goal::new("Bike", GoalCategory::Savings)
            .with_estimated_cost(1_000.0)
            .with_current_saved(1_500.0);
        let (props, _) = resolve(&goal, &widget(PropsKind::OverallProgress));
        match props {
            WidgetProps::OverallProgress {
                financial,
                overall_percent,
                ..
            } => {
                assert_eq!(financial.percent, 150.0);
                assert!(financial.over);
                assert_eq!(overall_percent, 100.0);
            }
            other => panic!("unexpected props {:?}", other),
        }
    }

    #[test]
    fn test_savings_without_cost_warns() {
        let goal = Goal::new("Trip", GoalCategory::Travel).with_target_date(now() + Duration::days(60));
        let w = WidgetDescriptor::required("savings-plan", "Savings", PropsKind::SavingsPlan);
        let (props, warnings) = resolve(&goal, &w);
        assert!(matches!(props, WidgetProps::SavingsPlan { plan: None, .. }));
        assert_eq!(
            warnings,
            vec![DashboardWarning::MissingEstimatedCost {
                widget_id: "savings-plan".to_string()
            }]
        );
    }

    #[test]
    fn test_savings_plan_amount_for_configured_period() {
        let goal = Goal::new("Trip", GoalCategory::Travel)
            .with_estimated_cost(3_000.0)
            .with_target_date(now() + Duration::days(100));
        let (props, warnings) = resolve(&goal, &widget(PropsKind::SavingsPlan));
        assert!(warnings.is_empty());
        match props {
            WidgetProps::SavingsPlan {
                plan: Some(plan),
                period,
                amount_per_period,
                ..
            } => {
                assert_eq!(period, SavingsPeriod::Monthly);
                assert_eq!(plan.days_left, 100);
                assert_eq!(amount_per_period, Some(900.0));
            }
            other => panic!("unexpected props {:?}", other),
        }
    }

    #[test]
    fn test_debt_payoff_warns_for_unresolvable_debt() {
        let goal = with_progress(
            Goal::new("Debt free", GoalCategory::DebtPayoff),
            DomainProgress {
                debts: vec![
                    Debt::new("visa", 3_200.0, 18.9, 95.0),
                    // 24% APR on 10k accrues 200/month
                    Debt::new("payday", 10_000.0, 24.0, 150.0),
                ],
                ..Default::default()
            },
        );
        let (props, warnings) = resolve(&goal, &widget(PropsKind::DebtPayoff));
        match props {
            WidgetProps::DebtPayoff { plan, payoff_date } => {
                assert_eq!(plan.entries[0].debt_id, "payday");
                assert_eq!(payoff_date, None);
            }
            other => panic!("unexpected props {:?}", other),
        }
        assert_eq!(
            warnings,
            vec![DashboardWarning::DebtNeverResolves {
                debt_id: "payday".to_string()
            }]
        );
    }

    #[test]
    fn test_debt_payoff_without_debts() {
        let goal = Goal::new("Debt free", GoalCategory::DebtPayoff);
        let (props, warnings) = resolve(&goal, &widget(PropsKind::DebtPayoff));
        assert!(warnings.is_empty());
        match props {
            WidgetProps::DebtPayoff { plan, payoff_date } => {
                assert!(plan.entries.is_empty());
                assert_eq!(payoff_date, None);
            }
            other => panic!("unexpected props {:?}", other),
        }
    }

    #[test]
    fn test_budget_over_warns() {
        let goal = with_progress(
            Goal::new("Wedding", GoalCategory::General),
            DomainProgress {
                budget: vec![
                    BudgetItem::new("venue", 5_000.0, 5_600.0),
                    BudgetItem::new("flowers", 800.0, 500.0),
                ],
                ..Default::default()
            },
        );
        let (_, warnings) = resolve(&goal, &widget(PropsKind::Budget));
        assert_eq!(
            warnings,
            vec![DashboardWarning::OverBudget {
                categories: vec!["venue".to_string()]
            }]
        );
    }

    #[test]
    fn test_budget_line_over_warns_under_total() {
        let goal = with_progress(
            Goal::new("Wedding", GoalCategory::General),
            DomainProgress {
                budget: vec![
                    BudgetItem::new("venue", 5_000.0, 5_200.0),
                    BudgetItem::new("flowers", 800.0, 300.0),
                ],
                ..Default::default()
            },
        );
        let (props, warnings) = resolve(&goal, &widget(PropsKind::Budget));
        match props {
            WidgetProps::Budget { summary } => assert!(!summary.total.over_budget),
            other => panic!("unexpected props {:?}", other),
        }
        assert_eq!(
            warnings,
            vec![DashboardWarning::OverBudget {
                categories: vec!["venue".to_string()]
            }]
        );
    }

    #[test]
    fn test_milestones_prefer_money_then_streak() {
        let money = Goal::new("Fund", GoalCategory::Savings)
            .with_estimated_cost(2_000.0)
            .with_current_saved(1_000.0);
        match resolve(&money, &widget(PropsKind::Milestones)).0 {
            WidgetProps::Milestones { basis, steps } => {
                assert_eq!(basis, MilestoneBasis::Savings);
                let reached: Vec<_> = steps.iter().map(|s| s.reached).collect();
                assert_eq!(reached, vec![true, true, false, false]);
                assert_eq!(steps[3].target, 2_000.0);
            }
            other => panic!("unexpected props {:?}", other),
        }

        let habit = with_progress(
            Goal::new("Meditate", GoalCategory::Habits),
            DomainProgress {
                streak: Some(Streak::new(20)),
                ..Default::default()
            },
        );
        match resolve(&habit, &widget(PropsKind::Milestones)).0 {
            WidgetProps::Milestones { basis, steps } => {
                assert_eq!(basis, MilestoneBasis::Streak);
                assert_eq!(steps.len(), 5);
                assert_eq!(steps[0].label, "Strong");
                assert!(steps[1].reached);
                assert!(!steps[2].reached);
            }
            other => panic!("unexpected props {:?}", other),
        }

        let empty = Goal::new("Think", GoalCategory::General);
        assert!(matches!(
            resolve(&empty, &widget(PropsKind::Milestones)).0,
            WidgetProps::Milestones {
                basis: MilestoneBasis::None,
                ..
            }
        ));
    }

    #[test]
    fn test_deadline_countdown_overdue() {
        let goal = Goal::new("Exam", GoalCategory::Education).with_target_date(now() - Duration::days(2));
        match resolve(&goal, &widget(PropsKind::DeadlineCountdown)).0 {
            WidgetProps::DeadlineCountdown {
                days_remaining,
                overdue,
                ..
            } => {
                assert_eq!(days_remaining, Some(-2));
                assert!(overdue);
            }
            other => panic!("unexpected props {:?}", other),
        }
    }

    #[test]
    fn test_feasibility_rating() {
        assert_eq!(FeasibilityRating::from_score(Some(80)), FeasibilityRating::High);
        assert_eq!(FeasibilityRating::from_score(Some(50)), FeasibilityRating::Moderate);
        assert_eq!(FeasibilityRating::from_score(Some(30)), FeasibilityRating::Low);
        assert_eq!(FeasibilityRating::from_score(Some(5)), FeasibilityRating::VeryLow);
        assert_eq!(FeasibilityRating::from_score(None), FeasibilityRating::Unknown);
    }

    #[test]
    fn test_static_template_merges_goal_context() {
        let goal = Goal::new("Lisbon", GoalCategory::Travel).with_capabilities(["weather"]);
        let w = WidgetDescriptor::required("weather", "Weather", PropsKind::Static)
            .with_default_props(json!({ "forecastDays": 7, "category": "custom" }));
        match resolve(&goal, &w).0 {
            WidgetProps::Static { template } => {
                assert_eq!(template["forecastDays"], 7);
                assert_eq!(template["category"], "custom");
                assert_eq!(template["goalTitle"], "Lisbon");
                assert_eq!(template["capabilities"], json!(["weather"]));
            }
            other => panic!("unexpected props {:?}", other),
        }
    }

    #[test]
    fn test_props_serialize_with_type_tag() {
        let goal = Goal::new("Run", GoalCategory::Fitness).with_feasibility_score(60);
        let (props, _) = resolve(&goal, &widget(PropsKind::Feasibility));
        assert_eq!(props.kind(), PropsKind::Feasibility);
        let value = serde_json::to_value(&props).unwrap();
        assert_eq!(value["type"], "feasibility");
        assert_eq!(value["rating"], "moderate");
    }
}
