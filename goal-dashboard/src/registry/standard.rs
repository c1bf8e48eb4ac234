//! Built-in widget library.

use goal_model::{CapabilityTag, GoalCategory};
use serde_json::json;

use super::descriptor::{Eligibility, PropsKind, WidgetDescriptor};
use crate::types::GridSpan;

/// Estimated cost at which the investment growth widget appears.
const INVESTMENT_TRACKER_MIN_COST: f64 = 10_000.0;

fn categories_where(
    predicate: impl Fn(&GoalCategory) -> bool,
) -> impl Iterator<Item = GoalCategory> {
    GoalCategory::all().into_iter().filter(move |c| predicate(c))
}

/// Standard widgets in display-priority order.
pub(crate) fn widgets() -> Vec<WidgetDescriptor> {
    use GoalCategory::*;

    vec![
        // ========== Always shown ==========
        WidgetDescriptor::required("goal-overview", "Goal Overview", PropsKind::GoalOverview)
            .with_span(GridSpan::wide(2)),
        WidgetDescriptor::required("overall-progress", "Overall Progress", PropsKind::OverallProgress),
        WidgetDescriptor::required("smart-summary", "SMART Breakdown", PropsKind::SmartSummary),
        // ========== Financial ==========
        WidgetDescriptor::optional(
            "savings-plan",
            "Savings Plan",
            PropsKind::SavingsPlan,
            Eligibility::any()
                .in_categories([Savings, Investment, Travel, Immigration, Education, Business])
                .with_deadline(),
        ),
        WidgetDescriptor::optional(
            "investment-growth",
            "Investment Growth",
            PropsKind::SavingsPlan,
            Eligibility::any()
                .in_categories([Investment, Savings])
                .min_cost(INVESTMENT_TRACKER_MIN_COST),
        )
        .with_default_props(json!({ "view": "growth" })),
        WidgetDescriptor::optional(
            "debt-payoff",
            "Debt Payoff Planner",
            PropsKind::DebtPayoff,
            Eligibility::any().in_categories([DebtPayoff]),
        )
        .with_span(GridSpan::new(2, 2)),
        WidgetDescriptor::optional(
            "budget-tracker",
            "Budget Tracker",
            PropsKind::Budget,
            Eligibility::any().with_capabilities([CapabilityTag::Financial]),
        )
        .with_span(GridSpan::wide(2)),
        // ========== Momentum ==========
        WidgetDescriptor::optional(
            "streak-tracker",
            "Streak Tracker",
            PropsKind::Streak,
            Eligibility::any().in_categories(
                categories_where(GoalCategory::is_habitual).chain([Creative, SkillDevelopment]),
            ),
        ),
        WidgetDescriptor::optional(
            "milestone-ladder",
            "Milestones",
            PropsKind::Milestones,
            Eligibility::any().in_categories(
                categories_where(|c| c.is_financial() || c.is_habitual())
                    .chain([SkillDevelopment, Education]),
            ),
        ),
        WidgetDescriptor::optional(
            "deadline-countdown",
            "Deadline",
            PropsKind::DeadlineCountdown,
            Eligibility::any().with_deadline(),
        ),
        WidgetDescriptor::optional(
            "feasibility-gauge",
            "Feasibility",
            PropsKind::Feasibility,
            Eligibility::any().with_capabilities([CapabilityTag::Research]),
        ),
        // ========== Domain panels ==========
        WidgetDescriptor::optional(
            "travel-planner",
            "Trip Planner",
            PropsKind::Static,
            Eligibility::any().in_categories([Travel, Immigration]),
        )
        .with_span(GridSpan::wide(2))
        .with_default_props(json!({ "sections": ["itinerary", "documents", "bookings"] })),
        WidgetDescriptor::optional(
            "weather-outlook",
            "Weather Outlook",
            PropsKind::Static,
            Eligibility::any().with_capabilities([CapabilityTag::Weather]),
        )
        .with_default_props(json!({ "forecastDays": 7 })),
        WidgetDescriptor::optional(
            "learning-tracker",
            "Learning Tracker",
            PropsKind::Static,
            Eligibility::any().with_capabilities([CapabilityTag::Learning]),
        )
        .with_default_props(json!({ "sections": ["resources", "sessions"] })),
        WidgetDescriptor::optional(
            "fitness-tracker",
            "Health & Fitness",
            PropsKind::Static,
            Eligibility::any().with_capabilities([CapabilityTag::Health]),
        )
        .with_default_props(json!({ "metrics": ["workouts", "weight", "sleep"] })),
        WidgetDescriptor::optional(
            "career-roadmap",
            "Career Roadmap",
            PropsKind::Static,
            Eligibility::any().in_categories([Career, SkillDevelopment, Education]),
        )
        .with_span(GridSpan::wide(2)),
        WidgetDescriptor::optional(
            "business-launchpad",
            "Business Launchpad",
            PropsKind::Static,
            Eligibility::any()
                .in_categories([Business])
                .with_capabilities([CapabilityTag::Business]),
        )
        .with_span(GridSpan::wide(2)),
        WidgetDescriptor::optional(
            "legal-checklist",
            "Legal Checklist",
            PropsKind::Static,
            Eligibility::any().with_capabilities([CapabilityTag::Legal]),
        ),
        WidgetDescriptor::optional(
            "agent-activity",
            "Agent Activity",
            PropsKind::AgentActivity,
            Eligibility::any().with_capabilities(CapabilityTag::all()),
        ),
    ]
}
