//! Goal dashboard assembly.
//!
//! Classify the goal, compose widgets from the registry, then resolve each
//! widget's props. Assembly is a pure function of the goal, the evaluation
//! time and an optional agent status snapshot.

use std::sync::Arc;

use chrono::{DateTime, NaiveTime, Utc};
use goal_metrics::financial_progress;
use goal_model::Goal;
use tracing::debug;

use crate::classifier::{GoalClassifier, GoalFeatures};
use crate::composition::CompositionEngine;
use crate::config::DashboardConfig;
use crate::layout::{LayoutDescriptor, LayoutWidget};
use crate::props::{resolve_props, PropsContext};
use crate::registry::WidgetRegistry;
use crate::status::AgentStatusSnapshot;
use crate::types::{DashboardWarning, Result, WarningSink};

/// Builds layout descriptors for goals.
///
/// Cheap to clone; the registry is shared.
#[derive(Debug, Clone)]
pub struct DashboardAssembler {
    registry: Arc<WidgetRegistry>,
    classifier: GoalClassifier,
    engine: CompositionEngine,
    config: DashboardConfig,
}

impl DashboardAssembler {
    /// Create an assembler. Fails if `config` is invalid.
    pub fn new(registry: Arc<WidgetRegistry>, config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry,
            classifier: GoalClassifier::with_config(config.classifier.clone()),
            engine: CompositionEngine::new(&config.grid),
            config,
        })
    }

    /// Standard widget library with default configuration.
    pub fn standard() -> Result<Self> {
        Self::new(Arc::new(WidgetRegistry::standard()?), DashboardConfig::default())
    }

    pub fn registry(&self) -> &Arc<WidgetRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Assemble a dashboard as of the start of the current UTC day.
    ///
    /// Calls made on the same day produce equal descriptors for an
    /// unchanged goal.
    pub fn assemble(&self, goal: &Goal) -> LayoutDescriptor {
        self.assemble_at(goal, start_of_day(Utc::now()))
    }

    /// Assemble a dashboard as of `now`.
    pub fn assemble_at(&self, goal: &Goal, now: DateTime<Utc>) -> LayoutDescriptor {
        self.build(goal, now, None)
    }

    /// Assemble with agent statuses for the activity widget.
    pub fn assemble_with_status(
        &self,
        goal: &Goal,
        now: DateTime<Utc>,
        statuses: &AgentStatusSnapshot,
    ) -> LayoutDescriptor {
        self.build(goal, now, Some(statuses))
    }

    fn build(
        &self,
        goal: &Goal,
        now: DateTime<Utc>,
        statuses: Option<&AgentStatusSnapshot>,
    ) -> LayoutDescriptor {
        let features = self.classifier.classify(goal, now);
        let mut warnings = WarningSink::default();
        goal_warnings(goal, &features, now, &mut warnings);

        let ctx = PropsContext {
            goal,
            features: &features,
            now,
            metrics: &self.config.metrics,
            statuses,
        };

        let widgets: Vec<LayoutWidget> = self
            .engine
            .compose(&features, &self.registry)
            .into_iter()
            .map(|composed| {
                let descriptor = composed.descriptor;
                LayoutWidget {
                    widget_id: descriptor.id.clone(),
                    title: descriptor.title.clone(),
                    required: descriptor.required,
                    props: resolve_props(descriptor, &ctx, &mut warnings),
                    options: descriptor.default_props.clone(),
                    placements: composed.placements,
                }
            })
            .collect();

        let warnings = warnings.into_vec();
        debug!(
            goal_id = %goal.id,
            widgets = widgets.len(),
            warnings = warnings.len(),
            "Assembled goal dashboard"
        );

        LayoutDescriptor {
            goal_id: goal.id.clone(),
            category: features.category,
            evaluated_at: now,
            breakpoints: self.engine.breakpoints().to_vec(),
            features,
            widgets,
            warnings,
        }
    }
}

fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Warnings that depend on the goal alone, not on any widget.
fn goal_warnings(
    goal: &Goal,
    features: &GoalFeatures,
    now: DateTime<Utc>,
    warnings: &mut WarningSink,
) {
    if let Some(raw) = &features.unknown_category {
        warnings.push(DashboardWarning::UnknownCategory { raw: raw.clone() });
    }

    if let Some(target_date) = goal.target_date.filter(|t| *t <= now) {
        warnings.push(DashboardWarning::DeadlinePassed { target_date });
    }

    let financial = financial_progress(features.estimated_cost, goal.current_saved);
    if financial.over {
        warnings.push(DashboardWarning::OverSaved {
            overage: financial.overage,
        });
    }
}
