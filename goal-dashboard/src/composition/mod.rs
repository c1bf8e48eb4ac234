//! Widget selection and grid placement.
//!
//! Selection walks the registry once: required widgets first, then eligible
//! optional widgets, each group in registry declaration order, with at most
//! one entry per widget id. The order is part of the contract: a widget keeps
//! its slot across re-renders as long as the goal's features are unchanged.

mod grid;

pub use grid::{pack, GridPacker};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::GoalFeatures;
use crate::config::{Breakpoint, GridConfig};
use crate::registry::{WidgetDescriptor, WidgetRegistry};
use crate::types::GridPosition;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Position of a widget at one breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub breakpoint: String,
    pub position: GridPosition,
}

/// A selected widget with its placement at every breakpoint.
#[derive(Debug, Clone)]
pub struct ComposedWidget<'r> {
    pub descriptor: &'r WidgetDescriptor,
    pub placements: Vec<Placement>,
}

/// Selects and lays out widgets for classified goals.
#[derive(Debug, Clone)]
pub struct CompositionEngine {
    breakpoints: Vec<Breakpoint>,
}

impl CompositionEngine {
    pub fn new(grid: &GridConfig) -> Self {
        Self {
            breakpoints: grid.breakpoints.clone(),
        }
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Eligible widgets in display order.
    pub fn select<'r>(
        &self,
        features: &GoalFeatures,
        registry: &'r WidgetRegistry,
    ) -> Vec<&'r WidgetDescriptor> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut required = Vec::new();
        let mut optional = Vec::new();

        for widget in registry.iter() {
            if !widget.is_eligible(features) || !seen.insert(widget.id.as_str()) {
                continue;
            }
            if widget.required {
                required.push(widget);
            } else {
                optional.push(widget);
            }
        }

        required.extend(optional);
        required
    }

    /// Select widgets and place them at every configured breakpoint.
    pub fn compose<'r>(
        &self,
        features: &GoalFeatures,
        registry: &'r WidgetRegistry,
    ) -> Vec<ComposedWidget<'r>> {
        let selected = self.select(features, registry);
        let spans: Vec<_> = selected.iter().map(|w| w.span).collect();

        let per_breakpoint: Vec<Vec<GridPosition>> = self
            .breakpoints
            .iter()
            .map(|b| pack(&spans, b.columns))
            .collect();

        debug!(
            goal_id = %features.goal_id,
            category = %features.category,
            widgets = ?selected.iter().map(|w| w.id.as_str()).collect::<Vec<_>>(),
            "Composed dashboard"
        );

        selected
            .into_iter()
            .enumerate()
            .map(|(i, descriptor)| ComposedWidget {
                descriptor,
                placements: self
                    .breakpoints
                    .iter()
                    .zip(&per_breakpoint)
                    .map(|(breakpoint, positions)| Placement {
                        breakpoint: breakpoint.name.clone(),
                        position: positions[i],
                    })
                    .collect(),
            })
            .collect()
    }
}

impl Default for CompositionEngine {
    fn default() -> Self {
        Self::new(&GridConfig::default())
    }
}
