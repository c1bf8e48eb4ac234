//! Configuration for the dashboard engine.

use std::collections::HashSet;

use goal_metrics::{DebtStrategy, SavingsPeriod};
use serde::{Deserialize, Serialize};

use crate::types::{DashboardError, Result};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Widest grid the engine lays out.
pub const MAX_COLUMNS: u32 = 12;

/// Tallest widget, in grid rows.
pub const MAX_ROW_SPAN: u32 = 12;

/// Configuration for a dashboard assembler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Responsive grid configuration
    pub grid: GridConfig,
    /// Classifier configuration
    pub classifier: ClassifierConfig,
    /// Metric defaults
    pub metrics: MetricsConfig,
}

impl DashboardConfig {
    /// Load and validate config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.classifier.validate()?;
        self.metrics.validate()
    }
}

/// A named viewport width and its column count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub name: String,
    /// Minimum viewport width in pixels
    pub min_width: u32,
    pub columns: u32,
}

impl Breakpoint {
    pub fn new(name: impl Into<String>, min_width: u32, columns: u32) -> Self {
        Self {
            name: name.into(),
            min_width,
            columns,
        }
    }
}

/// Responsive grid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Breakpoints, narrowest first
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            breakpoints: vec![
                Breakpoint::new("mobile", 0, 1),
                Breakpoint::new("tablet", 640, 2),
                Breakpoint::new("desktop", 1024, 3),
                Breakpoint::new("wide", 1440, 4),
            ],
        }
    }
}

impl GridConfig {
    /// Breakpoint that applies at a viewport width.
    pub fn breakpoint_for_width(&self, width: u32) -> Option<&Breakpoint> {
        self.breakpoints
            .iter()
            .filter(|b| b.min_width <= width)
            .max_by_key(|b| b.min_width)
    }

    fn validate(&self) -> Result<()> {
        if self.breakpoints.is_empty() {
            return Err(DashboardError::InvalidConfig(
                "at least one breakpoint is required".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for breakpoint in &self.breakpoints {
            if !names.insert(breakpoint.name.as_str()) {
                return Err(DashboardError::InvalidConfig(format!(
                    "duplicate breakpoint name '{}'",
                    breakpoint.name
                )));
            }
            if breakpoint.columns == 0 || breakpoint.columns > MAX_COLUMNS {
                return Err(DashboardError::InvalidConfig(format!(
                    "breakpoint '{}' has {} columns (expected 1..={})",
                    breakpoint.name, breakpoint.columns, MAX_COLUMNS
                )));
            }
        }

        if self
            .breakpoints
            .windows(2)
            .any(|pair| pair[0].min_width >= pair[1].min_width)
        {
            return Err(DashboardError::InvalidConfig(
                "breakpoints must be ordered by ascending min width".to_string(),
            ));
        }

        Ok(())
    }
}

/// Lower bounds of each cost bracket above `low`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Costs at or above this are `medium`
    pub medium_from: f64,
    /// Costs at or above this are `high`
    pub high_from: f64,
    /// Costs at or above this are `premium`
    pub premium_from: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            medium_from: 1_000.0,
            high_from: 10_000.0,
            premium_from: 50_000.0,
        }
    }
}

impl ClassifierConfig {
    fn validate(&self) -> Result<()> {
        let bounds = [self.medium_from, self.high_from, self.premium_from];
        if bounds.iter().any(|b| !b.is_finite() || *b <= 0.0) {
            return Err(DashboardError::InvalidConfig(
                "cost bracket bounds must be positive".to_string(),
            ));
        }
        if !(self.medium_from < self.high_from && self.high_from < self.premium_from) {
            return Err(DashboardError::InvalidConfig(
                "cost bracket bounds must be strictly ascending".to_string(),
            ));
        }
        Ok(())
    }
}

/// Defaults used when resolving widget props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Period the savings widget highlights
    pub savings_period: SavingsPeriod,
    /// Ordering used by the debt payoff widget
    pub debt_strategy: DebtStrategy,
    /// Extra monthly payment when a goal does not specify one
    pub default_extra_payment: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            savings_period: SavingsPeriod::Monthly,
            debt_strategy: DebtStrategy::Avalanche,
            default_extra_payment: 0.0,
        }
    }
}

impl MetricsConfig {
    fn validate(&self) -> Result<()> {
        if !self.default_extra_payment.is_finite() || self.default_extra_payment < 0.0 {
            return Err(DashboardError::InvalidConfig(
                "default extra payment must be a non-negative amount".to_string(),
            ));
        }
        Ok(())
    }
}
