//! Core types for dashboard composition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Bracket a goal's estimated cost falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum CostBracket {
    Low,
    Medium,
    High,
    Premium,
}

/// Width and height of a widget in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct GridSpan {
    pub columns: u32,
    pub rows: u32,
}

impl GridSpan {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    pub const fn single() -> Self {
        Self::new(1, 1)
    }

    pub const fn wide(columns: u32) -> Self {
        Self::new(columns, 1)
    }
}

impl Default for GridSpan {
    fn default() -> Self {
        Self::single()
    }
}

/// Zero-based cell position of a placed widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct GridPosition {
    pub column: u32,
    pub row: u32,
    pub column_span: u32,
    pub row_span: u32,
}

impl GridPosition {
    /// Every (column, row) cell covered by this position.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.row..self.row + self.row_span).flat_map(move |row| {
            (self.column..self.column + self.column_span).map(move |column| (column, row))
        })
    }

    pub fn overlaps(&self, other: &GridPosition) -> bool {
        self.column < other.column + other.column_span
            && other.column < self.column + self.column_span
            && self.row < other.row + other.row_span
            && other.row < self.row + self.row_span
    }
}

/// Non-fatal degenerate-input notice attached to a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardWarning {
    /// Category outside the enumeration, shown as `general`
    UnknownCategory { raw: String },
    /// Target date is on or before evaluation time
    DeadlinePassed { target_date: DateTime<Utc> },
    /// A cost-based widget was selected for a goal without a cost
    MissingEstimatedCost { widget_id: String },
    /// Payment does not outpace interest
    DebtNeverResolves { debt_id: String },
    /// Actual spend exceeds the estimate
    OverBudget { categories: Vec<String> },
    /// Saved amount exceeds the target
    OverSaved { overage: f64 },
}

/// Collects warnings, dropping exact duplicates.
#[derive(Debug, Default)]
pub(crate) struct WarningSink {
    warnings: Vec<DashboardWarning>,
}

impl WarningSink {
    pub(crate) fn push(&mut self, warning: DashboardWarning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    pub(crate) fn into_vec(self) -> Vec<DashboardWarning> {
        self.warnings
    }
}

/// Error types for the dashboard engine.
///
/// Only registry and configuration setup can fail. Composition and assembly
/// are infallible once an assembler exists.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Widget registry is inconsistent
    #[error("Registry misconfiguration: {0}")]
    RegistryMisconfiguration(String),

    /// Dashboard configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// YAML could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Status collaborator failed
    #[error("Agent status unavailable: {0}")]
    StatusUnavailable(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_cells() {
        let pos = GridPosition {
            column: 1,
            row: 2,
            column_span: 2,
            row_span: 2,
        };
        let cells: Vec<_> = pos.cells().collect();
        assert_eq!(cells, vec![(1, 2), (2, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_overlap() {
        let a = GridPosition {
            column: 0,
            row: 0,
            column_span: 2,
            row_span: 1,
        };
        let b = GridPosition {
            column: 1,
            row: 0,
            column_span: 1,
            row_span: 1,
        };
        let c = GridPosition {
            column: 2,
            row: 0,
            column_span: 1,
            row_span: 2,
        };
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(!b.overlaps(&c));
    }

    #[test]
    fn test_warning_sink_dedupes() {
        let mut sink = WarningSink::default();
        sink.push(DashboardWarning::DebtNeverResolves {
            debt_id: "card".to_string(),
        });
        sink.push(DashboardWarning::DebtNeverResolves {
            debt_id: "card".to_string(),
        });
        sink.push(DashboardWarning::OverSaved { overage: 10.0 });
        assert_eq!(sink.into_vec().len(), 2);
    }
}
