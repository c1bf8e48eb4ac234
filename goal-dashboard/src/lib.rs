//! Goal Dashboard - per-goal widget composition
//!
//! Turns a goal record into a layout descriptor: which widgets to show, where
//! to put them at each responsive breakpoint, and the props each one renders.
//!
//! ## Pipeline
//!
//! ```text
//! Goal ─► GoalClassifier ─► GoalFeatures
//!                              │
//!            WidgetRegistry ─► CompositionEngine ─► ordered, placed widgets
//!                                                       │
//!                               goal-metrics ─► props resolvers ─► LayoutDescriptor
//! ```
//!
//! ## Example
//!
//! ```rust
//! use goal_dashboard::DashboardAssembler;
//! use goal_model::{Goal, GoalCategory};
//!
//! let assembler = DashboardAssembler::standard().unwrap();
//! let goal = Goal::new("Pay off credit cards", GoalCategory::DebtPayoff);
//! let layout = assembler.assemble(&goal);
//!
//! assert_eq!(layout.widget_ids()[0], "goal-overview");
//! assert!(layout.widget("debt-payoff").is_some());
//! ```
//!
//! Registry and configuration problems surface when the assembler is built.
//! Assembly itself never fails; degenerate input is reported as
//! [`DashboardWarning`]s on the descriptor.

pub mod assembler;
pub mod classifier;
pub mod composition;
pub mod config;
pub mod layout;
pub mod props;
pub mod registry;
pub mod status;
pub mod types;

pub use assembler::DashboardAssembler;
pub use classifier::{GoalClassifier, GoalFeatures};
pub use composition::{pack, ComposedWidget, CompositionEngine, Placement};
pub use config::{Breakpoint, ClassifierConfig, DashboardConfig, GridConfig, MetricsConfig, MAX_COLUMNS, MAX_ROW_SPAN};
pub use layout::{LayoutDescriptor, LayoutWidget};
pub use props::{FeasibilityRating, MilestoneBasis, MilestoneStep, WidgetProps};
pub use registry::{Eligibility, PropsKind, WidgetDescriptor, WidgetRegistry, WidgetRegistryBuilder};
pub use status::{
    collect_statuses, AgentState, AgentStatus, AgentStatusProvider, AgentStatusSnapshot,
    OfflineStatusProvider, StaticStatusProvider,
};
pub use types::{CostBracket, DashboardError, DashboardWarning, GridPosition, GridSpan, Result};
