//! Widget capability registry.
//!
//! The registry is append-only while it is being built and immutable
//! afterwards. All consistency checks run in [`WidgetRegistryBuilder::build`],
//! so a misconfigured registry fails at startup and never during composition.

mod descriptor;
mod standard;

pub use descriptor::{Eligibility, PropsKind, WidgetDescriptor};

use std::collections::HashMap;

use serde::Deserialize;
use tracing::info;

use crate::config::{MAX_COLUMNS, MAX_ROW_SPAN};
use crate::types::{DashboardError, Result};

/// Immutable, declaration-ordered set of widget descriptors.
#[derive(Debug, Clone)]
pub struct WidgetRegistry {
    widgets: Vec<WidgetDescriptor>,
    index: HashMap<String, usize>,
}

/// Shape of a registry YAML file.
#[derive(Debug, Deserialize)]
struct RegistryFile {
    widgets: Vec<WidgetDescriptor>,
}

impl WidgetRegistry {
    pub fn builder() -> WidgetRegistryBuilder {
        WidgetRegistryBuilder::new()
    }

    /// The built-in widget library.
    pub fn standard() -> Result<Self> {
        Self::builder().register_all(standard::widgets()).build()
    }

    /// Load a registry from YAML (`widgets: [...]`).
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: RegistryFile = serde_yaml::from_str(yaml)?;
        Self::builder().register_all(file.widgets).build()
    }

    pub fn get(&self, id: &str) -> Option<&WidgetDescriptor> {
        self.index.get(id).map(|&i| &self.widgets[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &WidgetDescriptor> {
        self.widgets.iter()
    }

    /// Ids of required widgets in declaration order.
    pub fn required_ids(&self) -> Vec<&str> {
        self.widgets
            .iter()
            .filter(|w| w.required)
            .map(|w| w.id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

/// Collects descriptors and validates them as a whole.
#[derive(Debug, Default)]
pub struct WidgetRegistryBuilder {
    widgets: Vec<WidgetDescriptor>,
}

impl WidgetRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor.
    pub fn register(mut self, widget: WidgetDescriptor) -> Self {
        self.widgets.push(widget);
        self
    }

    /// Append several descriptors, keeping their order.
    pub fn register_all(mut self, widgets: impl IntoIterator<Item = WidgetDescriptor>) -> Self {
        self.widgets.extend(widgets);
        self
    }

    /// Validate and freeze the registry.
    pub fn build(self) -> Result<WidgetRegistry> {
        let mut index = HashMap::with_capacity(self.widgets.len());

        for (position, widget) in self.widgets.iter().enumerate() {
            validate_descriptor(widget)?;
            if index.insert(widget.id.clone(), position).is_some() {
                return Err(DashboardError::RegistryMisconfiguration(format!(
                    "widget '{}' is registered more than once",
                    widget.id
                )));
            }
        }

        info!(
            widgets = self.widgets.len(),
            required = self.widgets.iter().filter(|w| w.required).count(),
            "Widget registry initialized"
        );

        Ok(WidgetRegistry {
            widgets: self.widgets,
            index,
        })
    }
}

fn validate_descriptor(widget: &WidgetDescriptor) -> Result<()> {
    let fail = |reason: String| Err(DashboardError::RegistryMisconfiguration(reason));

    if widget.id.trim().is_empty() {
        return fail(format!("widget '{}' has an empty id", widget.title));
    }
    if widget.required && !widget.eligibility.is_unconstrained() {
        return fail(format!(
            "widget '{}' is required but also declares eligibility clauses",
            widget.id
        ));
    }
    if widget.span.columns == 0 || widget.span.rows == 0 {
        return fail(format!("widget '{}' has a zero grid span", widget.id));
    }
    if widget.span.columns > MAX_COLUMNS || widget.span.rows > MAX_ROW_SPAN {
        return fail(format!(
            "widget '{}' spans {}x{} (at most {}x{})",
            widget.id, widget.span.columns, widget.span.rows, MAX_COLUMNS, MAX_ROW_SPAN
        ));
    }
    if let Some(min) = widget.eligibility.min_estimated_cost {
        if !min.is_finite() || min < 0.0 {
            return fail(format!(
                "widget '{}' has an invalid minimum cost {}",
                widget.id, min
            ));
        }
    }
    if !(widget.default_props.is_null() || widget.default_props.is_object()) {
        return fail(format!(
            "widget '{}' default props must be an object",
            widget.id
        ));
    }
    Ok(())
}
