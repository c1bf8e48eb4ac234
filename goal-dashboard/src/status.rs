//! Agent status collaborator.
//!
//! Capability agents run outside this crate. Their status reaches a dashboard
//! through an [`AgentStatusProvider`], which callers query before assembly to
//! produce a materialized [`AgentStatusSnapshot`]. Assembly itself stays
//! synchronous.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use goal_model::CapabilityTag;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{DashboardError, Result};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Coarse state of a capability agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum AgentState {
    Idle,
    Working,
    Degraded,
    Offline,
    /// Provider did not answer
    Unknown,
}

/// Status reported for one capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AgentStatus {
    pub capability: CapabilityTag,
    pub state: AgentState,
    /// Free-form activity line, e.g. the task being worked on
    pub detail: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AgentStatus {
    pub fn new(capability: CapabilityTag, state: AgentState) -> Self {
        Self {
            capability,
            state,
            detail: None,
            updated_at: None,
        }
    }

    pub fn unknown(capability: CapabilityTag) -> Self {
        Self::new(capability, AgentState::Unknown)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }
}

/// Source of agent status.
#[async_trait]
pub trait AgentStatusProvider: Send + Sync {
    /// Provider name used in logs.
    fn name(&self) -> &str;

    /// Current status of the agent serving `capability`.
    async fn status(&self, capability: CapabilityTag) -> Result<AgentStatus>;
}

/// Statuses keyed by capability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStatusSnapshot {
    statuses: BTreeMap<CapabilityTag, AgentStatus>,
}

impl AgentStatusSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, status: AgentStatus) {
        self.statuses.insert(status.capability, status);
    }

    pub fn get(&self, capability: CapabilityTag) -> Option<&AgentStatus> {
        self.statuses.get(&capability)
    }

    /// Statuses for `capabilities` in tag order. Tags missing from the
    /// snapshot come back as `Unknown`.
    pub fn for_capabilities<'a>(
        &self,
        capabilities: impl IntoIterator<Item = &'a CapabilityTag>,
    ) -> Vec<AgentStatus> {
        capabilities
            .into_iter()
            .map(|tag| {
                self.statuses
                    .get(tag)
                    .cloned()
                    .unwrap_or_else(|| AgentStatus::unknown(*tag))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

impl FromIterator<AgentStatus> for AgentStatusSnapshot {
    fn from_iter<I: IntoIterator<Item = AgentStatus>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for status in iter {
            snapshot.insert(status);
        }
        snapshot
    }
}

/// Query `capabilities` concurrently. A failed query is logged and recorded
/// as `Unknown`; this never fails as a whole.
pub async fn collect_statuses<P>(
    provider: &P,
    capabilities: impl IntoIterator<Item = CapabilityTag>,
) -> AgentStatusSnapshot
where
    P: AgentStatusProvider + ?Sized,
{
    let tags: Vec<_> = capabilities.into_iter().collect();
    let results = join_all(tags.iter().map(|tag| provider.status(*tag))).await;

    tags.into_iter()
        .zip(results)
        .map(|(tag, result)| match result {
            Ok(status) if status.capability == tag => status,
            Ok(status) => {
                warn!(
                    provider = provider.name(),
                    requested = %tag,
                    returned = %status.capability,
                    "Status provider answered for the wrong capability"
                );
                AgentStatus::unknown(tag)
            }
            Err(e) => {
                warn!(
                    provider = provider.name(),
                    capability = %tag,
                    error = %e,
                    "Agent status unavailable"
                );
                AgentStatus::unknown(tag)
            }
        })
        .collect()
}

/// Reports every agent as offline.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineStatusProvider;

impl OfflineStatusProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AgentStatusProvider for OfflineStatusProvider {
    fn name(&self) -> &str {
        "offline"
    }

    async fn status(&self, capability: CapabilityTag) -> Result<AgentStatus> {
        Ok(AgentStatus::new(capability, AgentState::Offline))
    }
}

/// Serves a fixed table of statuses. Capabilities outside the table are
/// reported as unavailable.
#[derive(Debug, Clone, Default)]
pub struct StaticStatusProvider {
    statuses: HashMap<CapabilityTag, AgentStatus>,
}

impl StaticStatusProvider {
    pub fn new(statuses: impl IntoIterator<Item = AgentStatus>) -> Self {
        Self {
            statuses: statuses
                .into_iter()
                .map(|status| (status.capability, status))
                .collect(),
        }
    }
}

#[async_trait]
impl AgentStatusProvider for StaticStatusProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn status(&self, capability: CapabilityTag) -> Result<AgentStatus> {
        self.statuses.get(&capability).cloned().ok_or_else(|| {
            DashboardError::StatusUnavailable(format!("no status for '{}'", capability))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_provider() {
        let snapshot = collect_statuses(
            &OfflineStatusProvider::new(),
            [CapabilityTag::Travel, CapabilityTag::Weather],
        )
        .await;

        assert_eq!(snapshot.len(), 2);
        assert_eq!(
            snapshot.get(CapabilityTag::Weather).unwrap().state,
            AgentState::Offline
        );
    }

    #[tokio::test]
    async fn test_failures_become_unknown() {
        let provider = StaticStatusProvider::new([AgentStatus::new(
            CapabilityTag::Financial,
            AgentState::Working,
        )
        .with_detail("Reconciling March budget")]);

        let snapshot =
            collect_statuses(&provider, [CapabilityTag::Financial, CapabilityTag::Legal]).await;

        let financial = snapshot.get(CapabilityTag::Financial).unwrap();
        assert_eq!(financial.state, AgentState::Working);
        assert_eq!(financial.detail.as_deref(), Some("Reconciling March budget"));
        assert_eq!(
            snapshot.get(CapabilityTag::Legal).unwrap().state,
            AgentState::Unknown
        );
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let provider: Box<dyn AgentStatusProvider> = Box::new(OfflineStatusProvider::new());
        let snapshot = collect_statuses(provider.as_ref(), CapabilityTag::all()).await;
        assert_eq!(snapshot.len(), CapabilityTag::all().len());
    }

    #[tokio::test]
    async fn test_static_provider_errors_on_missing_tag() {
        let provider = StaticStatusProvider::default();
        assert!(matches!(
            provider.status(CapabilityTag::Health).await,
            Err(DashboardError::StatusUnavailable(_))
        ));
    }

    #[test]
    fn test_for_capabilities_fills_gaps() {
        let snapshot: AgentStatusSnapshot =
            [AgentStatus::new(CapabilityTag::Travel, AgentState::Idle)]
                .into_iter()
                .collect();

        let statuses = snapshot.for_capabilities(&[CapabilityTag::Travel, CapabilityTag::Legal]);
        assert_eq!(statuses[0].state, AgentState::Idle);
        assert_eq!(statuses[1], AgentStatus::unknown(CapabilityTag::Legal));
    }
}
