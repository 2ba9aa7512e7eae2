//! Monitoring Gateway Port
//!
//! Read-only lookups against the internal monitoring backend.

use async_trait::async_trait;

use crate::domain::entities::{GroupId, GroupInfo, SensorSnapshot};
use crate::domain::errors::DomainError;

/// Service interface for the monitoring backend.
///
/// Both lookups are pass-through: no transformation, no caching, no retry.
/// Failures surface as [`DomainError::Upstream`].
#[async_trait]
pub trait MonitoringGateway: Send + Sync {
    /// Fetch site/zone metadata for a group
    async fn fetch_group_info(&self, group_id: &GroupId) -> Result<GroupInfo, DomainError>;

    /// Fetch live sensor records for a group
    async fn fetch_sensor_snapshot(
        &self,
        group_id: &GroupId,
    ) -> Result<SensorSnapshot, DomainError>;
}
