//! Dashboard orchestration.
//!
//! Fetches leads and the server aggregate as two independently-resolving
//! futures, then runs the pure filter and summary steps. Fetch failures are
//! absorbed here: the dashboard must stay usable with an empty lead list or
//! without the stats endpoint.

use std::sync::Arc;

use crate::application::services::filter_service::{filter_leads, FilterCriteria};
use crate::application::services::stats_service::{summarize, DashboardSummary};
use crate::domain::entities::Lead;
use crate::domain::repositories::LeadRepository;
use serde::Serialize;

/// A fully derived dashboard: the filtered leads plus the counters.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub leads: Vec<Lead>,
    pub summary: DashboardSummary,
}

/// Builds [`DashboardView`]s from the remote lead service.
pub struct DashboardService<R: LeadRepository> {
    repository: Arc<R>,
}

impl<R: LeadRepository> DashboardService<R> {
    /// Creates a new dashboard service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Loads the dashboard for the given criteria.
    ///
    /// Never fails: a failed leads fetch renders as an empty dashboard and a
    /// failed stats fetch falls back to locally derived counters. Both
    /// degradations are logged at `warn`.
    pub async fn load(&self, criteria: &FilterCriteria) -> DashboardView {
        let (leads, stats) = tokio::join!(
            self.repository.fetch_leads(),
            self.repository.fetch_dashboard_stats()
        );

        let leads = match leads {
            Ok(leads) => leads,
            Err(e) => {
                tracing::warn!(error = %e, "lead fetch failed, rendering empty dashboard");
                Vec::new()
            }
        };

        let stats = match stats {
            Ok(stats) => Some(stats),
            Err(e) => {
                tracing::warn!(error = %e, "stats fetch failed, deriving counters locally");
                None
            }
        };

        let visible = filter_leads(&leads, criteria);
        let summary = summarize(&leads, &visible, stats.as_ref());

        DashboardView {
            leads: visible,
            summary,
        }
    }
}
