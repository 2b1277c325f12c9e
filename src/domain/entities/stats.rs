//! Server-computed dashboard aggregate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate lead statistics as computed by the lead service.
///
/// Fetched from `GET /leads/dashboard`. The endpoint is allowed to be
/// unavailable: callers fall back to deriving an equivalent summary from the
/// in-memory lead set (see [`crate::application::services::stats_service`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_leads: u64,
    pub new_leads: u64,
    pub qualified_leads: u64,
    /// Leads waiting on a follow-up action.
    #[serde(default)]
    pub requiring_attention: u64,
    /// Percentage of total leads that reached Qualified, 0-100. May carry a
    /// fractional part; rounded once at display time.
    pub conversion_rate: f64,
    /// Per-status lead counts keyed by status name.
    #[serde(default)]
    pub by_status: HashMap<String, u64>,
}
