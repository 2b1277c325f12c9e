//! Dashboard counter derivation.
//!
//! The displayed counters prefer the server-computed aggregate when one was
//! fetched and fall back to counting the in-memory leads when it was not.
//! Both arms are explicit so the fallback path is testable in isolation.

use crate::domain::entities::{DashboardStats, Lead};
use crate::utils::text;
use serde::Serialize;

/// Counters shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Count of the unfiltered lead set, regardless of filter state.
    pub total_leads: u64,
    pub new_leads: u64,
    pub qualified_leads: u64,
    /// Rounded half-away-from-zero, applied once.
    pub conversion_rate_percent: u32,
}

/// Where a status counter comes from.
enum CountSource<'a> {
    /// The server aggregate supplied the value.
    Provided(u64),
    /// Count leads in `status` over the visible (filtered) set.
    Derived { leads: &'a [Lead], status: &'a str },
}

impl CountSource<'_> {
    fn resolve(self) -> u64 {
        match self {
            CountSource::Provided(n) => n,
            CountSource::Derived { leads, status } => leads
                .iter()
                .filter(|lead| text::eq_ci(lead.status.as_deref().unwrap_or(""), status))
                .count() as u64,
        }
    }
}

/// Derives the dashboard counters.
///
/// `all_leads` is the unfiltered set (drives `total_leads`), `visible_leads`
/// the currently filtered view (drives the fallback status counts), `server`
/// the aggregate from `GET /leads/dashboard` when it resolved.
pub fn summarize(
    all_leads: &[Lead],
    visible_leads: &[Lead],
    server: Option<&DashboardStats>,
) -> DashboardSummary {
    let total_leads = all_leads.len() as u64;

    let new_leads = match server {
        Some(stats) => CountSource::Provided(stats.new_leads),
        None => CountSource::Derived {
            leads: visible_leads,
            status: "new",
        },
    }
    .resolve();

    let qualified_leads = match server {
        Some(stats) => CountSource::Provided(stats.qualified_leads),
        None => CountSource::Derived {
            leads: visible_leads,
            status: "qualified",
        },
    }
    .resolve();

    let conversion_rate_percent = match server {
        Some(stats) => stats.conversion_rate.round() as u32,
        None if total_leads > 0 => {
            ((qualified_leads as f64 / total_leads as f64) * 100.0).round() as u32
        }
        None => 0,
    };

    DashboardSummary {
        total_leads,
        new_leads,
        qualified_leads,
        conversion_rate_percent,
    }
}
