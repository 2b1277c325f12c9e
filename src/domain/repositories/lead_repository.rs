//! Repository trait for lead data access.

use crate::domain::entities::{DashboardStats, Lead, LeadPayload};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the remote lead service.
///
/// Abstracts the three endpoints the client depends on so application
/// services can be tested against mocks.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ApiLeadRepository`] - HTTP implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Fetches all captured leads.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Fetch`] on transport failure, a non-success
    /// response, or a malformed body. Callers are expected to degrade to an
    /// empty lead list rather than fail.
    async fn fetch_leads(&self) -> Result<Vec<Lead>, AppError>;

    /// Creates a new lead from an already-validated payload.
    ///
    /// On success the returned [`Lead`] is fully formed: server-assigned
    /// identifier, default status and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Submission`] carrying a human-readable message.
    /// Callers must not mutate local lead state until success is confirmed.
    async fn create_lead(&self, payload: LeadPayload) -> Result<Lead, AppError>;

    /// Fetches the server-computed dashboard aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Fetch`]. The aggregate is optional by design:
    /// callers fall back to local derivation when this fails.
    async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, AppError>;
}
