//! # Leadboard
//!
//! A lead capture and pipeline dashboard client for a remote lead service.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Lead entities and the repository trait
//! - **Application Layer** ([`application`]) - Filtering, counter derivation,
//!   validated submission and dashboard orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Reqwest client for the
//!   lead service REST API
//!
//! ## Features
//!
//! - Conjunctive, case-insensitive lead filtering by search term, source and status
//! - Dashboard counters that prefer server-computed aggregates and fall back
//!   to local derivation when the stats endpoint is unavailable
//! - Client-side payload validation so the service is never called with
//!   incomplete leads
//!
//! ## Quick Start
//!
//! ```bash
//! export LEAD_API_URL="http://localhost:4000"
//!
//! # Browse the dashboard
//! cargo run -- dashboard --search ann --status qualified
//!
//! # Capture a lead
//! cargo run -- capture --first-name Ann --last-name Field --email ann@example.com
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]. See [`config`]
//! for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        filter_leads, summarize, DashboardService, DashboardSummary, DashboardView,
        FilterCriteria, LeadService, Selection,
    };
    pub use crate::config::Config;
    pub use crate::domain::entities::{DashboardStats, Lead, LeadPayload, LeadSource, LeadStatus};
    pub use crate::domain::repositories::LeadRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::ApiLeadRepository;
}
