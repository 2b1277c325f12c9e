//! Application layer services implementing business logic.
//!
//! This layer holds the algorithmic core of the client and orchestrates
//! repository calls around it. Services consume the repository trait and
//! stay independent of the HTTP transport.
//!
//! # Available Services
//!
//! - [`services::filter_service`] - Pure conjunctive lead filtering
//! - [`services::stats_service`] - Dashboard counter derivation with
//!   server-stats preference and local fallback
//! - [`services::lead_service::LeadService`] - Validated lead submission
//! - [`services::dashboard_service::DashboardService`] - Concurrent fetch,
//!   filter and summarize

pub mod services;
