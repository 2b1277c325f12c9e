//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures mirroring the lead service's wire
//! format (camelCase JSON, `_id` identifiers). Business rules live in the
//! application layer, not here.
//!
//! # Entity Types
//!
//! - [`Lead`] - A captured sales prospect
//! - [`LeadPayload`] - Input for creating a new lead
//! - [`LeadSource`] / [`LeadStatus`] - Closed enumerations for the channel
//!   and pipeline-stage fields
//! - [`DashboardStats`] - Server-computed aggregate counters

pub mod lead;
pub mod stats;

pub use lead::{Lead, LeadPayload, LeadSource, LeadStatus};
pub use stats::DashboardStats;
