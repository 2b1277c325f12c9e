//! Business logic services for the application layer.

pub mod dashboard_service;
pub mod filter_service;
pub mod lead_service;
pub mod stats_service;

pub use dashboard_service::{DashboardService, DashboardView};
pub use filter_service::{filter_leads, FilterCriteria, Selection};
pub use lead_service::LeadService;
pub use stats_service::{summarize, DashboardSummary};
