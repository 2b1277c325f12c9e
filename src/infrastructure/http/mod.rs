//! HTTP client for the remote lead service.

pub mod api_lead_repository;

pub use api_lead_repository::ApiLeadRepository;
