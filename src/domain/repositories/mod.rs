//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; the concrete HTTP
//! implementation lives in `crate::infrastructure::http`. Mock
//! implementations are auto-generated via `mockall` for testing.

pub mod lead_repository;

pub use lead_repository::LeadRepository;

#[cfg(test)]
pub use lead_repository::MockLeadRepository;
