//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Reqwest-based lead service client

pub mod http;
