//! Utility functions shared across the application.
//!
//! - [`text`] - Case normalization helpers for filter matching

pub mod text;
