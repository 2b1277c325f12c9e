//! Lead submission service.

use std::str::FromStr;
use std::sync::Arc;

use crate::domain::entities::{Lead, LeadPayload, LeadSource};
use crate::domain::repositories::LeadRepository;
use crate::error::AppError;
use serde_json::Value;
use validator::Validate;

/// Gates lead creation behind client-side payload validation.
///
/// The repository is never invoked with empty required fields or an unknown
/// source token; on repository failure the error propagates unchanged so the
/// caller can keep its form state and retry.
pub struct LeadService<R: LeadRepository> {
    repository: Arc<R>,
}

impl<R: LeadRepository> LeadService<R> {
    /// Creates a new lead submission service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and submits a new lead.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the payload fails client-side
    /// checks (the repository is not called), or [`AppError::Submission`]
    /// when the lead service rejects the creation.
    pub async fn submit(&self, payload: LeadPayload) -> Result<Lead, AppError> {
        Self::check_payload(&payload)?;

        tracing::debug!(email = %payload.email, "submitting lead");
        let lead = self.repository.create_lead(payload).await?;
        tracing::info!(id = %lead.id, "lead captured");
        Ok(lead)
    }

    /// Client-side required-field and enumeration checks.
    fn check_payload(payload: &LeadPayload) -> Result<(), AppError> {
        let mut fields = serde_json::Map::new();

        if let Err(errors) = payload.validate() {
            for (field, field_errors) in errors.field_errors() {
                let message = field_errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value for {field}"));
                fields.insert(field.to_string(), Value::String(message));
            }
        }

        if let Some(source) = payload.source.as_deref() {
            if LeadSource::from_str(source).is_err() {
                fields.insert(
                    "source".to_string(),
                    Value::String(format!("unknown lead source '{source}'")),
                );
            }
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(
                "Lead payload is invalid",
                Value::Object(fields),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLeadRepository;
    use chrono::Utc;

    fn payload() -> LeadPayload {
        LeadPayload {
            first_name: "Ann".to_string(),
            last_name: "Field".to_string(),
            email: "ann@example.com".to_string(),
            phone: None,
            company: Some("Acme".to_string()),
            source: Some("website".to_string()),
            notes: None,
        }
    }

    fn created_lead() -> Lead {
        Lead {
            id: "lead-1".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Field".to_string(),
            email: "ann@example.com".to_string(),
            phone: None,
            company: Some("Acme".to_string()),
            source: Some("website".to_string()),
            notes: None,
            status: Some("New".to_string()),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        }
    }

    #[tokio::test]
    async fn test_submit_success() {
        let mut mock_repo = MockLeadRepository::new();
        mock_repo
            .expect_create_lead()
            .withf(|p| p.email == "ann@example.com")
            .times(1)
            .returning(|_| Ok(created_lead()));

        let service = LeadService::new(Arc::new(mock_repo));
        let lead = service.submit(payload()).await.unwrap();

        assert_eq!(lead.id, "lead-1");
        assert_eq!(lead.status.as_deref(), Some("New"));
    }

    #[tokio::test]
    async fn test_missing_email_never_reaches_repository() {
        let mut mock_repo = MockLeadRepository::new();
        mock_repo.expect_create_lead().never();

        let service = LeadService::new(Arc::new(mock_repo));
        let mut bad = payload();
        bad.email = String::new();

        let err = service.submit(bad).await.unwrap_err();
        match err {
            AppError::Validation { details, .. } => {
                assert!(details.get("email").is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_source_is_rejected() {
        let mut mock_repo = MockLeadRepository::new();
        mock_repo.expect_create_lead().never();

        let service = LeadService::new(Arc::new(mock_repo));
        let mut bad = payload();
        bad.source = Some("carrier-pigeon".to_string());

        let err = service.submit(bad).await.unwrap_err();
        match err {
            AppError::Validation { details, .. } => {
                assert_eq!(
                    details["source"],
                    "unknown lead source 'carrier-pigeon'"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_absent_source_is_allowed() {
        let mut mock_repo = MockLeadRepository::new();
        mock_repo
            .expect_create_lead()
            .times(1)
            .returning(|_| Ok(created_lead()));

        let service = LeadService::new(Arc::new(mock_repo));
        let mut p = payload();
        p.source = None;

        assert!(service.submit(p).await.is_ok());
    }

    #[tokio::test]
    async fn test_repository_rejection_propagates_message() {
        let mut mock_repo = MockLeadRepository::new();
        mock_repo
            .expect_create_lead()
            .times(1)
            .returning(|_| Err(AppError::submission("Email already exists")));

        let service = LeadService::new(Arc::new(mock_repo));
        let err = service.submit(payload()).await.unwrap_err();

        assert!(matches!(err, AppError::Submission { .. }));
        assert_eq!(err.to_string(), "Email already exists");
    }
}
