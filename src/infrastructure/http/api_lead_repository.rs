//! HTTP implementation of [`LeadRepository`] against the remote lead service.

use std::time::Duration;

use crate::domain::entities::{DashboardStats, Lead, LeadPayload};
use crate::domain::repositories::LeadRepository;
use crate::error::AppError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Fallback shown when a rejection response carries no usable `message`.
const GENERIC_SUBMISSION_MESSAGE: &str = "Lead submission failed. Please try again.";

/// JSON envelope used by every lead service endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Reqwest-backed client for the lead service REST API.
#[derive(Clone)]
pub struct ApiLeadRepository {
    client: reqwest::Client,
    base_url: String,
}

impl ApiLeadRepository {
    /// Creates a repository for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.url(path);
        tracing::debug!(%url, "fetching");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::fetch(path, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(path, format!("server returned {status}")));
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| AppError::fetch(path, format!("malformed response body: {e}")))?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl LeadRepository for ApiLeadRepository {
    async fn fetch_leads(&self) -> Result<Vec<Lead>, AppError> {
        self.get_data("/leads").await
    }

    async fn create_lead(&self, payload: LeadPayload) -> Result<Lead, AppError> {
        let url = self.url("/leads/create-lead");
        tracing::debug!(%url, email = %payload.email, "creating lead");

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::submission(format!("Could not reach the lead service: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            // Surface the server's message when the rejection body has one.
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| GENERIC_SUBMISSION_MESSAGE.to_string());
            return Err(AppError::submission(message));
        }

        let envelope: Envelope<Lead> = response.json().await.map_err(|e| {
            AppError::submission(format!("Lead was not confirmed, malformed response: {e}"))
        })?;
        Ok(envelope.data)
    }

    async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        self.get_data("/leads/dashboard").await
    }
}
