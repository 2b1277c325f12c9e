//! Lead entity representing a captured sales prospect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// A captured sales prospect record.
///
/// Leads are created through [`LeadPayload`] submission and come back from the
/// server fully formed: identifier, default status and timestamps are all
/// server-assigned. This client never mutates or deletes a lead; status
/// transitions happen server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Server-assigned identifier, immutable once assigned.
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Canonical lowercase-hyphenated acquisition channel token, see [`LeadSource`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Pipeline stage; case may vary in storage, compare case-insensitively.
    /// Absent means "New".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Status for display, defaulting absent to "New".
    pub fn display_status(&self) -> &str {
        self.status.as_deref().unwrap_or(LeadStatus::New.as_str())
    }
}

/// Channel through which a lead was acquired.
///
/// Stored on the wire as canonical lowercase-hyphenated tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadSource {
    Website,
    SocialMedia,
    Referral,
    ColdCall,
    Event,
    Advertisement,
}

impl LeadSource {
    pub const ALL: [LeadSource; 6] = [
        LeadSource::Website,
        LeadSource::SocialMedia,
        LeadSource::Referral,
        LeadSource::ColdCall,
        LeadSource::Event,
        LeadSource::Advertisement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Website => "website",
            LeadSource::SocialMedia => "social-media",
            LeadSource::Referral => "referral",
            LeadSource::ColdCall => "cold-call",
            LeadSource::Event => "event",
            LeadSource::Advertisement => "advertisement",
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| format!("unknown lead source '{s}'"))
    }
}

/// Pipeline stage of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Lost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Lost => "Lost",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = String;

    /// Case-insensitive, matching how statuses are compared everywhere else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown lead status '{s}'"))
    }
}

/// Input data for creating a new lead.
///
/// Validated client-side before submission: the server is never invoked with
/// empty required fields.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Must be one of the canonical [`LeadSource`] tokens when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lead(id: &str) -> Lead {
        Lead {
            id: id.to_string(),
            first_name: "Ann".to_string(),
            last_name: "Field".to_string(),
            email: "ann@example.com".to_string(),
            phone: None,
            company: Some("Acme".to_string()),
            source: Some("website".to_string()),
            notes: None,
            status: Some("New".to_string()),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_lead_full_name() {
        let lead = sample_lead("1");
        assert_eq!(lead.full_name(), "Ann Field");
    }

    #[test]
    fn test_display_status_defaults_to_new() {
        let mut lead = sample_lead("1");
        lead.status = None;
        assert_eq!(lead.display_status(), "New");
    }

    #[test]
    fn test_lead_wire_format_uses_underscore_id_and_camel_case() {
        let json = serde_json::json!({
            "_id": "abc",
            "firstName": "Bob",
            "lastName": "Stone",
            "email": "bob@x.com",
            "source": "cold-call",
            "createdAt": "2024-03-01T12:00:00Z"
        });

        let lead: Lead = serde_json::from_value(json).unwrap();
        assert_eq!(lead.id, "abc");
        assert_eq!(lead.first_name, "Bob");
        assert_eq!(lead.source.as_deref(), Some("cold-call"));
        assert!(lead.status.is_none());
        assert!(lead.created_at.is_some());

        let out = serde_json::to_value(&lead).unwrap();
        assert_eq!(out["_id"], "abc");
        assert_eq!(out["firstName"], "Bob");
        assert!(out.get("phone").is_none());
    }

    #[test]
    fn test_lead_source_round_trip() {
        for source in LeadSource::ALL {
            assert_eq!(source.as_str().parse::<LeadSource>().unwrap(), source);
        }
        assert!("carrier-pigeon".parse::<LeadSource>().is_err());
    }

    #[test]
    fn test_lead_status_parse_is_case_insensitive() {
        assert_eq!("qualified".parse::<LeadStatus>().unwrap(), LeadStatus::Qualified);
        assert_eq!("NEW".parse::<LeadStatus>().unwrap(), LeadStatus::New);
        assert!("archived".parse::<LeadStatus>().is_err());
        assert_eq!(LeadStatus::default(), LeadStatus::New);
    }

    #[test]
    fn test_payload_requires_nonempty_fields() {
        let payload = LeadPayload {
            first_name: "".to_string(),
            last_name: "Stone".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            company: None,
            source: None,
            notes: None,
        };

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
        assert!(errors.field_errors().contains_key("email"));
        assert!(!errors.field_errors().contains_key("last_name"));
    }

    #[test]
    fn test_payload_serializes_without_absent_optionals() {
        let payload = LeadPayload {
            first_name: "Ann".to_string(),
            last_name: "Field".to_string(),
            email: "ann@example.com".to_string(),
            phone: None,
            company: None,
            source: Some("referral".to_string()),
            notes: None,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["firstName"], "Ann");
        assert_eq!(json["source"], "referral");
        assert!(json.get("phone").is_none());
        assert!(json.get("notes").is_none());
    }
}
