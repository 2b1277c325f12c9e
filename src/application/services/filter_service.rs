//! Lead filtering.
//!
//! A pure, order-preserving view over the full lead set. Filtering happens
//! client-side on every criteria change, so this code runs often and must
//! never touch the network or mutate its input.

use crate::domain::entities::Lead;
use crate::utils::text;

/// One filter dimension: either unrestricted or pinned to a single value.
///
/// Replaces the wire-level sentinel string `"all"` with an explicit tagged
/// option so "no restriction" cannot be confused with a real value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Any,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl Selection<String> {
    /// Maps the sentinel `"all"` (any case) to [`Selection::Any`]; every
    /// other value, valid or not, is taken literally. A token outside the
    /// known enumerations simply matches no lead.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("all") {
            Self::Any
        } else {
            Self::Only(raw.to_string())
        }
    }
}

/// Client-local filter state for the dashboard.
///
/// The default value is the identity criteria: empty search, no source or
/// status restriction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Matched case-insensitively as a substring of first name, last name,
    /// email and company. Empty imposes no constraint.
    pub search: String,
    /// Exact match against the lead's canonical source token.
    pub source: Selection<String>,
    /// Case-insensitive match against the lead's status.
    pub status: Selection<String>,
}

impl FilterCriteria {
    /// Returns true when the lead satisfies every active predicate.
    pub fn matches(&self, lead: &Lead) -> bool {
        if !self.search.is_empty() {
            let fields = [
                lead.first_name.as_str(),
                lead.last_name.as_str(),
                lead.email.as_str(),
                lead.company.as_deref().unwrap_or(""),
            ];
            if !fields.iter().any(|f| text::contains_ci(f, &self.search)) {
                return false;
            }
        }

        if let Selection::Only(source) = &self.source {
            if lead.source.as_deref().unwrap_or("") != source {
                return false;
            }
        }

        if let Selection::Only(status) = &self.status {
            if !text::eq_ci(lead.status.as_deref().unwrap_or(""), status) {
                return false;
            }
        }

        true
    }
}

/// Filters leads conjunctively, preserving the original relative order.
pub fn filter_leads(leads: &[Lead], criteria: &FilterCriteria) -> Vec<Lead> {
    leads
        .iter()
        .filter(|lead| criteria.matches(lead))
        .cloned()
        .collect()
}
