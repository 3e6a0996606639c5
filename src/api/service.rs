//! Lookup logic behind the HTTP handlers
//!
//! All operations are pure reads over an entry table that never changes
//! after construction, so the service is shared between requests without
//! locking.

use serde::Serialize;
use std::collections::BTreeMap;

use super::error::ApiError;
use super::request::{ContainerCheckRequest, CountryDataRequest};
use crate::entries::{find_entry, search_entries, ENTRIES};
use crate::models::{ContainerType, Entry};

// ============================================================================
// Data Structures
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SameCountryResult {
    pub same_country: bool,
    pub entry1_country: String,
    pub entry2_country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerCheckResult {
    pub valid: bool,
    pub message: String,
    pub totals: BTreeMap<ContainerType, u64>,
    pub has_containers: bool,
}

/// Result of a `/country-data` request, one variant per operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CountryDataOutcome<'a> {
    Entry(&'a Entry),
    Matches(Vec<&'a Entry>),
    SameCountry(SameCountryResult),
}

// ============================================================================
// Service
// ============================================================================

#[derive(Debug, Clone)]
pub struct CountryDataService {
    entries: Vec<Entry>,
}

impl Default for CountryDataService {
    fn default() -> Self {
        Self::new(ENTRIES.clone())
    }
}

impl CountryDataService {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Dispatch a decoded request to its operation
    pub fn execute(&self, request: &CountryDataRequest) -> Result<CountryDataOutcome<'_>, ApiError> {
        match request {
            CountryDataRequest::GetEntry { entry_id } => {
                self.get_entry(entry_id).map(CountryDataOutcome::Entry)
            }
            CountryDataRequest::Search { search_query } => {
                self.search(search_query).map(CountryDataOutcome::Matches)
            }
            CountryDataRequest::SameCountry { entry1_id, entry2_id } => self
                .same_country(entry1_id, entry2_id)
                .map(CountryDataOutcome::SameCountry),
        }
    }

    pub fn get_entry(&self, entry_id: &str) -> Result<&Entry, ApiError> {
        if entry_id.is_empty() {
            return Err(ApiError::MissingField("entry_id is required for get_entry operation"));
        }

        tracing::info!(entry_id, "Looking for entry");
        let entry = find_entry(&self.entries, entry_id);
        tracing::info!(found = ?entry, "Lookup finished");

        entry.ok_or(ApiError::NotFound("Entry not found"))
    }

    /// Empty result sets are a success.
    pub fn search(&self, search_query: &str) -> Result<Vec<&Entry>, ApiError> {
        if search_query.is_empty() {
            return Err(ApiError::MissingField("search_query is required for search operation"));
        }

        let matches = search_entries(&self.entries, search_query);
        tracing::info!(search_query, matches = matches.len(), "Search finished");
        Ok(matches)
    }

    /// Country names are compared exactly, case included.
    pub fn same_country(&self, entry1_id: &str, entry2_id: &str) -> Result<SameCountryResult, ApiError> {
        if entry1_id.is_empty() || entry2_id.is_empty() {
            return Err(ApiError::MissingField(
                "Both entry1_id and entry2_id are required for same_country operation",
            ));
        }

        let entry1 = find_entry(&self.entries, entry1_id);
        let entry2 = find_entry(&self.entries, entry2_id);
        tracing::info!(?entry1, ?entry2, "Resolved entries for country comparison");

        match (entry1, entry2) {
            (Some(a), Some(b)) => Ok(SameCountryResult {
                same_country: a.country == b.country,
                entry1_country: a.country.clone(),
                entry2_country: b.country.clone(),
            }),
            _ => Err(ApiError::NotFound("One or both entries not found")),
        }
    }

    /// Validate a container configuration and total it per type.
    ///
    /// Every known type appears in the totals. A type listed more than once
    /// keeps its last count.
    pub fn check_containers(&self, request: &ContainerCheckRequest) -> Result<ContainerCheckResult, ApiError> {
        let has_containers = request.containers.iter().any(|c| c.count > 0);
        if !has_containers {
            return Err(ApiError::BadRequest(
                "At least one container type must have a count greater than 0",
            ));
        }

        let mut totals: BTreeMap<ContainerType, u64> =
            ContainerType::ALL.iter().map(|t| (*t, 0)).collect();
        for container in &request.containers {
            totals.insert(container.container_type, container.count);
        }
        tracing::info!(?totals, "Container configuration accepted");

        Ok(ContainerCheckResult {
            valid: true,
            message: "Container configuration is valid".to_string(),
            totals,
            has_containers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContainerCount;

    fn service() -> CountryDataService {
        CountryDataService::default()
    }

    #[test]
    fn test_get_entry_returns_requested_id() {
        let svc = service();
        for entry in svc.entries() {
            assert_eq!(svc.get_entry(&entry.id).unwrap().id, entry.id);
        }
    }

    #[test]
    fn test_get_entry_errors() {
        let svc = service();
        assert!(matches!(svc.get_entry(""), Err(ApiError::MissingField(_))));
        assert!(matches!(svc.get_entry("XX-XXX"), Err(ApiError::NotFound("Entry not found"))));
    }

    #[test]
    fn test_search() {
        let svc = service();
        let hits = svc.search("paris").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "FR-PAR");

        assert!(svc.search("Narnia").unwrap().is_empty());
        assert!(matches!(svc.search(""), Err(ApiError::MissingField(_))));
    }

    #[test]
    fn test_same_country() {
        let svc = service();

        let r = svc.same_country("US-NYC", "US-LAX").unwrap();
        assert!(r.same_country);
        assert_eq!(r.entry1_country, "USA");

        let r = svc.same_country("US-NYC", "GB-LON").unwrap();
        assert!(!r.same_country);
        assert_eq!(r.entry2_country, "UK");

        assert!(svc.same_country("DE-HAM", "DE-HRB").unwrap().same_country);
    }

    #[test]
    fn test_same_country_is_case_sensitive() {
        let svc = CountryDataService::new(vec![
            Entry::new("A-1", "Alpha", "Freedonia"),
            Entry::new("B-2", "Beta", "freedonia"),
        ]);
        assert!(!svc.same_country("A-1", "B-2").unwrap().same_country);
    }

    #[test]
    fn test_same_country_errors() {
        let svc = service();
        assert!(matches!(svc.same_country("", "US-LAX"), Err(ApiError::MissingField(_))));
        assert!(matches!(svc.same_country("US-NYC", ""), Err(ApiError::MissingField(_))));
        assert!(matches!(svc.same_country("US-NYC", "XX-XXX"), Err(ApiError::NotFound(_))));
        assert!(matches!(svc.same_country("XX-XXX", "US-NYC"), Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_execute_dispatches() {
        let svc = service();
        let outcome = svc
            .execute(&CountryDataRequest::GetEntry { entry_id: "GB-LON".into() })
            .unwrap();
        assert!(matches!(outcome, CountryDataOutcome::Entry(e) if e.name == "London"));

        let outcome = svc
            .execute(&CountryDataRequest::Search { search_query: "germany".into() })
            .unwrap();
        assert!(matches!(outcome, CountryDataOutcome::Matches(ref m) if m.len() == 2));
    }

    #[test]
    fn test_check_containers() {
        let svc = service();
        let request = ContainerCheckRequest {
            containers: vec![
                ContainerCount { container_type: ContainerType::HH42, count: 1 },
                ContainerCount { container_type: ContainerType::HH42, count: 3 },
            ],
        };
        let result = svc.check_containers(&request).unwrap();
        assert!(result.valid);
        assert_eq!(result.totals[&ContainerType::HH42], 3);
        assert_eq!(result.totals[&ContainerType::HH24], 0);
        assert_eq!(result.totals[&ContainerType::HH12], 0);
    }

    #[test]
    fn test_check_containers_requires_nonzero() {
        let svc = service();
        let request = ContainerCheckRequest {
            containers: vec![ContainerCount { container_type: ContainerType::HH12, count: 0 }],
        };
        assert!(matches!(svc.check_containers(&request), Err(ApiError::BadRequest(_))));
        let empty = ContainerCheckRequest { containers: vec![] };
        assert!(matches!(svc.check_containers(&empty), Err(ApiError::BadRequest(_))));
    }
}
