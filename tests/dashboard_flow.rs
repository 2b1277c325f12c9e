//! End-to-end dashboard tests: mock lead service -> HTTP repository ->
//! dashboard service.

use std::sync::Arc;
use std::time::Duration;

use leadboard::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(server: &MockServer) -> DashboardService<ApiLeadRepository> {
    let repository =
        Arc::new(ApiLeadRepository::new(server.uri(), Duration::from_secs(5)).unwrap());
    DashboardService::new(repository)
}

async fn mount_leads(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/leads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "_id": "l1",
                    "firstName": "Ann",
                    "lastName": "Field",
                    "email": "a@x.com",
                    "source": "website",
                    "status": "New"
                },
                {
                    "_id": "l2",
                    "firstName": "Bob",
                    "lastName": "Stone",
                    "email": "b@x.com",
                    "source": "referral",
                    "status": "Qualified"
                }
            ]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_search_narrows_view_to_matching_lead() {
    let server = MockServer::start().await;
    mount_leads(&server).await;
    Mock::given(method("GET"))
        .and(path("/leads/dashboard"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let criteria = FilterCriteria {
        search: "ann".to_string(),
        ..Default::default()
    };
    let view = service(&server).load(&criteria).await;

    assert_eq!(view.leads.len(), 1);
    assert_eq!(view.leads[0].first_name, "Ann");
    assert_eq!(view.summary.total_leads, 2);
}

#[tokio::test]
async fn test_stats_endpoint_down_falls_back_to_local_derivation() {
    let server = MockServer::start().await;
    mount_leads(&server).await;
    Mock::given(method("GET"))
        .and(path("/leads/dashboard"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let view = service(&server).load(&FilterCriteria::default()).await;

    assert_eq!(view.leads.len(), 2);
    assert_eq!(view.summary.total_leads, 2);
    assert_eq!(view.summary.new_leads, 1);
    assert_eq!(view.summary.qualified_leads, 1);
    assert_eq!(view.summary.conversion_rate_percent, 50);
}

#[tokio::test]
async fn test_server_stats_drive_counters_when_available() {
    let server = MockServer::start().await;
    mount_leads(&server).await;
    Mock::given(method("GET"))
        .and(path("/leads/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "totalLeads": 120,
                "newLeads": 5,
                "qualifiedLeads": 2,
                "conversionRate": 33.6,
                "byStatus": {}
            }
        })))
        .mount(&server)
        .await;

    let view = service(&server).load(&FilterCriteria::default()).await;

    assert_eq!(view.summary.new_leads, 5);
    assert_eq!(view.summary.qualified_leads, 2);
    assert_eq!(view.summary.conversion_rate_percent, 34);
    // Total stays the count of the locally fetched, unfiltered set.
    assert_eq!(view.summary.total_leads, 2);
}

#[tokio::test]
async fn test_unreachable_service_renders_empty_dashboard() {
    let server = MockServer::start().await;
    // No mocks mounted: both endpoints return 404.

    let view = service(&server).load(&FilterCriteria::default()).await;

    assert!(view.leads.is_empty());
    assert_eq!(view.summary.total_leads, 0);
    assert_eq!(view.summary.new_leads, 0);
    assert_eq!(view.summary.conversion_rate_percent, 0);
}

#[tokio::test]
async fn test_source_and_status_restrictions_apply_together() {
    let server = MockServer::start().await;
    mount_leads(&server).await;
    Mock::given(method("GET"))
        .and(path("/leads/dashboard"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let criteria = FilterCriteria {
        search: String::new(),
        source: Selection::parse("referral"),
        status: Selection::parse("QUALIFIED"),
    };
    let view = service(&server).load(&criteria).await;

    assert_eq!(view.leads.len(), 1);
    assert_eq!(view.leads[0].id, "l2");
    assert_eq!(view.summary.qualified_leads, 1);
    assert_eq!(view.summary.new_leads, 0);
}
