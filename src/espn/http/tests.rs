//! Unit tests for the ESPN HTTP client

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn test_fetch_leaders_success() {
    let mock_server = MockServer::start().await;

    let mock_response = json!({
        "categories": [
            {
                "name": "totalTackles",
                "displayName": "Total Tackles",
                "leaders": [
                    {
                        "value": 118,
                        "displayValue": "118",
                        "athlete": {"$ref": format!("{}/athletes/1", mock_server.uri())},
                        "team": {"$ref": format!("{}/teams/9", mock_server.uri())}
                    }
                ]
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/seasons/2025/types/2/leaders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
        .mount(&mock_server)
        .await;

    let client = EspnClient::with_base_url(mock_server.uri()).unwrap();
    let document = client.fetch_leaders(Season::new(2025)).await.unwrap();

    assert_eq!(document.categories.len(), 1);
    assert_eq!(document.categories[0].name, "totalTackles");
}

#[tokio::test]
async fn test_fetch_leaders_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/seasons/2025/types/2/leaders"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = EspnClient::with_base_url(mock_server.uri()).unwrap();
    let result = client.fetch_leaders(Season::new(2025)).await;

    match result {
        Err(LeadersError::Http(_)) => (),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_athlete_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/athletes/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "displayName": "J. Doe",
            "shortName": "J.Doe"
        })))
        .mount(&mock_server)
        .await;

    let client = EspnClient::with_base_url(mock_server.uri()).unwrap();
    let reference = Reference {
        href: format!("{}/athletes/1", mock_server.uri()),
    };
    let athlete = client.resolve_athlete(&reference).await.unwrap();

    assert_eq!(athlete.id, "1");
    assert_eq!(athlete.display_name, "J. Doe");
    assert_eq!(athlete.short_name, "J.Doe");
}

#[tokio::test]
async fn test_resolve_non_2xx_is_resolution_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = EspnClient::with_base_url(mock_server.uri()).unwrap();
    let url = format!("{}/teams/9", mock_server.uri());
    let result: Result<Team> = client.resolve(&url).await;

    match result {
        Err(LeadersError::Resolution { url: failed, .. }) => assert_eq!(failed, url),
        other => panic!("expected Resolution error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_bad_body_is_resolution_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/9"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = EspnClient::with_base_url(mock_server.uri()).unwrap();
    let url = format!("{}/teams/9", mock_server.uri());
    let result: Result<Team> = client.resolve(&url).await;

    assert!(matches!(result, Err(LeadersError::Resolution { .. })));
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = EspnClient::with_base_url("http://example.test/api/").unwrap();
    assert_eq!(client.base_url(), "http://example.test/api");
}
