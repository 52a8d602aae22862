//! Unit tests for leader extraction

use super::*;
use crate::espn::types::LeadersDocument;
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn offline_client() -> EspnClient {
    // Never contacted in tests that short-circuit before resolution.
    EspnClient::with_base_url("http://127.0.0.1:9").unwrap()
}

fn categories_from(value: serde_json::Value) -> Vec<Category> {
    serde_json::from_value::<LeadersDocument>(value)
        .unwrap()
        .categories
}

async fn mock_entities(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/athletes/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "displayName": "J. Doe",
            "shortName": "J.Doe"
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/teams/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "9",
            "displayName": "Seahawks",
            "abbreviation": "SEA"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_extract_leader_end_to_end() {
    let mock_server = MockServer::start().await;
    mock_entities(&mock_server).await;

    let categories = categories_from(json!({
        "categories": [{
            "name": "totalTackles",
            "displayName": "Total Tackles",
            "leaders": [{
                "value": 12.0,
                "displayValue": "12",
                "athlete": {"$ref": format!("{}/athletes/1", mock_server.uri())},
                "team": {"$ref": format!("{}/teams/9", mock_server.uri())}
            }]
        }]
    }));

    let client = EspnClient::with_base_url(mock_server.uri()).unwrap();
    let leader = extract_leader(&client, &categories, StatType::TotalTackles)
        .await
        .unwrap()
        .expect("leader should be extracted");

    assert_eq!(leader.stat_display_name, "Total Tackles");
    assert_eq!(leader.value.as_f64(), Some(12.0));
    assert_eq!(leader.display_value, "12");
    assert_eq!(leader.athlete.id, "1");
    assert_eq!(leader.athlete.display_name, "J. Doe");
    assert_eq!(leader.team.abbreviation, "SEA");
}

#[tokio::test]
async fn test_missing_category_returns_none() {
    let categories = categories_from(json!({
        "categories": [{"name": "passingYards", "displayName": "Passing Yards", "leaders": []}]
    }));

    let result = extract_leader(&offline_client(), &categories, StatType::Sacks)
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_empty_leaders_list_returns_none() {
    let categories = categories_from(json!({
        "categories": [{"name": "sacks", "displayName": "Sacks", "leaders": []}]
    }));

    let result = extract_leader(&offline_client(), &categories, StatType::Sacks)
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_first_matching_category_wins() {
    let mock_server = MockServer::start().await;
    mock_entities(&mock_server).await;

    // Duplicate category names: the first one in source order is used.
    let categories = categories_from(json!({
        "categories": [
            {
                "name": "sacks",
                "displayName": "Sacks",
                "leaders": [{
                    "value": 9.5,
                    "displayValue": "9.5",
                    "athlete": {"$ref": format!("{}/athletes/1", mock_server.uri())},
                    "team": {"$ref": format!("{}/teams/9", mock_server.uri())}
                }]
            },
            {
                "name": "sacks",
                "displayName": "Sacks (duplicate)",
                "leaders": []
            }
        ]
    }));

    let client = EspnClient::with_base_url(mock_server.uri()).unwrap();
    let leader = extract_leader(&client, &categories, StatType::Sacks)
        .await
        .unwrap()
        .expect("leader should be extracted");

    assert_eq!(leader.stat_display_name, "Sacks");
    assert_eq!(leader.value.to_string(), "9.5");
}

#[tokio::test]
async fn test_missing_athlete_ref_is_extraction_error() {
    let categories = categories_from(json!({
        "categories": [{
            "name": "sacks",
            "displayName": "Sacks",
            "leaders": [{"value": 3, "displayValue": "3"}]
        }]
    }));

    let result = extract_leader(&offline_client(), &categories, StatType::Sacks).await;
    match result {
        Err(LeadersError::Extraction { stat, .. }) => assert_eq!(stat, "sacks"),
        other => panic!("expected Extraction error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_failed_resolution_fails_extraction() {
    let mock_server = MockServer::start().await;

    // Athlete resolves, team does not: no partial record may be produced.
    Mock::given(method("GET"))
        .and(path("/athletes/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "displayName": "J. Doe",
            "shortName": "J.Doe"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/teams/9"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let categories = categories_from(json!({
        "categories": [{
            "name": "totalTackles",
            "displayName": "Total Tackles",
            "leaders": [{
                "value": 12,
                "displayValue": "12",
                "athlete": {"$ref": format!("{}/athletes/1", mock_server.uri())},
                "team": {"$ref": format!("{}/teams/9", mock_server.uri())}
            }]
        }]
    }));

    let client = EspnClient::with_base_url(mock_server.uri()).unwrap();
    let result = extract_leader(&client, &categories, StatType::TotalTackles).await;

    assert!(matches!(result, Err(LeadersError::Resolution { .. })));
}
