use httpmock::prelude::*;
use itinerary_planner::core::listing::ListQuery;
use itinerary_planner::core::recommendation::{Preference, RecommendationForm};
use itinerary_planner::core::{ItineraryService, RecommendationService};
use itinerary_planner::domain::model::ListParams;
use itinerary_planner::{
    DayField, ItineraryClient, ItineraryDraft, PlannerError, RecommendClient,
};

fn sample_itinerary(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": "Beaches and islands",
        "num_nights": 4,
        "regions": "Phuket",
        "total_price": 1299.0,
        "is_recommended": false,
        "days": []
    })
}

#[tokio::test]
async fn test_create_sends_numeric_ids_and_null_accommodation() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/itineraries/")
            .json_body(serde_json::json!({
                "name": "Phuket Adventure",
                "description": "",
                "num_nights": 4,
                "regions": "Phuket",
                "days": [
                    {"day_number": 1, "accommodation_id": null, "activity_ids": [1, 2], "transfer_ids": []},
                    {"day_number": 2, "accommodation_id": 3, "activity_ids": [], "transfer_ids": [1]}
                ]
            }));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"itinerary": sample_itinerary(11, "Phuket Adventure")}));
    });

    let request = ItineraryDraft::new()
        .with_name("Phuket Adventure")
        .with_num_nights("4")
        .toggle_activity(0, "1")
        .toggle_activity(0, "2")
        .add_day()
        .set_day_field(1, DayField::AccommodationId(Some("3".to_string())))
        .toggle_transfer(1, "1")
        .to_create_request()
        .unwrap();

    let client = ItineraryClient::new(server.base_url(), 5).unwrap();
    let itinerary = client.create(&request).await.unwrap();

    api_mock.assert();
    assert_eq!(itinerary.id, 11);
}

#[tokio::test]
async fn test_create_failure_surfaces_detail() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/itineraries/");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"detail": "Accommodation with id 9 not found"}));
    });

    let request = ItineraryDraft::new()
        .with_name("Broken")
        .to_create_request()
        .unwrap();

    let client = ItineraryClient::new(server.base_url(), 5).unwrap();
    let err = client.create(&request).await.unwrap_err();

    api_mock.assert();
    match err {
        PlannerError::ServiceError { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Accommodation with id 9 not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_list_sends_pagination_and_filters() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/itineraries")
            .query_param("skip", "9")
            .query_param("limit", "9")
            .query_param("num_nights", "2")
            .query_param("regions", "Phuket, Krabi");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "itineraries": [sample_itinerary(1, "A"), sample_itinerary(2, "B")],
                "total": 11
            }));
    });

    let query = ListQuery {
        page: Some(2),
        nights: Some("2 nights".to_string()),
        regions: Some("Phuket, Krabi".to_string()),
    };

    let client = ItineraryClient::new(server.base_url(), 5).unwrap();
    let page = client.list(&query.to_params(9)).await.unwrap();

    api_mock.assert();
    assert_eq!(page.total, 11);
    assert_eq!(page.itineraries.len(), 2);
    assert_eq!(page.itineraries[1].name, "B");
}

#[tokio::test]
async fn test_featured_listing_uses_limit_only() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/itineraries").query_param("limit", "6");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"itineraries": [], "total": 0}));
    });

    let client = ItineraryClient::new(server.base_url(), 5).unwrap();
    let params = ListParams {
        limit: Some(6),
        ..ListParams::default()
    };
    let page = client.list(&params).await.unwrap();

    api_mock.assert();
    assert!(page.itineraries.is_empty());
}

#[tokio::test]
async fn test_get_returns_detail() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/itineraries/3");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "itinerary": {
                    "id": 3,
                    "name": "Krabi Explorer",
                    "num_nights": 3,
                    "regions": "Krabi",
                    "total_price": 780.25,
                    "days": [{
                        "day_number": 1,
                        "accommodation": {"id": 4, "name": "Krabi Resort", "location": {"name": "Ao Nang", "region": "Krabi"}},
                        "activities": [],
                        "transfers": []
                    }]
                }
            }));
    });

    let client = ItineraryClient::new(server.base_url(), 5).unwrap();
    let itinerary = client.get(3).await.unwrap().unwrap();

    api_mock.assert();
    assert_eq!(itinerary.name, "Krabi Explorer");
    assert_eq!(
        itinerary.days[0].accommodation.as_ref().unwrap().name,
        "Krabi Resort"
    );
}

#[tokio::test]
async fn test_recommend_request_shape() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/recommend/").json_body(serde_json::json!({
            "num_nights": 5,
            "regions": "Krabi",
            "budget": 1500.0,
            "preferences": ["adventure", "cultural"]
        }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "itineraries": [sample_itinerary(8, "Krabi Climb")],
                "message": "Found 1 matching itinerary"
            }));
    });

    let request = RecommendationForm::new()
        .with_num_nights("5")
        .with_regions("Krabi")
        .with_budget(1500)
        .toggle_preference(Preference::Adventure)
        .toggle_preference(Preference::Cultural)
        .to_request()
        .unwrap();

    let client = RecommendClient::new(server.base_url(), 5).unwrap();
    let result = client.recommend(&request).await.unwrap();

    api_mock.assert();
    assert_eq!(result.message, "Found 1 matching itinerary");
    assert_eq!(result.itineraries[0].id, 8);
}

#[tokio::test]
async fn test_recommend_failure_uses_fallback_message() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/recommend/");
        then.status(503);
    });

    let request = RecommendationForm::new().to_request().unwrap();
    let client = RecommendClient::new(server.base_url(), 5).unwrap();
    let err = client.recommend(&request).await.unwrap_err();

    api_mock.assert();
    assert_eq!(err.user_friendly_message(), "Failed to get recommendations");
}
