use crate::domain::model::{
    CreateItineraryRequest, Itinerary, ItineraryEnvelope, ItineraryPage, ListParams,
    RecommendRequest, Recommendations, ServiceErrorBody,
};
use crate::domain::ports::{ConfigProvider, ItineraryService, RecommendationService};
use crate::utils::error::{PlannerError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

fn build_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(PlannerError::NetworkError)
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

/// Read the body and decode it, or turn a non-2xx response into `ServiceError`.
async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    tracing::debug!("Response status: {}, body: {} bytes", status, body.len());

    if !status.is_success() {
        // 服務回傳的 detail 優先，否則使用預設訊息
        let message = serde_json::from_str::<ServiceErrorBody>(&body)
            .ok()
            .and_then(|err| err.message())
            .unwrap_or_else(|| fallback.to_string());
        return Err(PlannerError::ServiceError {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// Client for the itinerary persistence service.
#[derive(Debug, Clone)]
pub struct ItineraryClient {
    client: Client,
    base_url: String,
}

impl ItineraryClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url: base_url.into(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.itinerary_api_url(), config.request_timeout_secs())
    }
}

#[async_trait]
impl ItineraryService for ItineraryClient {
    async fn create(&self, request: &CreateItineraryRequest) -> Result<Itinerary> {
        let url = endpoint(&self.base_url, "itineraries/");
        tracing::debug!("Making API request to: POST {}", url);

        let response = self.client.post(&url).json(request).send().await?;
        let envelope: ItineraryEnvelope =
            read_json(response, "Failed to create itinerary").await?;

        envelope.itinerary.ok_or_else(|| PlannerError::ServiceError {
            status: StatusCode::OK.as_u16(),
            message: "Service did not return the created itinerary".to_string(),
        })
    }

    async fn get(&self, id: i64) -> Result<Option<Itinerary>> {
        let url = endpoint(&self.base_url, &format!("itineraries/{}", id));
        tracing::debug!("Making API request to: GET {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("Itinerary {} not found", id);
            return Ok(None);
        }

        let envelope: ItineraryEnvelope = read_json(response, "Failed to fetch itinerary").await?;
        Ok(envelope.itinerary)
    }

    async fn list(&self, params: &ListParams) -> Result<ItineraryPage> {
        let url = endpoint(&self.base_url, "itineraries");
        let query = params.to_query();
        tracing::debug!("Making API request to: GET {} {:?}", url, query);

        let response = self.client.get(&url).query(&query).send().await?;
        read_json(response, "Failed to fetch itineraries").await
    }
}

/// Client for the recommendation service.
#[derive(Debug, Clone)]
pub struct RecommendClient {
    client: Client,
    base_url: String,
}

impl RecommendClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url: base_url.into(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.recommend_api_url(), config.request_timeout_secs())
    }
}

#[async_trait]
impl RecommendationService for RecommendClient {
    async fn recommend(&self, request: &RecommendRequest) -> Result<Recommendations> {
        let url = endpoint(&self.base_url, "recommend/");
        tracing::debug!("Making API request to: POST {}", url);

        let response = self.client.post(&url).json(request).send().await?;
        read_json(response, "Failed to get recommendations").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        assert_eq!(
            endpoint("http://localhost:8000/", "itineraries/"),
            "http://localhost:8000/itineraries/"
        );
        assert_eq!(
            endpoint("http://localhost:8000/api", "itineraries/3"),
            "http://localhost:8000/api/itineraries/3"
        );
    }

    #[tokio::test]
    async fn test_get_not_found_is_none() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/itineraries/99");
            then.status(404)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"detail": "Not Found"}));
        });

        let client = ItineraryClient::new(server.base_url(), 5).unwrap();
        let result = client.get(99).await.unwrap();

        api_mock.assert();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_null_itinerary_is_none() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/itineraries/5");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"itinerary": null}));
        });

        let client = ItineraryClient::new(server.base_url(), 5).unwrap();
        assert!(client.get(5).await.unwrap().is_none());
        api_mock.assert();
    }

    #[tokio::test]
    async fn test_error_without_detail_uses_fallback() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/itineraries");
            then.status(500).body("Internal Server Error");
        });

        let client = ItineraryClient::new(server.base_url(), 5).unwrap();
        let err = client.list(&ListParams::default()).await.unwrap_err();

        api_mock.assert();
        match err {
            PlannerError::ServiceError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Failed to fetch itineraries");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_is_network_error() {
        // 保留的埠號，不會有服務在聽
        let client = ItineraryClient::new("http://127.0.0.1:9", 2).unwrap();
        let err = client.get(1).await.unwrap_err();
        assert!(matches!(err, PlannerError::NetworkError(_)));
    }
}
