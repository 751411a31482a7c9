use crate::domain::model::{
    CreateItineraryRequest, Itinerary, ItineraryPage, ListParams, RecommendRequest,
    Recommendations,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn itinerary_api_url(&self) -> &str;
    fn recommend_api_url(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
    fn page_size(&self) -> usize;
    fn featured_limit(&self) -> usize;
}

#[async_trait]
pub trait ItineraryService: Send + Sync {
    async fn create(&self, request: &CreateItineraryRequest) -> Result<Itinerary>;
    async fn get(&self, id: i64) -> Result<Option<Itinerary>>;
    async fn list(&self, params: &ListParams) -> Result<ItineraryPage>;
}

#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn recommend(&self, request: &RecommendRequest) -> Result<Recommendations>;
}
