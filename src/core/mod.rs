pub mod create_flow;
pub mod draft;
pub mod listing;
pub mod recommendation;
pub mod selectors;
pub mod summary;

pub use crate::domain::model::{CreateItineraryRequest, Itinerary};
pub use crate::domain::ports::{ConfigProvider, ItineraryService, RecommendationService};
pub use crate::utils::error::Result;
