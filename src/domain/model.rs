use serde::{Deserialize, Serialize};

/// Payload of `POST /itineraries/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItineraryRequest {
    pub name: String,
    pub description: String,
    pub num_nights: u32,
    pub regions: String,
    pub days: Vec<CreateDayRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDayRequest {
    pub day_number: u32,
    // 沒有住宿時要送出 null，不可省略欄位
    pub accommodation_id: Option<i64>,
    pub activity_ids: Vec<i64>,
    pub transfer_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAccommodation {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayActivity {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub location: Option<Location>,
    #[serde(default)]
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTransfer {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    pub from_location: Option<Location>,
    pub to_location: Option<Location>,
    #[serde(default)]
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day_number: u32,
    pub accommodation: Option<DayAccommodation>,
    #[serde(default)]
    pub activities: Vec<DayActivity>,
    #[serde(default)]
    pub transfers: Vec<DayTransfer>,
}

/// A persisted itinerary as returned by the itinerary service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub num_nights: u32,
    #[serde(default)]
    pub regions: String,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub is_recommended: bool,
    #[serde(default)]
    pub days: Vec<ItineraryDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryEnvelope {
    pub itinerary: Option<Itinerary>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItineraryPage {
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
    #[serde(default)]
    pub total: usize,
}

/// Query parameters of `GET /itineraries`; `None` filters are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
    pub num_nights: Option<u32>,
    pub regions: Option<String>,
}

impl ListParams {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(skip) = self.skip {
            query.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(nights) = self.num_nights {
            query.push(("num_nights", nights.to_string()));
        }
        if let Some(regions) = &self.regions {
            query.push(("regions", regions.clone()));
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub num_nights: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<String>,
    pub budget: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
    #[serde(default)]
    pub message: String,
}

/// Error body returned by both services on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceErrorBody {
    pub detail: Option<serde_json::Value>,
}

impl ServiceErrorBody {
    /// FastAPI 驗證錯誤的 detail 可能是陣列，非字串時以 JSON 文字呈現
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::String(_) | serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
