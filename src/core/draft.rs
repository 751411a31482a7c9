//! Day-plan form state for the create flow.
//!
//! Every edit consumes the current [`ItineraryDraft`] and returns the next one,
//! so the controller always holds exactly one owned draft value. The draft keeps
//! two invariants: there is at least one day, and `days[i].day_number == i + 1`.

use crate::core::selectors::resolve_nights;
use crate::domain::catalog::{Catalog, CatalogEntry, ReferenceCatalogs};
use crate::domain::model::{CreateDayRequest, CreateItineraryRequest};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_file_extension, validate_non_empty_string};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_NIGHTS: &str = "3";
pub const DEFAULT_REGIONS: &str = "Phuket";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDraft {
    pub day_number: u32,
    pub accommodation_id: Option<String>,
    pub activity_ids: Vec<String>,
    pub transfer_ids: Vec<String>,
}

impl DayDraft {
    fn empty(day_number: u32) -> Self {
        Self {
            day_number,
            accommodation_id: None,
            activity_ids: Vec::new(),
            transfer_ids: Vec::new(),
        }
    }
}

/// Scalar per-day fields that `set_day_field` can replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayField {
    AccommodationId(Option<String>),
}

/// Remove `item` when present, otherwise append it.
pub fn toggle_membership<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|existing| *existing == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
}

fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DraftFile")]
pub struct ItineraryDraft {
    name: String,
    description: String,
    num_nights: String,
    regions: String,
    days: Vec<DayDraft>,
}

impl Default for ItineraryDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl ItineraryDraft {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            num_nights: DEFAULT_NIGHTS.to_string(),
            regions: DEFAULT_REGIONS.to_string(),
            days: vec![DayDraft::empty(1)],
        }
    }

    /// 從 .toml 或 .json 草稿檔載入，載入後會重新編號並去除重複 id
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let display = path.as_ref().to_string_lossy().into_owned();
        let extension = validate_file_extension("draft", &display, &["toml", "json"])?;
        let content = std::fs::read_to_string(&path)?;

        if extension == "json" {
            Ok(serde_json::from_str(&content)?)
        } else {
            toml::from_str(&content)
                .map_err(|e| PlannerError::validation("draft", format!("TOML parsing error: {}", e)))
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn num_nights(&self) -> &str {
        &self.num_nights
    }

    pub fn regions(&self) -> &str {
        &self.regions
    }

    pub fn days(&self) -> &[DayDraft] {
        &self.days
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_num_nights(mut self, token: impl Into<String>) -> Self {
        self.num_nights = token.into();
        self
    }

    pub fn with_regions(mut self, token: impl Into<String>) -> Self {
        self.regions = token.into();
        self
    }

    pub fn add_day(mut self) -> Self {
        let day_number = self.days.len() as u32 + 1;
        self.days.push(DayDraft::empty(day_number));
        self
    }

    /// No-op while only one day is left. An index past the end removes nothing.
    pub fn remove_day(mut self, index: usize) -> Self {
        if self.days.len() <= 1 {
            return self;
        }
        if index < self.days.len() {
            self.days.remove(index);
        }
        self.renumber();
        self
    }

    /// # Panics
    ///
    /// Panics if `index` is not a valid day position.
    pub fn set_day_field(mut self, index: usize, field: DayField) -> Self {
        let day = self.day_mut(index);
        match field {
            DayField::AccommodationId(value) => day.accommodation_id = value,
        }
        self
    }

    /// # Panics
    ///
    /// Panics if `index` is not a valid day position.
    pub fn toggle_activity(mut self, index: usize, activity_id: impl Into<String>) -> Self {
        toggle_membership(&mut self.day_mut(index).activity_ids, activity_id.into());
        self
    }

    /// # Panics
    ///
    /// Panics if `index` is not a valid day position.
    pub fn toggle_transfer(mut self, index: usize, transfer_id: impl Into<String>) -> Self {
        toggle_membership(&mut self.day_mut(index).transfer_ids, transfer_id.into());
        self
    }

    fn day_mut(&mut self, index: usize) -> &mut DayDraft {
        let len = self.days.len();
        assert!(
            index < len,
            "day index {} out of range for draft with {} days",
            index,
            len
        );
        &mut self.days[index]
    }

    fn renumber(&mut self) {
        for (i, day) in self.days.iter_mut().enumerate() {
            day.day_number = i as u32 + 1;
        }
    }

    /// Build the payload for `POST /itineraries/`.
    pub fn to_create_request(&self) -> Result<CreateItineraryRequest> {
        validate_non_empty_string("name", &self.name)?;
        let num_nights = resolve_nights(&self.num_nights)?;
        validate_non_empty_string("regions", &self.regions)?;

        let days = self
            .days
            .iter()
            .map(|day| -> Result<CreateDayRequest> {
                let accommodation_id = match day.accommodation_id.as_deref() {
                    Some(raw) if !raw.trim().is_empty() => {
                        Some(parse_id("accommodation_id", day.day_number, raw)?)
                    }
                    _ => None,
                };
                Ok(CreateDayRequest {
                    day_number: day.day_number,
                    accommodation_id,
                    activity_ids: parse_ids("activity_ids", day.day_number, &day.activity_ids)?,
                    transfer_ids: parse_ids("transfer_ids", day.day_number, &day.transfer_ids)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CreateItineraryRequest {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            num_nights,
            regions: self.regions.trim().to_string(),
            days,
        })
    }

    /// Every selected id must exist in the matching catalog.
    pub fn check_references(&self, catalogs: &ReferenceCatalogs) -> Result<()> {
        for day in &self.days {
            if let Some(id) = day.accommodation_id.as_deref() {
                if !id.trim().is_empty() {
                    ensure_known(catalogs.accommodations.as_ref(), "accommodation_id", day, id)?;
                }
            }
            for id in &day.activity_ids {
                ensure_known(catalogs.activities.as_ref(), "activity_ids", day, id)?;
            }
            for id in &day.transfer_ids {
                ensure_known(catalogs.transfers.as_ref(), "transfer_ids", day, id)?;
            }
        }
        Ok(())
    }
}

fn ensure_known<T: CatalogEntry>(
    catalog: &dyn Catalog<T>,
    field: &str,
    day: &DayDraft,
    id: &str,
) -> Result<()> {
    if catalog.get_by_id(id).is_none() {
        return Err(PlannerError::validation(
            format!("days[{}].{}", day.day_number, field),
            format!("Day {}: unknown id '{}'", day.day_number, id),
        ));
    }
    Ok(())
}

fn parse_id(field: &str, day_number: u32, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| {
            PlannerError::validation(
                format!("days[{}].{}", day_number, field),
                format!("Day {}: '{}' is not a valid id", day_number, raw),
            )
        })
}

fn parse_ids(field: &str, day_number: u32, raw: &[String]) -> Result<Vec<i64>> {
    raw.iter()
        .map(|id| parse_id(field, day_number, id))
        .collect()
}

/// On-disk shape of a draft. Missing fields fall back to the form defaults.
#[derive(Debug, Deserialize)]
struct DraftFile {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_nights")]
    num_nights: String,
    #[serde(default = "default_regions")]
    regions: String,
    #[serde(default)]
    days: Vec<DayFile>,
}

#[derive(Debug, Deserialize)]
struct DayFile {
    #[serde(default)]
    accommodation_id: Option<String>,
    #[serde(default)]
    activity_ids: Vec<String>,
    #[serde(default)]
    transfer_ids: Vec<String>,
}

fn default_nights() -> String {
    DEFAULT_NIGHTS.to_string()
}

fn default_regions() -> String {
    DEFAULT_REGIONS.to_string()
}

impl From<DraftFile> for ItineraryDraft {
    // 檔案中的 day_number 一律忽略，依位置重新編號
    fn from(file: DraftFile) -> Self {
        let mut days: Vec<DayDraft> = file
            .days
            .into_iter()
            .map(|day| DayDraft {
                day_number: 0,
                accommodation_id: day.accommodation_id.filter(|id| !id.trim().is_empty()),
                activity_ids: dedup_in_order(day.activity_ids),
                transfer_ids: dedup_in_order(day.transfer_ids),
            })
            .collect();
        if days.is_empty() {
            days.push(DayDraft::empty(1));
        }

        let mut draft = Self {
            name: file.name,
            description: file.description,
            num_nights: file.num_nights,
            regions: file.regions,
            days,
        };
        draft.renumber();
        draft
    }
}
