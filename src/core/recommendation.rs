use crate::core::draft::toggle_membership;
use crate::core::selectors::{region_filter, resolve_nights};
use crate::domain::model::RecommendRequest;
use crate::utils::error::{PlannerError, Result};
use std::fmt;
use std::str::FromStr;

pub const BUDGET_MIN: u32 = 300;
pub const BUDGET_MAX: u32 = 2000;
pub const BUDGET_STEP: u32 = 50;
pub const DEFAULT_BUDGET: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Beach,
    Adventure,
    Luxury,
    Cultural,
    Nightlife,
    Family,
}

impl Preference {
    pub const ALL: [Preference; 6] = [
        Preference::Beach,
        Preference::Adventure,
        Preference::Luxury,
        Preference::Cultural,
        Preference::Nightlife,
        Preference::Family,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::Beach => "beach",
            Preference::Adventure => "adventure",
            Preference::Luxury => "luxury",
            Preference::Cultural => "cultural",
            Preference::Nightlife => "nightlife",
            Preference::Family => "family",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preference {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        Preference::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                PlannerError::validation("preferences", format!("Unknown preference '{}'", s))
            })
    }
}

/// State of the "Your Travel Preferences" form.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationForm {
    num_nights: String,
    regions: String,
    budget: u32,
    preferences: Vec<Preference>,
}

impl Default for RecommendationForm {
    fn default() -> Self {
        Self {
            num_nights: "4".to_string(),
            regions: String::new(),
            budget: DEFAULT_BUDGET,
            preferences: Vec::new(),
        }
    }
}

impl RecommendationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub fn preferences(&self) -> &[Preference] {
        &self.preferences
    }

    pub fn with_num_nights(mut self, token: impl Into<String>) -> Self {
        self.num_nights = token.into();
        self
    }

    pub fn with_regions(mut self, token: impl Into<String>) -> Self {
        self.regions = token.into();
        self
    }

    /// Clamp to the slider range and snap to the nearest step.
    pub fn with_budget(mut self, budget: u32) -> Self {
        let clamped = budget.clamp(BUDGET_MIN, BUDGET_MAX);
        let offset = clamped - BUDGET_MIN;
        let snapped = BUDGET_MIN + (offset + BUDGET_STEP / 2) / BUDGET_STEP * BUDGET_STEP;
        self.budget = snapped.min(BUDGET_MAX);
        self
    }

    pub fn toggle_preference(mut self, preference: Preference) -> Self {
        toggle_membership(&mut self.preferences, preference);
        self
    }

    pub fn to_request(&self) -> Result<RecommendRequest> {
        let num_nights = resolve_nights(&self.num_nights)?;
        let preferences = (!self.preferences.is_empty()).then(|| {
            self.preferences
                .iter()
                .map(|p| p.as_str().to_string())
                .collect()
        });

        Ok(RecommendRequest {
            num_nights,
            regions: region_filter(&self.regions),
            budget: f64::from(self.budget),
            preferences,
        })
    }
}
