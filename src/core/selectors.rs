use crate::utils::error::{PlannerError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Night tokens offered by the create form, as submitted by the select box.
pub const CREATE_NIGHT_OPTIONS: &[&str] = &["2 nights", "3 nights", "4", "5", "7", "8"];

/// Night tokens offered by the list filter and the recommendation form.
pub const FILTER_NIGHT_OPTIONS: &[&str] = &["2", "3", "4", "5", "7", "8"];

pub const REGION_OPTIONS: &[&str] = &[
    "Phuket",
    "Krabi",
    "Phi Phi",
    "Phuket, Krabi",
    "Phuket, Krabi, Phi Phi",
];

/// Filter value meaning "no region filter".
pub const ALL_REGIONS: &str = "all";

fn nights_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^\s*(\d+)\s*(?:nights?)?\s*$").expect("night token pattern is valid")
    })
}

/// 將 "2 nights" 或 "4" 這類選項轉成夜數，0 與其他格式一律拒絕
pub fn resolve_nights(token: &str) -> Result<u32> {
    let invalid = || {
        PlannerError::validation(
            "num_nights",
            format!("'{}' is not a valid number of nights", token.trim()),
        )
    };

    if token.trim().is_empty() {
        return Err(PlannerError::validation(
            "num_nights",
            "Number of nights is required",
        ));
    }

    let caps = nights_pattern().captures(token).ok_or_else(invalid)?;
    let nights: u32 = caps[1].parse().map_err(|_| invalid())?;
    if nights == 0 {
        return Err(invalid());
    }
    Ok(nights)
}

/// Region filter value to send, `None` when the filter is unset or `all`.
pub fn region_filter(token: &str) -> Option<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_REGIONS) {
        None
    } else {
        Some(trimmed.to_string())
    }
}
