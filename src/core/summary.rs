use crate::core::draft::ItineraryDraft;
use crate::domain::catalog::{Catalog, CatalogEntry, ReferenceCatalogs};
use crate::domain::model::{Itinerary, ItineraryDay, Location};

/// `125` -> `2h 5m`
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

fn format_location(location: Option<&Location>) -> String {
    match location {
        Some(loc) if !loc.region.is_empty() => format!("{}, {}", loc.name, loc.region),
        Some(loc) => loc.name.clone(),
        None => "-".to_string(),
    }
}

pub fn card_line(itinerary: &Itinerary) -> String {
    let marker = if itinerary.is_recommended { " ★" } else { "" };
    format!(
        "#{} {}{} | {} | {} nights | ${:.2}",
        itinerary.id,
        itinerary.name,
        marker,
        itinerary.regions,
        itinerary.num_nights,
        itinerary.total_price
    )
}

pub fn day_lines(day: &ItineraryDay) -> Vec<String> {
    let mut lines = vec![format!("Day {}", day.day_number)];

    if let Some(acc) = &day.accommodation {
        lines.push(format!(
            "  Stay: {} ({})",
            acc.name,
            format_location(acc.location.as_ref())
        ));
    }
    for activity in &day.activities {
        lines.push(format!(
            "  Activity: {} @ {} [{}]",
            activity.name,
            activity
                .location
                .as_ref()
                .map(|l| l.name.as_str())
                .unwrap_or("-"),
            format_duration(activity.duration_minutes)
        ));
    }
    for transfer in &day.transfers {
        let from = transfer.from_location.as_ref().map(|l| l.name.as_str()).unwrap_or("-");
        let to = transfer.to_location.as_ref().map(|l| l.name.as_str()).unwrap_or("-");
        lines.push(format!(
            "  {} Transfer: {} to {} [{}]",
            transfer.kind,
            from,
            to,
            format_duration(transfer.duration_minutes)
        ));
    }
    lines
}

pub fn detail_lines(itinerary: &Itinerary) -> Vec<String> {
    let mut lines = vec![card_line(itinerary)];
    if !itinerary.description.is_empty() {
        lines.push(itinerary.description.clone());
    }
    for day in &itinerary.days {
        lines.extend(day_lines(day));
    }
    lines
}

/// Draft preview with catalog names; unknown ids are shown raw.
pub fn draft_lines(draft: &ItineraryDraft, catalogs: &ReferenceCatalogs) -> Vec<String> {
    let mut lines = vec![format!(
        "{} | {} | {}",
        draft.name(),
        draft.regions(),
        draft.num_nights()
    )];

    for day in draft.days() {
        let stay = day
            .accommodation_id
            .as_deref()
            .map(|id| {
                catalogs
                    .accommodations
                    .get_by_id(id)
                    .map(|a| format!("{} ({})", a.name(), a.detail()))
                    .unwrap_or_else(|| id.to_string())
            })
            .unwrap_or_else(|| "None".to_string());
        let activities: Vec<String> = day
            .activity_ids
            .iter()
            .map(|id| {
                catalogs
                    .activities
                    .get_by_id(id)
                    .map(|a| a.name().to_string())
                    .unwrap_or_else(|| id.clone())
            })
            .collect();
        let transfers: Vec<String> = day
            .transfer_ids
            .iter()
            .map(|id| {
                catalogs
                    .transfers
                    .get_by_id(id)
                    .map(|t| format!("{} ({})", t.name(), t.detail()))
                    .unwrap_or_else(|| id.clone())
            })
            .collect();

        lines.push(format!("Day {}: stay {}", day.day_number, stay));
        if !activities.is_empty() {
            lines.push(format!("  activities: {}", activities.join(", ")));
        }
        if !transfers.is_empty() {
            lines.push(format!("  transfers: {}", transfers.join(", ")));
        }
    }
    lines
}
