//! Read-only reference catalogs shown by the create form.

use serde::{Deserialize, Serialize};

pub trait CatalogEntry {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    /// Location for accommodations and activities, vehicle type for transfers.
    fn detail(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: String,
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl CatalogEntry for Accommodation {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn detail(&self) -> &str {
        &self.location
    }
}

impl CatalogEntry for Activity {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn detail(&self) -> &str {
        &self.location
    }
}

impl CatalogEntry for Transfer {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn detail(&self) -> &str {
        &self.kind
    }
}

/// Lookup table interface; implementations never hand out mutable access.
pub trait Catalog<T: CatalogEntry>: Send + Sync {
    fn list_all(&self) -> &[T];

    fn get_by_id(&self, id: &str) -> Option<&T> {
        self.list_all().iter().find(|entry| entry.id() == id)
    }
}

#[derive(Debug, Clone)]
pub struct StaticCatalog<T> {
    entries: Vec<T>,
}

impl<T> StaticCatalog<T> {
    pub fn new(entries: Vec<T>) -> Self {
        Self { entries }
    }
}

impl<T: CatalogEntry + Send + Sync> Catalog<T> for StaticCatalog<T> {
    fn list_all(&self) -> &[T] {
        &self.entries
    }
}

pub struct ReferenceCatalogs {
    pub accommodations: Box<dyn Catalog<Accommodation>>,
    pub activities: Box<dyn Catalog<Activity>>,
    pub transfers: Box<dyn Catalog<Transfer>>,
}

impl ReferenceCatalogs {
    pub fn new(
        accommodations: impl Catalog<Accommodation> + 'static,
        activities: impl Catalog<Activity> + 'static,
        transfers: impl Catalog<Transfer> + 'static,
    ) -> Self {
        Self {
            accommodations: Box::new(accommodations),
            activities: Box::new(activities),
            transfers: Box::new(transfers),
        }
    }

    /// Phuket / Krabi / Phi Phi 的固定清單
    pub fn thailand() -> Self {
        let accommodations = [
            ("1", "Phuket Marriott Resort & Spa", "Patong, Phuket"),
            ("2", "Kata Rocks", "Kata, Phuket"),
            ("3", "Hilton Phuket Arcadia Resort", "Karon, Phuket"),
            ("4", "Krabi Resort", "Ao Nang, Krabi"),
            ("5", "Railay Princess Resort & Spa", "Railay, Krabi"),
            ("6", "Phi Phi Island Village Beach Resort", "Phi Phi Islands"),
            ("7", "The Slate", "Phuket"),
            ("8", "Dusit Thani Krabi Beach Resort", "Krabi Town, Krabi"),
        ]
        .into_iter()
        .map(|(id, name, location)| Accommodation {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
        })
        .collect();

        let activities = [
            ("1", "Phi Phi Islands Tour", "Phi Phi Islands"),
            ("2", "Phang Nga Bay Tour", "Phuket"),
            ("3", "Patong Nightlife Tour", "Patong, Phuket"),
            ("4", "Four Islands Tour", "Ao Nang, Krabi"),
            ("5", "Rock Climbing in Railay", "Railay, Krabi"),
            ("6", "Elephant Sanctuary Visit", "Phuket"),
            ("7", "Thai Cooking Class", "Krabi Town, Krabi"),
            ("8", "Big Buddha Phuket", "Phuket"),
            ("9", "Tiger Cave Temple", "Krabi Town, Krabi"),
            ("10", "Similan Islands Snorkeling", "Phuket"),
        ]
        .into_iter()
        .map(|(id, name, location)| Activity {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
        })
        .collect();

        let transfers = [
            ("1", "Phuket Airport to Patong Beach", "Car"),
            ("2", "Phuket Airport to Kata Beach", "Car"),
            ("3", "Phuket Airport to Karon Beach", "Car"),
            ("4", "Krabi Airport to Ao Nang", "Car"),
            ("5", "Ao Nang to Railay Beach", "Longtail Boat"),
            ("6", "Krabi to Phi Phi Islands", "Ferry"),
            ("7", "Phuket to Phi Phi Islands", "Speedboat"),
            ("8", "Phuket to Krabi Town", "Car"),
        ]
        .into_iter()
        .map(|(id, name, kind)| Transfer {
            id: id.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
        })
        .collect();

        Self::new(
            StaticCatalog::new(accommodations),
            StaticCatalog::new(activities),
            StaticCatalog::new(transfers),
        )
    }
}
