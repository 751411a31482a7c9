pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::{toml_config::TomlConfig, Settings};

pub use adapters::{ItineraryClient, RecommendClient};
pub use core::create_flow::{CreateFlow, FlowState};
pub use core::draft::{DayDraft, DayField, ItineraryDraft};
pub use domain::catalog::ReferenceCatalogs;
pub use utils::error::{PlannerError, Result};
