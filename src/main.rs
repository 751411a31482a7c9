use clap::Parser;
use itinerary_planner::core::listing::{featured_params, ListQuery, Pagination};
use itinerary_planner::core::recommendation::{Preference, RecommendationForm};
use itinerary_planner::core::summary;
use itinerary_planner::core::{ConfigProvider, ItineraryService, RecommendationService};
use itinerary_planner::domain::catalog::{Catalog, CatalogEntry};
use itinerary_planner::utils::error::ErrorSeverity;
use itinerary_planner::utils::logger;
use itinerary_planner::{
    CliConfig, Command, CreateFlow, ItineraryClient, ItineraryDraft, PlannerError,
    RecommendClient, ReferenceCatalogs, Result, Settings,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting itinerary-planner");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(&e));
        }
    };

    if let Err(e) = run(cli.command, &settings).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(e: &PlannerError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

async fn run(command: Command, settings: &Settings) -> Result<()> {
    match command {
        Command::List {
            page,
            nights,
            regions,
        } => {
            let client = ItineraryClient::from_config(settings)?;
            let query = ListQuery {
                page,
                nights,
                regions,
            };
            let result = client.list(&query.to_params(settings.page_size())).await?;

            if result.itineraries.is_empty() {
                println!("No itineraries found");
            }
            for itinerary in &result.itineraries {
                println!("{}", summary::card_line(itinerary));
            }

            let pagination =
                Pagination::new(query.current_page(), result.total, settings.page_size());
            if pagination.is_visible() {
                println!(
                    "Page {} of {} ({} itineraries)",
                    pagination.current_page, pagination.total_pages, result.total
                );
            }
        }
        Command::Featured => {
            let client = ItineraryClient::from_config(settings)?;
            let result = client
                .list(&featured_params(settings.featured_limit()))
                .await?;
            for itinerary in &result.itineraries {
                println!("{}", summary::card_line(itinerary));
            }
        }
        Command::Show { id } => {
            let client = ItineraryClient::from_config(settings)?;
            match client.get(id).await? {
                Some(itinerary) => {
                    for line in summary::detail_lines(&itinerary) {
                        println!("{}", line);
                    }
                }
                None => println!("Itinerary not found"),
            }
        }
        Command::Create { draft, dry_run } => {
            create(&draft, dry_run, settings).await?;
        }
        Command::Recommend {
            nights,
            regions,
            budget,
            preferences,
        } => {
            let mut form = RecommendationForm::new()
                .with_num_nights(nights)
                .with_regions(regions.unwrap_or_default())
                .with_budget(budget);
            for raw in &preferences {
                let preference: Preference = raw.parse()?;
                if !form.preferences().contains(&preference) {
                    form = form.toggle_preference(preference);
                }
            }

            let client = RecommendClient::from_config(settings)?;
            let result = client.recommend(&form.to_request()?).await?;
            if !result.message.is_empty() {
                println!("{}", result.message);
            }
            for itinerary in &result.itineraries {
                println!("{}", summary::card_line(itinerary));
            }
        }
        Command::Catalog => {
            let catalogs = ReferenceCatalogs::thailand();
            print_catalog("Accommodations", catalogs.accommodations.as_ref());
            print_catalog("Activities", catalogs.activities.as_ref());
            print_catalog("Transfers", catalogs.transfers.as_ref());
        }
    }
    Ok(())
}

async fn create(path: &str, dry_run: bool, settings: &Settings) -> Result<()> {
    tracing::info!("📁 Loading draft from: {}", path);
    let draft = ItineraryDraft::from_file(path)?;
    let catalogs = ReferenceCatalogs::thailand();

    for line in summary::draft_lines(&draft, &catalogs) {
        println!("{}", line);
    }
    draft.check_references(&catalogs)?;

    if dry_run {
        let request = draft.to_create_request()?;
        println!("{}", serde_json::to_string_pretty(&request)?);
        tracing::info!("🔍 DRY RUN MODE - draft not submitted");
        return Ok(());
    }

    let client = ItineraryClient::from_config(settings)?;
    let mut flow = CreateFlow::with_draft(draft);
    let itinerary = flow.submit(&client).await?;
    println!("✅ Created itinerary #{}: {}", itinerary.id, itinerary.name);
    Ok(())
}

fn print_catalog<T: CatalogEntry>(title: &str, catalog: &dyn Catalog<T>) {
    println!("{}:", title);
    for entry in catalog.list_all() {
        println!("  {:>3}  {} ({})", entry.id(), entry.name(), entry.detail());
    }
}
