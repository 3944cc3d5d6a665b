use std::path::PathBuf;

use anyhow::{Context, bail};
use catalog_presenter::snapshot::{load_categories, load_dishes};
use catalog_presenter::utils::init_logger_with_file;
use catalog_presenter::{BucketKey, Config, ProducerCatalog};
use clap::Parser;

/// Render a producer catalog page from saved API snapshots
#[derive(Debug, Parser)]
#[command(name = "catalog-presenter", version)]
struct Args {
    /// JSON array of dishes
    #[arg(long)]
    dishes: PathBuf,

    /// JSON category tree; sections fall back to uncategorized without it
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Search box contents
    #[arg(long)]
    query: Option<String>,

    /// Press "show more" on a section (repeatable)
    #[arg(long = "reveal", value_name = "BUCKET_KEY")]
    reveal: Vec<String>,

    /// Open the detail overlay for a dish id
    #[arg(long = "open", value_name = "DISH_ID")]
    open: Option<String>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(config.log_level.as_str()), config.log_dir.as_deref());
    config.validate()?;

    let args = Args::parse();

    let priorities = config
        .load_priority_table()
        .context("failed to load category priorities")?;
    tracing::info!("Category priorities: {} ranked names", priorities.len());

    let dishes = load_dishes(&args.dishes)
        .with_context(|| format!("failed to read dishes from {}", args.dishes.display()))?;
    let categories = match &args.categories {
        Some(path) => Some(
            load_categories(path)
                .with_context(|| format!("failed to read categories from {}", path.display()))?,
        ),
        None => None,
    };

    let mut catalog = ProducerCatalog::from_config(&config, priorities);
    if let Some(query) = &args.query {
        catalog.set_query(query);
    }
    for key in &args.reveal {
        catalog.reveal_more(&BucketKey::new(key.as_str()));
    }
    if let Some(id) = &args.open {
        let Some(dish) = dishes.iter().find(|d| &d.id == id) else {
            bail!("dish {} not found in snapshot", id);
        };
        catalog.open_dish(dish.clone());
    }

    let view = catalog.render(&dishes, categories.as_deref());
    tracing::info!(
        "Rendered {} highlights and {} sections",
        view.highlights.len(),
        view.sections.len()
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };
    println!("{}", output);

    Ok(())
}
