//! Outfitter CLI — the main entry point.
//!
//! Commands:
//! - `onboard`   — Write a default config
//! - `status`    — Show configuration and wardrobe size
//! - `wardrobe`  — Add, list, or remove garments
//! - `today`     — Weather-aware outfit of the day
//! - `suggest`   — Outfits for one or more occasions
//! - `find`      — Resolve a free-text garment reference
//! - `tips`      — Style tips for a style and weather
//! - `occasions` — List known occasions

use clap::{Parser, Subcommand};
use outfitter_core::{Category, Style};

mod commands;

#[derive(Parser)]
#[command(
    name = "outfitter",
    about = "Outfitter — outfit recommendations from your own wardrobe",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration
    Onboard,

    /// Show configuration and wardrobe status
    Status,

    /// Manage wardrobe garments
    Wardrobe {
        #[command(subcommand)]
        action: WardrobeAction,
    },

    /// Compose today's outfit from the current weather
    Today {
        /// Override the configured location
        #[arg(short, long)]
        location: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Suggest outfits for occasions (business, date, casual, ...)
    Suggest {
        #[arg(required = true)]
        occasions: Vec<String>,

        /// Ignore the weather
        #[arg(long)]
        no_weather: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Find a garment by name or description
    Find {
        /// Free-text reference, e.g. "my blue jacket"
        query: String,
    },

    /// Style tips
    Tips {
        style: Style,

        /// Weather description, e.g. "cold and windy"
        #[arg(short, long, default_value = "")]
        weather: String,
    },

    /// List known occasions
    Occasions,
}

#[derive(Subcommand)]
enum WardrobeAction {
    /// Add a garment
    Add {
        /// Item name, e.g. "Navy Blazer"
        name: String,

        #[arg(short, long)]
        category: Category,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Image URL
        #[arg(long)]
        image: Option<String>,
    },

    /// List garments
    List {
        #[arg(short, long)]
        category: Option<Category>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Remove a garment by id
    Remove { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Status => commands::status::run().await?,
        Commands::Wardrobe { action } => match action {
            WardrobeAction::Add {
                name,
                category,
                description,
                image,
            } => commands::wardrobe::add(name, category, description, image).await?,
            WardrobeAction::List { category, json } => {
                commands::wardrobe::list(category, json).await?
            }
            WardrobeAction::Remove { id } => commands::wardrobe::remove(&id).await?,
        },
        Commands::Today { location, json } => commands::today::run(location, json).await?,
        Commands::Suggest {
            occasions,
            no_weather,
            json,
        } => commands::suggest::run(occasions, !no_weather, json).await?,
        Commands::Find { query } => commands::find::run(&query).await?,
        Commands::Tips { style, weather } => commands::tips::run(style, &weather)?,
        Commands::Occasions => commands::occasions::run()?,
    }

    Ok(())
}
