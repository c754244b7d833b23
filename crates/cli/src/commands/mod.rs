pub mod find;
pub mod occasions;
pub mod onboard;
pub mod status;
pub mod suggest;
pub mod tips;
pub mod today;
pub mod wardrobe;

use std::sync::Arc;

use outfitter_config::AppConfig;
use outfitter_core::GarmentRepository;
use outfitter_stylist::Stylist;
use outfitter_wardrobe::{FileWardrobe, InMemoryWardrobe};

/// Rate-limiter key for requests made from the command line.
pub const CLI_CLIENT: &str = "cli";

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

pub fn load_config() -> Result<AppConfig, Box<dyn std::error::Error>> {
    Ok(AppConfig::load().map_err(outfitter_core::Error::from)?)
}

/// The garment repository named by `[wardrobe] backend`.
pub fn open_wardrobe(config: &AppConfig) -> Arc<dyn GarmentRepository> {
    match config.wardrobe.backend.as_str() {
        "memory" => Arc::new(InMemoryWardrobe::new()),
        _ => Arc::new(FileWardrobe::new(config.wardrobe.resolved_path())),
    }
}

pub fn build_stylist(config: &AppConfig) -> Stylist {
    Stylist::from_config(
        config,
        open_wardrobe(config),
        outfitter_weather::from_config(&config.weather),
    )
}
