//! `outfitter status` — Show configuration and wardrobe status.

use outfitter_config::AppConfig;
use outfitter_stylist::OccasionTable;

use super::{CmdResult, load_config, open_wardrobe};

pub async fn run() -> CmdResult {
    let config = load_config()?;
    let wardrobe = open_wardrobe(&config);
    let items = wardrobe.count(&config.owner).await?;

    println!("👔 Outfitter Status");
    println!("==================");
    println!("  Config dir:   {}", AppConfig::config_dir().display());
    println!("  Owner:        {}", config.owner);
    println!("  Location:     {}", config.location);
    println!("  Weather:      {}", config.weather.source);
    println!("  Wardrobe:     {} ({items} items)", wardrobe.name());
    if config.wardrobe.backend == "file" {
        println!("  Wardrobe file: {}", config.wardrobe.resolved_path().display());
    }
    println!(
        "  Rate limit:   {} requests / {}s",
        config.rate_limit.max_requests, config.rate_limit.window_secs
    );
    println!(
        "  Occasions:    {} built-in, {} configured",
        OccasionTable::builtin().len(),
        config.occasions.len()
    );

    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — run `outfitter onboard` first");
    }

    Ok(())
}
