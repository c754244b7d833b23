//! `outfitter find` — Resolve a free-text garment reference.

use super::{CLI_CLIENT, CmdResult, build_stylist, load_config};

pub async fn run(query: &str) -> CmdResult {
    let config = load_config()?;
    let stylist = build_stylist(&config);

    let garment = stylist.find_garment(CLI_CLIENT, &config.owner, query).await?;

    println!("🔍 {} ({})", garment.item_name, garment.category);
    if !garment.description.is_empty() {
        println!("   {}", garment.description);
    }
    if let Some(url) = &garment.image_url {
        println!("   image: {url}");
    }
    println!("   id: {}", garment.id);

    Ok(())
}
