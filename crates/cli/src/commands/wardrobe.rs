//! `outfitter wardrobe` — Garment management commands.

use outfitter_core::{Category, Garment};

use super::{CmdResult, load_config, open_wardrobe};

pub async fn add(
    name: String,
    category: Category,
    description: String,
    image: Option<String>,
) -> CmdResult {
    let config = load_config()?;
    let wardrobe = open_wardrobe(&config);

    let mut garment = Garment::new(&config.owner, name, description, category);
    garment.image_url = image;
    let label = format!("{} ({})", garment.item_name, garment.category);

    let id = wardrobe.add(garment).await?;
    println!("✅ Added {label}");
    println!("   id: {id}");

    Ok(())
}

pub async fn list(category: Option<Category>, json: bool) -> CmdResult {
    let config = load_config()?;
    let wardrobe = open_wardrobe(&config);

    let garments = match category {
        Some(category) => {
            wardrobe
                .list_by_owner_and_category(&config.owner, category)
                .await?
        }
        None => wardrobe.list_by_owner(&config.owner).await?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&garments)?);
        return Ok(());
    }

    if garments.is_empty() {
        println!("   Wardrobe is empty. Add something with `outfitter wardrobe add`.");
        return Ok(());
    }

    println!("👕 Wardrobe of {} ({} items)", config.owner, garments.len());
    println!();
    for garment in &garments {
        println!(
            "  [{:<11}] {}  ({})",
            garment.category.as_str(),
            garment.item_name,
            garment.created_at.format("%Y-%m-%d")
        );
        if !garment.description.is_empty() {
            println!("                {}", garment.description);
        }
        println!("                id: {}", garment.id);
    }

    Ok(())
}

pub async fn remove(id: &str) -> CmdResult {
    let config = load_config()?;
    let wardrobe = open_wardrobe(&config);

    if wardrobe.remove(&config.owner, id).await? {
        println!("🗑️  Removed {id}");
    } else {
        println!("⚠️  No garment with id {id}");
    }

    Ok(())
}
