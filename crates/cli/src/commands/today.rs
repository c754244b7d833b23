//! `outfitter today` — Outfit of the day.

use outfitter_stylist::{OutfitSelection, SlotFill};

use super::{CLI_CLIENT, CmdResult, build_stylist, load_config};

pub async fn run(location: Option<String>, json: bool) -> CmdResult {
    let config = load_config()?;
    let stylist = build_stylist(&config);
    let location = location.unwrap_or_else(|| config.location.clone());

    let outfit = stylist
        .outfit_of_the_day(CLI_CLIENT, &config.owner, &location)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outfit)?);
    } else {
        print_outfit(&outfit, &location);
    }

    Ok(())
}

fn slot_line(label: &str, slot: &SlotFill) -> String {
    match slot {
        SlotFill::Chosen(detail) if detail.description.is_empty() => {
            format!("  {label:<10} {}", detail.name)
        }
        SlotFill::Chosen(detail) => {
            format!("  {label:<10} {} — {}", detail.name, detail.description)
        }
        SlotFill::Unmet { prompt } => format!("  {label:<10} ({prompt})"),
    }
}

fn print_outfit(outfit: &OutfitSelection, location: &str) {
    println!("🌤️  Outfit of the day for {location}");
    println!("   Weather: {}", outfit.weather);
    println!();
    println!("{}", slot_line("Top", &outfit.top));
    println!("{}", slot_line("Bottom", &outfit.bottom));
    println!("{}", slot_line("Outerwear", &outfit.outerwear));
    println!();
    if !outfit.reasoning.is_empty() {
        println!("   {}", outfit.reasoning);
    }
    let categories: Vec<_> = outfit
        .categories_available
        .iter()
        .map(|c| c.as_str())
        .collect();
    println!(
        "   ({} items; {})",
        outfit.wardrobe_count,
        categories.join(", ")
    );
}
