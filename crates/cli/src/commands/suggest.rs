//! `outfitter suggest` — Outfits for one or more occasions.

use outfitter_stylist::SuggestionSet;

use super::{CLI_CLIENT, CmdResult, build_stylist, load_config};

pub async fn run(occasions: Vec<String>, consider_weather: bool, json: bool) -> CmdResult {
    let config = load_config()?;
    let stylist = build_stylist(&config);

    let unknown: Vec<String> = occasions
        .iter()
        .filter_map(|id| stylist.occasions().require(id).err())
        .map(|e| e.to_string())
        .collect();
    if !unknown.is_empty() {
        let known: Vec<_> = stylist.occasions().ids().collect();
        eprintln!(
            "⚠️  Skipping: {} (known: {})",
            unknown.join("; "),
            known.join(", ")
        );
    }

    let location = consider_weather.then_some(config.location.as_str());
    let set = stylist
        .suggest(CLI_CLIENT, &config.owner, &occasions, location)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&set)?);
    } else {
        print_suggestions(&set);
    }

    Ok(())
}

fn print_suggestions(set: &SuggestionSet) {
    if set.suggestions.is_empty() {
        println!("   Nothing in your wardrobe fits those occasions yet.");
        return;
    }

    for suggestion in &set.suggestions {
        println!("✨ {} [{}]", suggestion.occasion, suggestion.style);
        for item in &suggestion.items {
            println!("   • {} ({})", item.item_name, item.category);
        }
        println!("   Why: {}", suggestion.reasoning);
        if !suggestion.style_tips.is_empty() {
            println!("   Tips:");
            for tip in &suggestion.style_tips {
                println!("     - {tip}");
            }
        }
        println!();
    }
    println!("   ({} items in wardrobe)", set.wardrobe_count);
}
