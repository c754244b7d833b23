//! `outfitter occasions` — List known occasions.

use outfitter_stylist::OccasionTable;

use super::{CmdResult, load_config};

pub fn run() -> CmdResult {
    let config = load_config()?;
    let table = OccasionTable::with_overrides(&config.occasions);

    println!("📅 Occasions ({})", table.len());
    for profile in table.iter() {
        println!("  {:<10} [{}] {}", profile.id, profile.style, profile.description);
    }

    Ok(())
}
