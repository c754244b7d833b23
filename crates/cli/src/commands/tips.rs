//! `outfitter tips` — Style tips.

use outfitter_core::Style;
use outfitter_stylist::generate_tips;

use super::CmdResult;

pub fn run(style: Style, weather: &str) -> CmdResult {
    println!("💡 Tips for {style} style");
    for tip in generate_tips(style, weather) {
        println!("   - {tip}");
    }
    Ok(())
}
