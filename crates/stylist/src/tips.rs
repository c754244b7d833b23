//! Style tips shown alongside a suggestion.

use outfitter_core::Style;

/// Upper bound on tips per suggestion.
pub const MAX_TIPS: usize = 5;

const GENERAL_TIPS: [&str; 3] = [
    "Ensure colors complement each other",
    "Check that proportions work together",
    "Consider the occasion's dress code",
];

/// Weather keywords in priority order; only the first match contributes.
const WEATHER_TIPS: [(&str, &str); 3] = [
    ("cold", "Layer appropriately for warmth"),
    ("hot", "Choose breathable, lightweight fabrics"),
    ("rain", "Consider water-resistant outerwear"),
];

fn style_tips(style: Style) -> &'static [&'static str] {
    match style {
        Style::Formal => &[
            "Keep accessories minimal and professional",
            "Ensure proper fit - not too tight or loose",
            "Choose classic colors for timeless appeal",
        ],
        Style::Casual => &[
            "Layer pieces for added dimension",
            "Mix textures for visual interest",
            "Don't be afraid to add personality with accessories",
        ],
        Style::Athletic => &[
            "Prioritize comfort and mobility",
            "Choose moisture-wicking fabrics when possible",
            "Ensure proper fit for performance",
        ],
        Style::Elegant => &[
            "Focus on sophisticated color combinations",
            "Pay attention to fabric quality and texture",
            "Balance bold pieces with classic staples",
        ],
        Style::Sophisticated => &[
            "Choose refined, high-quality materials",
            "Opt for timeless silhouettes",
            "Let one statement piece be the focal point",
        ],
        Style::Versatile => &[
            "Select pieces that work for multiple occasions",
            "Focus on neutral colors as a base",
            "Add personality with accessories and layering",
        ],
        Style::Comfortable | Style::Relaxed => &[],
    }
}

/// Up to [`MAX_TIPS`] tips: style tips, then one weather tip, then general
/// advice.
pub fn generate_tips(style: Style, weather_description: &str) -> Vec<String> {
    let weather = weather_description.to_lowercase();
    let weather_tip = WEATHER_TIPS
        .iter()
        .find(|(keyword, _)| weather.contains(keyword))
        .map(|(_, tip)| *tip);

    style_tips(style)
        .iter()
        .copied()
        .chain(weather_tip)
        .chain(GENERAL_TIPS)
        .take(MAX_TIPS)
        .map(String::from)
        .collect()
}
