//! Occasion scoring engine.
//!
//! Every candidate garment is scored independently by a fixed sequence of
//! rules. Each rule looks at the lowercased item name and description and
//! returns a signed increment; the increments are summed with no early exit.
//! The highest total wins, ties going to the earlier candidate.

use outfitter_core::{Category, Garment, OccasionProfile, Style};
use tracing::debug;

const FORMAL_CORE: &[&str] = &["blazer", "suit", "dress", "shirt", "polo", "button-down", "oxford"];
const FORMAL_PANTS: &[&str] = &["dress pants", "slacks", "chinos", "trousers", "pants"];
const PANTS: &[&str] = &["pants", "trousers"];
const FORMAL_CASUAL_WEAR: &[&str] = &[
    "shorts", "jeans", "sweatshirt", "hoodie", "t-shirt", "cargo", "athletic", "tank", "sports",
];
const FORMAL_LOOSE: &[&str] = &["casual", "relaxed", "loose"];

const ELEGANT_CORE: &[&str] = &["blazer", "suit", "dress", "shirt", "polo", "button-down"];
const ELEGANT_PANTS: &[&str] = &["dress pants", "slacks", "chinos", "trousers"];
const ELEGANT_VERY_CASUAL: &[&str] = &["shorts", "cargo", "sweatshirt", "hoodie"];
const ELEGANT_CASUAL: &[&str] = &["jeans", "t-shirt"];

const CASUAL_CORE: &[&str] = &["jeans", "t-shirt", "sweatshirt", "hoodie", "polo", "shorts"];
const CASUAL_WORDS: &[&str] = &["casual", "relaxed", "comfortable"];
const CASUAL_TOO_FORMAL: &[&str] = &["suit", "dress pants", "blazer"];

const ATHLETIC_CORE: &[&str] = &["gym", "workout", "athletic", "sports", "performance", "moisture-wicking"];
const ATHLETIC_BASICS: &[&str] = &["shorts", "pants", "shirt", "tank"];
const ATHLETIC_TOO_FORMAL: &[&str] = &["blazer", "suit", "dress", "dress pants"];

const COMFORT_CORE: &[&str] = &["comfortable", "relaxed", "soft", "breathable"];
const COMFORT_FABRICS: &[&str] = &["cotton", "blend", "stretch"];
const COMFORT_RESTRICTIVE: &[&str] = &["tight", "restrictive", "stiff"];

const SHORTS: &[&str] = &["shorts"];
const PANTS_ONLY: &[&str] = &["pants"];
const DRESS: &[&str] = &["dress"];

const FORMAL_TOP_SPORTY: &[&str] = &["athletic", "tank", "sports", "workout", "gym"];
const FORMAL_TOP_SMART: &[&str] = &["polo", "shirt", "button-down", "oxford"];

const NEUTRAL_COLORS: &[&str] = &["black", "white", "gray", "navy", "beige", "brown", "charcoal"];
const PROFESSIONAL_COLORS: &[&str] = &["navy", "black", "gray", "white", "charcoal"];
const ROMANTIC_COLORS: &[&str] = &["red", "pink", "purple", "rose", "burgundy"];
const VERSATILE_COLORS: &[&str] = &["black", "white", "gray", "navy", "beige"];

const INAPPROPRIATE_PENALTY: i32 = -12;
const PREFERRED_BONUS: i32 = 8;

/// What a garment is being scored against.
#[derive(Debug, Clone, Copy)]
pub struct ScoringCriteria<'a> {
    pub style: Style,
    pub color_preferences: &'a [String],
    pub inappropriate: &'a [String],
    pub preferred: &'a [String],
}

impl<'a> ScoringCriteria<'a> {
    pub fn for_occasion(profile: &'a OccasionProfile) -> Self {
        Self {
            style: profile.style,
            color_preferences: &profile.color_preferences,
            inappropriate: &profile.inappropriate_items,
            preferred: &profile.preferred_items,
        }
    }

    /// Style-only criteria: no color tags, no occasion keyword lists.
    pub fn style_only(style: Style) -> Self {
        Self {
            style,
            color_preferences: &[],
            inappropriate: &[],
            preferred: &[],
        }
    }
}

/// A garment paired with its total score. Lives only for one selection.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub score: i32,
    pub garment: &'a Garment,
}

/// Lowercased searchable text of one garment.
struct GarmentText {
    name: String,
    description: String,
}

impl GarmentText {
    fn of(garment: &Garment) -> Self {
        Self {
            name: garment.item_name.to_lowercase(),
            description: garment.description.to_lowercase(),
        }
    }

    fn has(&self, fragment: &str) -> bool {
        self.name.contains(fragment) || self.description.contains(fragment)
    }

    fn any(&self, fragments: &[&str]) -> bool {
        fragments.iter().any(|f| self.has(f))
    }
}

/// First tier whose keywords match, or 0.
fn first_tier(text: &GarmentText, tiers: &[(&[&str], i32)]) -> i32 {
    tiers
        .iter()
        .find(|(words, _)| text.any(words))
        .map_or(0, |(_, points)| *points)
}

fn style_score(text: &GarmentText, style: Style) -> i32 {
    match style {
        Style::Formal => {
            first_tier(text, &[(FORMAL_CORE, 8), (FORMAL_PANTS, 8), (PANTS, 5)])
                + first_tier(text, &[(FORMAL_CASUAL_WEAR, -15), (FORMAL_LOOSE, -8)])
        }
        Style::Elegant => {
            first_tier(text, &[(ELEGANT_CORE, 4), (ELEGANT_PANTS, 4), (PANTS, 2)])
                + first_tier(text, &[(ELEGANT_VERY_CASUAL, -8), (ELEGANT_CASUAL, -3)])
        }
        Style::Casual => {
            first_tier(text, &[(CASUAL_CORE, 3), (CASUAL_WORDS, 2)])
                + first_tier(text, &[(CASUAL_TOO_FORMAL, -2)])
        }
        Style::Athletic => {
            first_tier(text, &[(ATHLETIC_CORE, 5), (ATHLETIC_BASICS, 2)])
                + first_tier(text, &[(ATHLETIC_TOO_FORMAL, -8)])
        }
        Style::Comfortable => {
            first_tier(text, &[(COMFORT_CORE, 3), (COMFORT_FABRICS, 1)])
                + first_tier(text, &[(COMFORT_RESTRICTIVE, -3)])
        }
        Style::Relaxed | Style::Sophisticated | Style::Versatile => 0,
    }
}

/// Formal occasions care which kind of top or bottom it is.
fn formal_category_score(text: &GarmentText, style: Style, category: Category) -> i32 {
    if style != Style::Formal {
        return 0;
    }
    match category {
        Category::Bottoms => first_tier(text, &[(SHORTS, -15), (PANTS_ONLY, 8), (DRESS, 10)]),
        Category::Tops => first_tier(text, &[(FORMAL_TOP_SPORTY, -20), (FORMAL_TOP_SMART, 10)]),
        _ => 0,
    }
}

fn color_score(text: &GarmentText, color_preferences: &[String]) -> i32 {
    let wants = |tag: &str| color_preferences.iter().any(|c| c.eq_ignore_ascii_case(tag));
    let mut score = 0;
    if wants("neutral") && text.any(NEUTRAL_COLORS) {
        score += 3;
    }
    if wants("professional") && text.any(PROFESSIONAL_COLORS) {
        score += 3;
    }
    if wants("romantic") && text.any(ROMANTIC_COLORS) {
        score += 2;
    }
    if wants("versatile") && text.any(VERSATILE_COLORS) {
        score += 2;
    }
    score
}

fn context_score(text: &GarmentText, style: Style) -> i32 {
    let mut score = 0;
    if text.has("business") {
        score += match style {
            Style::Formal => 3,
            Style::Casual => -1,
            _ => 0,
        };
    }
    if text.has("casual") {
        score += match style {
            Style::Formal => -3,
            Style::Casual => 2,
            _ => 0,
        };
    }
    score
}

/// Every matching fragment counts, not just the first.
fn keyword_list_score(text: &GarmentText, fragments: &[String], points: i32) -> i32 {
    fragments
        .iter()
        .filter(|f| text.has(&f.to_lowercase()))
        .map(|_| points)
        .sum()
}

/// Total score of one garment. Deterministic.
pub fn score(garment: &Garment, criteria: &ScoringCriteria<'_>) -> i32 {
    let text = GarmentText::of(garment);
    style_score(&text, criteria.style)
        + formal_category_score(&text, criteria.style, garment.category)
        + color_score(&text, criteria.color_preferences)
        + context_score(&text, criteria.style)
        + keyword_list_score(&text, criteria.inappropriate, INAPPROPRIATE_PENALTY)
        + keyword_list_score(&text, criteria.preferred, PREFERRED_BONUS)
}

/// Score all candidates and sort them best-first. The sort is stable, so
/// equal scores keep their input order.
pub fn rank<'a, I>(items: I, criteria: &ScoringCriteria<'_>) -> Vec<ScoredCandidate<'a>>
where
    I: IntoIterator<Item = &'a Garment>,
{
    let mut scored: Vec<ScoredCandidate<'a>> = items
        .into_iter()
        .map(|garment| ScoredCandidate {
            score: score(garment, criteria),
            garment,
        })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// The best garment for the criteria; `None` only when `items` is empty.
/// A negative top score still wins.
pub fn select_best<'a, I>(items: I, criteria: &ScoringCriteria<'_>) -> Option<&'a Garment>
where
    I: IntoIterator<Item = &'a Garment>,
{
    let ranked = rank(items, criteria);
    if ranked.is_empty() {
        return None;
    }

    debug!(
        style = %criteria.style,
        top = ?ranked
            .iter()
            .take(3)
            .map(|c| (c.garment.item_name.as_str(), c.score))
            .collect::<Vec<_>>(),
        "Item scoring"
    );

    ranked.first().map(|c| c.garment)
}
