//! Occasion suggestion builder.
//!
//! For each requested occasion, picks the best-scoring garment in every
//! required category the wardrobe covers, then tops the outfit up from the
//! optional categories.

use std::collections::{BTreeMap, BTreeSet};

use outfitter_core::{Category, Garment, Style, WardrobeError, WeatherReport};
use serde::Serialize;
use tracing::debug;

use crate::occasions::OccasionTable;
use crate::scoring::{ScoringCriteria, select_best};
use crate::tips::generate_tips;

/// One outfit proposal for an occasion.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    /// `"{occasion}_{ordinal}"`
    pub id: String,
    /// Human-readable occasion description.
    pub occasion: String,
    pub items: Vec<Garment>,
    pub reasoning: String,
    pub style_tips: Vec<String>,
    pub style: Style,
    pub weather_considered: bool,
}

/// All suggestions for one request.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionSet {
    pub suggestions: Vec<Suggestion>,
    pub wardrobe_count: usize,
    pub categories_available: BTreeSet<Category>,
}

/// Weather sentence prepended to tip generation.
///
/// `None` means weather was not requested; `Some(Err(_))` means the lookup
/// failed.
pub fn weather_context<E>(weather: Option<&Result<WeatherReport, E>>) -> String {
    match weather {
        None => String::new(),
        Some(Ok(report)) => format!("Current weather: {}. ", report.context()),
        Some(Err(_)) => "Weather information unavailable. ".to_string(),
    }
}

/// Build suggestions for `occasions`, in request order. Unknown occasion
/// ids are skipped; occasions the wardrobe can't dress are left out.
///
/// `weather_considered` records whether the caller asked for weather, even
/// when the lookup failed and `weather_context` carries no reading.
pub fn build_suggestions(
    garments: &[Garment],
    occasions: &[String],
    weather_context: &str,
    weather_considered: bool,
    table: &OccasionTable,
    max_items: usize,
) -> Result<SuggestionSet, WardrobeError> {
    if garments.is_empty() {
        return Err(WardrobeError::EmptyInventory(
            "add some clothing items first".into(),
        ));
    }

    let mut by_category: BTreeMap<Category, Vec<&Garment>> = BTreeMap::new();
    for garment in garments {
        by_category.entry(garment.category).or_default().push(garment);
    }

    let mut suggestions = Vec::new();
    for occasion_id in occasions {
        let Some(profile) = table.get(occasion_id) else {
            debug!(occasion = %occasion_id, "Skipping unknown occasion");
            continue;
        };
        let criteria = ScoringCriteria::for_occasion(profile);

        let mut items: Vec<Garment> = Vec::new();
        let mut reasoning = Vec::new();

        for category in &profile.required_categories {
            let Some(candidates) = by_category.get(category) else {
                continue;
            };
            if let Some(best) = select_best(candidates.iter().copied(), &criteria) {
                reasoning.push(format!(
                    "Selected {} for {}",
                    best.item_name,
                    category.as_str().to_lowercase()
                ));
                items.push(best.clone());
            }
        }

        for category in &profile.optional_categories {
            if items.len() >= max_items {
                break;
            }
            let Some(candidates) = by_category.get(category) else {
                continue;
            };
            if let Some(best) = select_best(candidates.iter().copied(), &criteria) {
                reasoning.push(format!(
                    "Added {} for {}",
                    best.item_name,
                    category.as_str().to_lowercase()
                ));
                items.push(best.clone());
            }
        }

        if items.is_empty() {
            debug!(occasion = %occasion_id, "No garments fit occasion");
            continue;
        }

        suggestions.push(Suggestion {
            id: format!("{}_{}", occasion_id, suggestions.len()),
            occasion: profile.description.clone(),
            items,
            reasoning: reasoning.join(" | "),
            style_tips: generate_tips(profile.style, weather_context),
            style: profile.style,
            weather_considered,
        });
    }

    Ok(SuggestionSet {
        suggestions,
        wardrobe_count: garments.len(),
        categories_available: by_category.into_keys().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use outfitter_core::WeatherError;

    fn g(name: &str, description: &str, category: Category) -> Garment {
        Garment::new("u1", name, description, category)
    }

    fn wardrobe() -> Vec<Garment> {
        vec![
            g("Graphic T-Shirt", "cotton tee", Category::Tops),
            g("Navy Button-Down Shirt", "crisp oxford", Category::Tops),
            g("Cargo Shorts", "khaki", Category::Bottoms),
            g("Charcoal Dress Pants", "wool slacks", Category::Bottoms),
            g("Navy Blazer", "wool", Category::Outerwear),
            g("Black Loafers", "leather", Category::Shoes),
        ]
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn business_outfit_picks_formal_pieces() {
        let items = wardrobe();
        let set = build_suggestions(&items, &ids(&["business"]), "", false, &OccasionTable::builtin(), 4)
            .unwrap();

        assert_eq!(set.suggestions.len(), 1);
        let s = &set.suggestions[0];
        assert_eq!(s.id, "business_0");
        assert_eq!(s.style, Style::Formal);
        let names: Vec<_> = s.items.iter().map(|g| g.item_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Navy Button-Down Shirt", "Charcoal Dress Pants", "Navy Blazer", "Black Loafers"]
        );
        assert_eq!(
            s.reasoning,
            "Selected Navy Button-Down Shirt for tops | Selected Charcoal Dress Pants for bottoms | \
             Added Navy Blazer for outerwear | Added Black Loafers for shoes"
        );
        assert!(!s.weather_considered);
        assert_eq!(set.wardrobe_count, 6);
        assert_eq!(set.categories_available.len(), 4);
    }

    #[test]
    fn optional_items_stop_at_limit() {
        let items = wardrobe();
        let set = build_suggestions(&items, &ids(&["business"]), "", false, &OccasionTable::builtin(), 3)
            .unwrap();
        assert_eq!(set.suggestions[0].items.len(), 3);
        assert!(!set.suggestions[0].reasoning.contains("shoes"));
    }

    #[test]
    fn unknown_occasions_are_skipped_and_ids_stay_dense() {
        let items = wardrobe();
        let set = build_suggestions(
            &items,
            &ids(&["gala", "weekend", "workout"]),
            "",
            false,
            &OccasionTable::builtin(),
            4,
        )
        .unwrap();
        let ids: Vec<_> = set.suggestions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["weekend_0", "workout_1"]);
    }

    #[test]
    fn occasion_without_matching_categories_is_dropped() {
        let items = vec![g("Silk Scarf", "red", Category::Accessories)];
        let set = build_suggestions(
            &items,
            &ids(&["business", "date"]),
            "",
            false,
            &OccasionTable::builtin(),
            4,
        )
        .unwrap();
        // Business has no accessory slot; date does.
        assert_eq!(set.suggestions.len(), 1);
        assert_eq!(set.suggestions[0].id, "date_0");
        assert_eq!(set.suggestions[0].reasoning, "Added Silk Scarf for accessories");
    }

    #[test]
    fn empty_wardrobe_is_an_error() {
        let err = build_suggestions(&[], &ids(&["casual"]), "", false, &OccasionTable::builtin(), 4)
            .unwrap_err();
        assert!(matches!(err, WardrobeError::EmptyInventory(_)));
    }

    #[test]
    fn weather_context_feeds_tips() {
        let items = wardrobe();
        let report: Result<_, WeatherError> = Ok(WeatherReport::new(35.0, "cold, snow"));
        let context = weather_context(Some(&report));
        assert_eq!(context, "Current weather: 35°F, cold, snow. ");

        let set = build_suggestions(&items, &ids(&["evening"]), &context, true, &OccasionTable::builtin(), 4)
            .unwrap();
        let s = &set.suggestions[0];
        assert!(s.weather_considered);
        assert!(s.style_tips.contains(&"Layer appropriately for warmth".to_string()));
    }

    #[test]
    fn failed_weather_lookup_still_counts_as_considered() {
        let items = wardrobe();
        let failed: Result<WeatherReport, _> = Err(WeatherError::Unavailable("timeout".into()));
        let context = weather_context(Some(&failed));

        let set = build_suggestions(&items, &ids(&["casual"]), &context, true, &OccasionTable::builtin(), 4)
            .unwrap();
        assert!(set.suggestions[0].weather_considered);
        assert!(!set.suggestions[0].style_tips.iter().any(|t| t.contains("warmth")));
    }

    #[test]
    fn weather_context_variants() {
        assert_eq!(weather_context::<WeatherError>(None), "");
        let failed: Result<WeatherReport, _> = Err(WeatherError::Unavailable("timeout".into()));
        assert_eq!(weather_context(Some(&failed)), "Weather information unavailable. ");
    }
}
