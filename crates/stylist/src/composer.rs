//! Weather-tiered outfit composer.
//!
//! Picks a top, bottom and (when the weather calls for it) an outer layer
//! from the owner's wardrobe. Choice within a category is random through a
//! [`Picker`]; every slot the wardrobe cannot fill is reported as unmet with
//! a prompt describing what is missing.

use std::collections::BTreeSet;

use outfitter_core::{Category, Garment, GarmentDetail, WeatherReport};
use serde::Serialize;
use tracing::debug;

use crate::picker::Picker;

/// Below this it's cold.
pub const COLD_BELOW_F: f64 = 50.0;
/// At or above this it's hot.
pub const HOT_FROM_F: f64 = 70.0;
/// Moderate days under this still get an outer layer when one exists.
pub const LAYER_BELOW_F: f64 = 65.0;

/// Temperature band driving the composition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherBand {
    Cold,
    Moderate,
    Hot,
}

impl WeatherBand {
    pub fn for_temperature(temperature_f: f64) -> Self {
        if temperature_f < COLD_BELOW_F {
            WeatherBand::Cold
        } else if temperature_f < HOT_FROM_F {
            WeatherBand::Moderate
        } else {
            WeatherBand::Hot
        }
    }
}

/// One outfit slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SlotFill {
    Chosen(GarmentDetail),
    Unmet { prompt: String },
}

impl SlotFill {
    fn unmet(prompt: &str) -> Self {
        SlotFill::Unmet {
            prompt: prompt.to_string(),
        }
    }

    /// Garment name, or the prompt when unmet.
    pub fn label(&self) -> &str {
        match self {
            SlotFill::Chosen(detail) => &detail.name,
            SlotFill::Unmet { prompt } => prompt,
        }
    }

    pub fn is_chosen(&self) -> bool {
        matches!(self, SlotFill::Chosen(_))
    }
}

/// A composed daily outfit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitSelection {
    pub top: SlotFill,
    pub bottom: SlotFill,
    pub outerwear: SlotFill,
    pub reasoning: String,
    pub weather: String,
    pub wardrobe_count: usize,
    pub categories_available: BTreeSet<Category>,
}

impl OutfitSelection {
    /// Returned when the owner has no garments at all.
    pub fn empty_wardrobe() -> Self {
        Self {
            top: SlotFill::unmet("Add items to your wardrobe"),
            bottom: SlotFill::unmet("to get personalized suggestions"),
            outerwear: SlotFill::unmet("Use the Add Item feature"),
            reasoning: "No wardrobe items found".into(),
            weather: "Unknown".into(),
            wardrobe_count: 0,
            categories_available: BTreeSet::new(),
        }
    }
}

/// Borrowed view of a wardrobe split by the categories the composer uses.
#[derive(Debug, Default)]
pub struct CategorizedWardrobe<'a> {
    pub tops: Vec<&'a Garment>,
    pub bottoms: Vec<&'a Garment>,
    pub outerwear: Vec<&'a Garment>,
    pub dresses: Vec<&'a Garment>,
    pub categories: BTreeSet<Category>,
}

impl<'a> CategorizedWardrobe<'a> {
    pub fn new(garments: &'a [Garment]) -> Self {
        let mut wardrobe = Self::default();
        for garment in garments {
            wardrobe.categories.insert(garment.category);
            match garment.category {
                Category::Tops => wardrobe.tops.push(garment),
                Category::Bottoms => wardrobe.bottoms.push(garment),
                Category::Outerwear => wardrobe.outerwear.push(garment),
                Category::Dresses => wardrobe.dresses.push(garment),
                Category::Shoes | Category::Accessories => {}
            }
        }
        wardrobe
    }
}

fn pick_from<'a>(items: &[&'a Garment], picker: &mut impl Picker) -> Option<&'a Garment> {
    if items.is_empty() {
        return None;
    }
    let index = picker.pick(items.len()).min(items.len() - 1);
    Some(items[index])
}

/// Format a temperature the way it appears in reasoning text ("45", "61.5").
fn temp(temperature_f: f64) -> String {
    format!("{temperature_f}")
}

/// Join reasoning sentences with ". " and make sure the result ends with a
/// period.
pub fn join_reasoning(parts: &[String]) -> String {
    let mut text = parts.join(". ");
    if !text.is_empty() && !text.ends_with('.') {
        text.push('.');
    }
    text
}

/// Compose today's outfit from `garments` for the given weather.
pub fn compose_daily_outfit(
    garments: &[Garment],
    weather: &WeatherReport,
    picker: &mut impl Picker,
) -> OutfitSelection {
    if garments.is_empty() {
        return OutfitSelection::empty_wardrobe();
    }

    let wardrobe = CategorizedWardrobe::new(garments);
    let t = weather.temperature_f;
    let band = WeatherBand::for_temperature(t);
    let mut reasons = Vec::new();

    let (top, bottom, outerwear) = match band {
        WeatherBand::Cold => {
            let outerwear = match pick_from(&wardrobe.outerwear, picker) {
                Some(g) => {
                    reasons.push(format!(
                        "It's chilly at {}°F, so we've layered this outfit with your {} for warmth",
                        temp(t),
                        g.item_name
                    ));
                    SlotFill::Chosen(g.detail())
                }
                None => {
                    reasons.push(
                        "Cold weather detected but you don't have outerwear in your wardrobe yet"
                            .to_string(),
                    );
                    SlotFill::unmet("Warm layer needed")
                }
            };
            let top = pick_from(&wardrobe.tops, picker)
                .map(|g| SlotFill::Chosen(g.detail()))
                .unwrap_or_else(|| SlotFill::unmet("Warm top needed"));
            let bottom = pick_from(&wardrobe.bottoms, picker)
                .map(|g| SlotFill::Chosen(g.detail()))
                .unwrap_or_else(|| SlotFill::unmet("Warm bottom needed"));
            (top, bottom, outerwear)
        }
        WeatherBand::Moderate => {
            let top = match pick_from(&wardrobe.tops, picker) {
                Some(g) => {
                    reasons.push(format!("Perfect {}°F weather for your {}", temp(t), g.item_name));
                    SlotFill::Chosen(g.detail())
                }
                None => SlotFill::unmet("Moderate weather top needed"),
            };
            let bottom = pick_from(&wardrobe.bottoms, picker)
                .map(|g| SlotFill::Chosen(g.detail()))
                .unwrap_or_else(|| SlotFill::unmet("Moderate weather bottom needed"));
            let layer = if t < LAYER_BELOW_F {
                pick_from(&wardrobe.outerwear, picker)
            } else {
                None
            };
            let outerwear = match layer {
                Some(g) => {
                    reasons.push(format!("Added your {} for an extra layer", g.item_name));
                    SlotFill::Chosen(g.detail())
                }
                _ => SlotFill::unmet("None needed"),
            };
            (top, bottom, outerwear)
        }
        WeatherBand::Hot => {
            let top = match pick_from(&wardrobe.tops, picker) {
                Some(g) => {
                    reasons.push(format!("Warm {}°F day calls for your {}", temp(t), g.item_name));
                    SlotFill::Chosen(g.detail())
                }
                None => SlotFill::unmet("Light top needed"),
            };
            let bottom = pick_from(&wardrobe.bottoms, picker)
                .map(|g| SlotFill::Chosen(g.detail()))
                .unwrap_or_else(|| SlotFill::unmet("Light bottom needed"));
            reasons.push("No jacket needed in this warm weather".to_string());
            (top, bottom, SlotFill::unmet("None needed"))
        }
    };

    debug!(
        temperature_f = t,
        ?band,
        top = top.label(),
        bottom = bottom.label(),
        outerwear = outerwear.label(),
        "Daily outfit composed"
    );

    OutfitSelection {
        top,
        bottom,
        outerwear,
        reasoning: join_reasoning(&reasons),
        weather: weather.context(),
        wardrobe_count: garments.len(),
        categories_available: wardrobe.categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::ScriptedPicker;

    fn g(name: &str, category: Category) -> Garment {
        Garment::new("u1", name, "", category)
    }

    #[test]
    fn bands_split_at_fifty_and_seventy() {
        assert_eq!(WeatherBand::for_temperature(49.9), WeatherBand::Cold);
        assert_eq!(WeatherBand::for_temperature(50.0), WeatherBand::Moderate);
        assert_eq!(WeatherBand::for_temperature(69.9), WeatherBand::Moderate);
        assert_eq!(WeatherBand::for_temperature(70.0), WeatherBand::Hot);
    }

    #[test]
    fn cold_without_outerwear_or_bottoms() {
        let items = vec![g("Wool Sweater", Category::Tops)];
        let outfit = compose_daily_outfit(
            &items,
            &WeatherReport::new(45.0, "cloudy"),
            &mut ScriptedPicker::first(),
        );

        assert_eq!(outfit.outerwear, SlotFill::unmet("Warm layer needed"));
        assert_eq!(outfit.top.label(), "Wool Sweater");
        assert_eq!(outfit.bottom, SlotFill::unmet("Warm bottom needed"));
        assert_eq!(
            outfit.reasoning,
            "Cold weather detected but you don't have outerwear in your wardrobe yet."
        );
        assert_eq!(outfit.weather, "45°F, cloudy");
        assert_eq!(outfit.wardrobe_count, 1);
        assert_eq!(outfit.categories_available, BTreeSet::from([Category::Tops]));
    }

    #[test]
    fn cold_with_empty_tops_prompts_for_warm_top() {
        let items = vec![g("Parka", Category::Outerwear), g("Cords", Category::Bottoms)];
        let outfit = compose_daily_outfit(
            &items,
            &WeatherReport::new(30.0, "snow"),
            &mut ScriptedPicker::first(),
        );
        assert_eq!(outfit.top, SlotFill::unmet("Warm top needed"));
        assert_eq!(outfit.outerwear.label(), "Parka");
        assert_eq!(
            outfit.reasoning,
            "It's chilly at 30°F, so we've layered this outfit with your Parka for warmth."
        );
    }

    #[test]
    fn cold_picks_outerwear_then_top_then_bottom() {
        let items = vec![
            g("Tee", Category::Tops),
            g("Sweater", Category::Tops),
            g("Jeans", Category::Bottoms),
            g("Cords", Category::Bottoms),
            g("Parka", Category::Outerwear),
            g("Peacoat", Category::Outerwear),
        ];
        let mut picker = ScriptedPicker::new(vec![1, 0, 1]);
        let outfit = compose_daily_outfit(&items, &WeatherReport::new(40.0, "windy"), &mut picker);
        assert_eq!(outfit.outerwear.label(), "Peacoat");
        assert_eq!(outfit.top.label(), "Tee");
        assert_eq!(outfit.bottom.label(), "Cords");
    }

    #[test]
    fn moderate_adds_layer_only_below_sixty_five() {
        let items = vec![
            g("Polo", Category::Tops),
            g("Chinos", Category::Bottoms),
            g("Light Jacket", Category::Outerwear),
        ];

        let cool = compose_daily_outfit(
            &items,
            &WeatherReport::new(60.0, "overcast"),
            &mut ScriptedPicker::first(),
        );
        assert_eq!(cool.outerwear.label(), "Light Jacket");
        assert_eq!(
            cool.reasoning,
            "Perfect 60°F weather for your Polo. Added your Light Jacket for an extra layer."
        );

        let mild = compose_daily_outfit(
            &items,
            &WeatherReport::new(66.0, "clear"),
            &mut ScriptedPicker::first(),
        );
        assert_eq!(mild.outerwear, SlotFill::unmet("None needed"));
        assert_eq!(mild.reasoning, "Perfect 66°F weather for your Polo.");
    }

    #[test]
    fn moderate_layer_cutoff_is_exclusive() {
        let items = vec![
            g("Polo", Category::Tops),
            g("Light Jacket", Category::Outerwear),
        ];
        let outfit = compose_daily_outfit(
            &items,
            &WeatherReport::new(65.0, "breezy"),
            &mut ScriptedPicker::first(),
        );
        assert_eq!(outfit.outerwear, SlotFill::unmet("None needed"));
        assert_eq!(outfit.reasoning, "Perfect 65°F weather for your Polo.");
    }

    #[test]
    fn moderate_unmet_prompts() {
        let items = vec![g("Scarf", Category::Accessories)];
        let outfit = compose_daily_outfit(
            &items,
            &WeatherReport::new(55.0, "fog"),
            &mut ScriptedPicker::first(),
        );
        assert_eq!(outfit.top, SlotFill::unmet("Moderate weather top needed"));
        assert_eq!(outfit.bottom, SlotFill::unmet("Moderate weather bottom needed"));
        assert_eq!(outfit.outerwear, SlotFill::unmet("None needed"));
        assert_eq!(outfit.reasoning, "");
    }

    #[test]
    fn hot_never_chooses_outerwear() {
        let items = vec![
            g("Linen Shirt", Category::Tops),
            g("Parka", Category::Outerwear),
        ];
        let outfit = compose_daily_outfit(
            &items,
            &WeatherReport::new(88.5, "hot, clear sky"),
            &mut ScriptedPicker::first(),
        );
        assert_eq!(outfit.outerwear, SlotFill::unmet("None needed"));
        assert_eq!(outfit.bottom, SlotFill::unmet("Light bottom needed"));
        assert_eq!(
            outfit.reasoning,
            "Warm 88.5°F day calls for your Linen Shirt. No jacket needed in this warm weather."
        );
    }

    #[test]
    fn dresses_are_counted_but_not_worn() {
        let items = vec![g("Sundress", Category::Dresses)];
        let outfit = compose_daily_outfit(
            &items,
            &WeatherReport::new(80.0, "sunny"),
            &mut ScriptedPicker::first(),
        );
        assert_eq!(outfit.top, SlotFill::unmet("Light top needed"));
        assert!(outfit.categories_available.contains(&Category::Dresses));
    }

    #[test]
    fn empty_wardrobe_placeholder() {
        let outfit = compose_daily_outfit(
            &[],
            &WeatherReport::new(72.0, "clear"),
            &mut ScriptedPicker::first(),
        );
        assert_eq!(outfit, OutfitSelection::empty_wardrobe());
        assert_eq!(outfit.reasoning, "No wardrobe items found");
        assert_eq!(outfit.weather, "Unknown");
        assert_eq!(outfit.top.label(), "Add items to your wardrobe");
    }

    #[test]
    fn join_reasoning_adds_single_trailing_period() {
        assert_eq!(join_reasoning(&[]), "");
        assert_eq!(join_reasoning(&["One".into(), "Two".into()]), "One. Two.");
        assert_eq!(join_reasoning(&["Done.".into()]), "Done.");
    }

    #[test]
    fn slot_serializes_with_status_tag() {
        let json = serde_json::to_value(SlotFill::unmet("None needed")).unwrap();
        assert_eq!(json["status"], "unmet");
        assert_eq!(json["prompt"], "None needed");
    }
}
