//! Occasion profile table.
//!
//! The built-in table is compiled in; configuration may add occasions or
//! replace built-in ones by id. Once built, a table is never mutated.

use std::sync::LazyLock;

use outfitter_core::{Category, OccasionProfile, Style, WardrobeError};

use Category::{Accessories, Bottoms, Outerwear, Shoes, Tops};

static BUILTIN: LazyLock<Vec<OccasionProfile>> = LazyLock::new(|| {
    vec![
        profile(
            "business",
            Style::Formal,
            &[Tops, Bottoms],
            &[Outerwear, Shoes],
            &["neutral", "professional"],
            "Professional business attire suitable for meetings and office environments",
            &["shorts", "jeans", "t-shirts", "sweatshirts", "cargo pants"],
            &["dress pants", "slacks", "chinos", "button-down shirts", "polo shirts", "blazers"],
        ),
        profile(
            "date",
            Style::Elegant,
            &[Tops, Bottoms],
            &[Outerwear, Shoes, Accessories],
            &["romantic", "stylish"],
            "Elegant and attractive outfit perfect for romantic evenings",
            &["shorts", "cargo pants", "sweatshirts", "workout clothes"],
            &["dress pants", "chinos", "button-down shirts", "polo shirts", "blazers"],
        ),
        profile(
            "casual",
            Style::Comfortable,
            &[Tops, Bottoms],
            &[Outerwear, Shoes],
            &["versatile", "comfortable"],
            "Comfortable and stylish casual wear for everyday activities",
            &["suit jackets", "dress pants"],
            &["jeans", "chinos", "polo shirts", "t-shirts", "sweatshirts"],
        ),
        profile(
            "weekend",
            Style::Relaxed,
            &[Tops, Bottoms],
            &[Outerwear, Shoes],
            &["casual", "comfortable"],
            "Relaxed weekend wear for leisure activities and social gatherings",
            &["suit jackets", "dress pants", "formal shirts"],
            &["jeans", "chinos", "polo shirts", "t-shirts", "sweatshirts"],
        ),
        profile(
            "evening",
            Style::Sophisticated,
            &[Tops, Bottoms],
            &[Outerwear, Shoes, Accessories],
            &["elegant", "dramatic"],
            "Sophisticated evening wear for formal events and special occasions",
            &["shorts", "cargo pants", "sweatshirts", "workout clothes"],
            &["dress pants", "slacks", "button-down shirts", "polo shirts", "blazers"],
        ),
        profile(
            "workout",
            Style::Athletic,
            &[Tops, Bottoms],
            &[Shoes, Accessories],
            &["energetic", "comfortable"],
            "Performance athletic wear for gym workouts and physical activities",
            &["dress pants", "blazers", "formal shirts", "dress shoes"],
            &["athletic shorts", "workout pants", "performance shirts", "tank tops"],
        ),
        profile(
            "travel",
            Style::Versatile,
            &[Tops, Bottoms],
            &[Outerwear, Shoes],
            &["versatile", "comfortable"],
            "Versatile travel wear that is comfortable and easy to mix and match",
            &["suit jackets", "formal dress pants"],
            &["chinos", "jeans", "polo shirts", "button-down shirts", "blazers"],
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn profile(
    id: &str,
    style: Style,
    required: &[Category],
    optional: &[Category],
    colors: &[&str],
    description: &str,
    inappropriate: &[&str],
    preferred: &[&str],
) -> OccasionProfile {
    let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
    OccasionProfile {
        id: id.into(),
        style,
        required_categories: required.to_vec(),
        optional_categories: optional.to_vec(),
        color_preferences: owned(colors),
        description: description.into(),
        inappropriate_items: owned(inappropriate),
        preferred_items: owned(preferred),
    }
}

/// Lookup table from occasion id to profile, in a stable order.
#[derive(Debug, Clone)]
pub struct OccasionTable {
    profiles: Vec<OccasionProfile>,
}

impl OccasionTable {
    /// The seven built-in occasions:
    /// `business, date, casual, weekend, evening, workout, travel`.
    pub fn builtin() -> Self {
        Self {
            profiles: BUILTIN.clone(),
        }
    }

    /// Built-in table with `overrides` merged in. An override whose id
    /// matches a built-in occasion replaces it in place; new ids are appended.
    pub fn with_overrides(overrides: &[OccasionProfile]) -> Self {
        let mut table = Self::builtin();
        for profile in overrides {
            match table.profiles.iter_mut().find(|p| p.id == profile.id) {
                Some(existing) => *existing = profile.clone(),
                None => table.profiles.push(profile.clone()),
            }
        }
        table
    }

    pub fn get(&self, id: &str) -> Option<&OccasionProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Like [`get`](Self::get), but an unknown id is an error.
    pub fn require(&self, id: &str) -> Result<&OccasionProfile, WardrobeError> {
        self.get(id)
            .ok_or_else(|| WardrobeError::UnknownOccasion(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &OccasionProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for OccasionTable {
    fn default() -> Self {
        Self::builtin()
    }
}
