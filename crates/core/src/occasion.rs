//! Occasion profile — the rule set describing what "good" means for an
//! occasion.

use crate::garment::Category;
use crate::style::Style;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccasionProfile {
    /// Stable key, e.g. "business"
    pub id: String,

    pub style: Style,

    pub required_categories: Vec<Category>,

    #[serde(default)]
    pub optional_categories: Vec<Category>,

    /// Color tags such as "neutral", "professional", "romantic"
    #[serde(default)]
    pub color_preferences: Vec<String>,

    /// Human-readable description shown with a suggestion
    #[serde(default)]
    pub description: String,

    /// Keyword fragments penalized for this occasion
    #[serde(default)]
    pub inappropriate_items: Vec<String>,

    /// Keyword fragments rewarded for this occasion
    #[serde(default)]
    pub preferred_items: Vec<String>,
}
