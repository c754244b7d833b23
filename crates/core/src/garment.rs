//! Garment — a single wardrobe inventory record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Clothing category. Ordering follows the declaration order, which is also
/// the order categories are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Tops,
        Category::Bottoms,
        Category::Dresses,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Dresses => "Dresses",
            Category::Outerwear => "Outerwear",
            Category::Shoes => "Shoes",
            Category::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive; accepts the singular form too ("top", "Shoe",
    /// "accessory").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let ies = lower.strip_suffix('y').map(|stem| format!("{stem}ies"));
        Category::ALL
            .into_iter()
            .find(|c| {
                let name = c.as_str().to_lowercase();
                name == lower
                    || name == format!("{lower}s")
                    || name == format!("{lower}es")
                    || ies.as_deref() == Some(name.as_str())
            })
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// A wardrobe item as stored by the repository.
///
/// The stylist only ever reads garments; the repository owns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garment {
    /// Unique ID (assigned by the repository when empty)
    #[serde(default)]
    pub id: String,

    /// Owner of this garment
    pub owner_id: String,

    /// User-entered name, e.g. "Navy Blazer"
    pub item_name: String,

    /// Free-text description (color, material, fit...)
    #[serde(default)]
    pub description: String,

    pub category: Category,

    /// Reference to the stored image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Garment {
    /// Create a garment with no id and no image, stamped now.
    pub fn new(
        owner_id: impl Into<String>,
        item_name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: String::new(),
            owner_id: owner_id.into(),
            item_name: item_name.into(),
            description: description.into(),
            category,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// The slice of the garment shown in an outfit slot.
    pub fn detail(&self) -> GarmentDetail {
        GarmentDetail {
            name: self.item_name.clone(),
            image_url: self.image_url.clone(),
            description: self.description.clone(),
        }
    }
}

/// Display fields of a chosen garment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentDetail {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("tops".parse::<Category>().unwrap(), Category::Tops);
        assert_eq!("Outerwear".parse::<Category>().unwrap(), Category::Outerwear);
        assert_eq!("shoe".parse::<Category>().unwrap(), Category::Shoes);
        assert_eq!("Dress".parse::<Category>().unwrap(), Category::Dresses);
        assert!("hats".parse::<Category>().is_err());
    }

    #[test]
    fn category_parses_y_singular_of_ies_plural() {
        assert_eq!("accessory".parse::<Category>().unwrap(), Category::Accessories);
        assert_eq!("Accessory".parse::<Category>().unwrap(), Category::Accessories);
        assert_eq!("accessories".parse::<Category>().unwrap(), Category::Accessories);
        assert!("y".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_as_plural_name() {
        let json = serde_json::to_string(&Category::Bottoms).unwrap();
        assert_eq!(json, "\"Bottoms\"");
    }

    #[test]
    fn garment_serialization_skips_missing_image() {
        let garment = Garment::new("u1", "Oxford Shirt", "cotton button-down", Category::Tops);
        let json = serde_json::to_string(&garment).unwrap();
        assert!(json.contains("Oxford Shirt"));
        assert!(!json.contains("image_url"));

        let parsed: Garment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, garment);
    }

    #[test]
    fn detail_copies_display_fields() {
        let garment = Garment::new("u1", "Rain Shell", "waterproof", Category::Outerwear)
            .with_image("https://img/shell.png");
        let detail = garment.detail();
        assert_eq!(detail.name, "Rain Shell");
        assert_eq!(detail.image_url.as_deref(), Some("https://img/shell.png"));
    }
}
