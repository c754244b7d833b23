//! Garment resolver — maps a free-text reference like "my blue jacket" to a
//! single inventory record.
//!
//! Match tiers run in order and the first tier with any hit wins; within a
//! tier the earliest garment (repository order) is returned:
//!
//! 1. exact, case-sensitive item name
//! 2. case-insensitive substring of the item name
//! 3. per word (longer than 3 characters, query order) substring of the
//!    item name, stopping at the first word with a hit
//! 4. case-insensitive substring of the description

use outfitter_core::{Garment, WardrobeError};
use tracing::debug;

const MIN_WORD_LEN: usize = 3;

/// Resolve `query` against an owner's garments.
pub fn resolve<'a>(query: &str, garments: &'a [Garment]) -> Result<&'a Garment, WardrobeError> {
    let needle = query.to_lowercase();

    let found = exact_name(query, garments)
        .map(|g| (1, g))
        .or_else(|| name_contains(&needle, garments).map(|g| (2, g)))
        .or_else(|| word_in_name(&needle, garments).map(|g| (3, g)))
        .or_else(|| description_contains(&needle, garments).map(|g| (4, g)));

    match found {
        Some((tier, garment)) => {
            debug!(query, tier, item = %garment.item_name, "Garment resolved");
            Ok(garment)
        }
        None => Err(WardrobeError::NotFound {
            query: query.to_string(),
            available: garments
                .iter()
                .map(|g| format!("{}: {}", g.item_name, g.description))
                .collect(),
        }),
    }
}

fn exact_name<'a>(query: &str, garments: &'a [Garment]) -> Option<&'a Garment> {
    garments.iter().find(|g| g.item_name == query)
}

fn name_contains<'a>(needle: &str, garments: &'a [Garment]) -> Option<&'a Garment> {
    garments
        .iter()
        .find(|g| g.item_name.to_lowercase().contains(needle))
}

fn word_in_name<'a>(needle: &str, garments: &'a [Garment]) -> Option<&'a Garment> {
    needle
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_WORD_LEN)
        .find_map(|word| name_contains(word, garments))
}

fn description_contains<'a>(needle: &str, garments: &'a [Garment]) -> Option<&'a Garment> {
    garments
        .iter()
        .find(|g| g.description.to_lowercase().contains(needle))
}
