//! Stylist service — the request-facing facade.
//!
//! Wires the garment repository, weather source, and rate limiter to the
//! pure recommendation functions. Every request except the local
//! `wardrobe`/`tips` helpers is admitted through the limiter first.

use std::sync::Arc;

use outfitter_config::{AppConfig, StylistConfig};
use outfitter_core::{
    Error, Garment, GarmentRepository, Result, Style, WardrobeError, WeatherError, WeatherReport,
    WeatherSource,
};
use outfitter_security::RateLimiter;
use tracing::{error, info, warn};

use crate::composer::{OutfitSelection, compose_daily_outfit};
use crate::occasions::OccasionTable;
use crate::picker::{Picker, RandomPicker};
use crate::resolver::resolve;
use crate::suggestions::{SuggestionSet, build_suggestions, weather_context};
use crate::tips::generate_tips;

pub struct Stylist {
    wardrobe: Arc<dyn GarmentRepository>,
    weather: Arc<dyn WeatherSource>,
    limiter: Arc<RateLimiter>,
    occasions: OccasionTable,
    config: StylistConfig,
    fallback_weather: WeatherReport,
}

impl Stylist {
    pub fn new(
        wardrobe: Arc<dyn GarmentRepository>,
        weather: Arc<dyn WeatherSource>,
        limiter: Arc<RateLimiter>,
    ) -> Self {
        Self {
            wardrobe,
            weather,
            limiter,
            occasions: OccasionTable::builtin(),
            config: StylistConfig::default(),
            fallback_weather: WeatherReport::new(70.0, "moderate"),
        }
    }

    /// Build a stylist with limits, occasion overrides, and fallback weather
    /// taken from the application config.
    pub fn from_config(
        config: &AppConfig,
        wardrobe: Arc<dyn GarmentRepository>,
        weather: Arc<dyn WeatherSource>,
    ) -> Self {
        Self {
            wardrobe,
            weather,
            limiter: Arc::new(RateLimiter::from_config(&config.rate_limit)),
            occasions: OccasionTable::with_overrides(&config.occasions),
            config: config.stylist.clone(),
            fallback_weather: WeatherReport::new(
                config.weather.fallback_temperature_f,
                config.weather.fallback_description.clone(),
            ),
        }
    }

    pub fn occasions(&self) -> &OccasionTable {
        &self.occasions
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    fn admit(&self, client: &str) -> Result<()> {
        if self.limiter.check(client) {
            Ok(())
        } else {
            Err(Error::RateLimited {
                client: client.to_string(),
            })
        }
    }

    /// Today's outfit for `owner`, using a fresh random picker.
    pub async fn outfit_of_the_day(
        &self,
        client: &str,
        owner: &str,
        location: &str,
    ) -> Result<OutfitSelection> {
        let mut picker = RandomPicker::from_entropy();
        self.outfit_of_the_day_with(client, owner, location, &mut picker)
            .await
    }

    /// Same as [`Stylist::outfit_of_the_day`] with a caller-supplied picker.
    pub async fn outfit_of_the_day_with(
        &self,
        client: &str,
        owner: &str,
        location: &str,
        picker: &mut (impl Picker + Send),
    ) -> Result<OutfitSelection> {
        self.admit(client)?;

        let garments = self.wardrobe.list_by_owner(owner).await?;
        if garments.is_empty() {
            info!(owner, "Empty wardrobe, returning placeholder outfit");
            return Ok(OutfitSelection::empty_wardrobe());
        }

        let report = match self.weather.current(location).await {
            Ok(report) if report.temperature_f.is_finite() => report,
            Ok(report) => {
                warn!(
                    location,
                    source = self.weather.name(),
                    temperature_f = report.temperature_f,
                    "Weather source returned an unusable temperature, using fallback"
                );
                self.fallback_weather.clone()
            }
            Err(e) => {
                warn!(
                    location,
                    source = self.weather.name(),
                    error = %e,
                    "Weather lookup failed, using fallback"
                );
                self.fallback_weather.clone()
            }
        };

        let outfit = compose_daily_outfit(&garments, &report, picker);
        info!(
            owner,
            temperature_f = report.temperature_f,
            items = garments.len(),
            "Outfit of the day composed"
        );
        Ok(outfit)
    }

    /// Occasion suggestions for `owner`, optionally weather-aware.
    pub async fn suggest(
        &self,
        client: &str,
        owner: &str,
        occasions: &[String],
        location: Option<&str>,
    ) -> Result<SuggestionSet> {
        self.admit(client)?;

        let garments = self.wardrobe.list_by_owner(owner).await?;
        if garments.is_empty() {
            return Err(WardrobeError::EmptyInventory(owner.to_string()).into());
        }

        let context = match location {
            Some(location) => {
                let report = self.weather.current(location).await;
                if let Err(e) = &report {
                    warn!(location, error = %e, "Weather lookup failed for suggestions");
                }
                weather_context(Some(&report))
            }
            None => weather_context::<WeatherError>(None),
        };

        let set = build_suggestions(
            &garments,
            occasions,
            &context,
            location.is_some(),
            &self.occasions,
            self.config.max_items_per_suggestion,
        )?;
        info!(
            owner,
            requested = occasions.len(),
            built = set.suggestions.len(),
            "Suggestions built"
        );
        Ok(set)
    }

    /// Resolve a free-text garment reference for `owner`.
    pub async fn find_garment(&self, client: &str, owner: &str, query: &str) -> Result<Garment> {
        self.admit(client)?;

        let garments = self.wardrobe.list_by_owner(owner).await?;
        match resolve(query, &garments) {
            Ok(garment) => Ok(garment.clone()),
            Err(e) => {
                if let WardrobeError::NotFound { available, .. } = &e {
                    error!(owner, query, ?available, "Garment not found in wardrobe");
                }
                Err(e.into())
            }
        }
    }

    /// Every garment `owner` has, in storage order.
    pub async fn wardrobe(&self, owner: &str) -> Result<Vec<Garment>> {
        Ok(self.wardrobe.list_by_owner(owner).await?)
    }

    pub fn tips(&self, style: Style, weather_description: &str) -> Vec<String> {
        generate_tips(style, weather_description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use outfitter_core::Category;
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::picker::ScriptedPicker;

    struct VecRepo(Mutex<Vec<Garment>>);

    #[async_trait]
    impl GarmentRepository for VecRepo {
        fn name(&self) -> &str {
            "vec"
        }

        async fn list_by_owner(&self, owner_id: &str) -> std::result::Result<Vec<Garment>, WardrobeError> {
            Ok(self
                .0
                .lock()
                .unwrap()
                .iter()
                .filter(|g| g.owner_id == owner_id)
                .cloned()
                .collect())
        }

        async fn add(&self, garment: Garment) -> std::result::Result<String, WardrobeError> {
            let id = garment.id.clone();
            self.0.lock().unwrap().push(garment);
            Ok(id)
        }

        async fn remove(&self, _owner_id: &str, _id: &str) -> std::result::Result<bool, WardrobeError> {
            Ok(false)
        }
    }

    struct Weather(std::result::Result<WeatherReport, WeatherError>);

    #[async_trait]
    impl WeatherSource for Weather {
        fn name(&self) -> &str {
            "test"
        }

        async fn current(&self, _location: &str) -> std::result::Result<WeatherReport, WeatherError> {
            self.0.clone()
        }
    }

    fn stylist(garments: Vec<Garment>, weather: Weather, max_requests: usize) -> Stylist {
        Stylist::new(
            Arc::new(VecRepo(Mutex::new(garments))),
            Arc::new(weather),
            Arc::new(RateLimiter::new(max_requests, Duration::from_secs(60))),
        )
    }

    fn sunny() -> Weather {
        Weather(Ok(WeatherReport::new(75.0, "sunny")))
    }

    fn basics() -> Vec<Garment> {
        vec![
            Garment::new("ana", "Linen Shirt", "white", Category::Tops),
            Garment::new("ana", "Chinos", "beige", Category::Bottoms),
            Garment::new("ben", "Parka", "down", Category::Outerwear),
        ]
    }

    #[tokio::test]
    async fn weather_failure_falls_back_to_moderate() {
        let stylist = stylist(
            basics(),
            Weather(Err(WeatherError::Unavailable("down".into()))),
            10,
        );
        let outfit = stylist
            .outfit_of_the_day_with("c1", "ana", "Paris", &mut ScriptedPicker::first())
            .await
            .unwrap();
        assert_eq!(outfit.weather, "70°F, moderate");
        assert_eq!(outfit.top.label(), "Linen Shirt");
        assert_eq!(
            outfit.reasoning,
            "Warm 70°F day calls for your Linen Shirt. No jacket needed in this warm weather."
        );
    }

    #[tokio::test]
    async fn non_finite_reading_falls_back_to_moderate() {
        let stylist = stylist(basics(), Weather(Ok(WeatherReport::new(f64::NAN, "x"))), 10);
        let outfit = stylist
            .outfit_of_the_day_with("c1", "ana", "Paris", &mut ScriptedPicker::first())
            .await
            .unwrap();
        assert_eq!(outfit.weather, "70°F, moderate");
        assert!(!outfit.reasoning.contains("NaN"));
    }

    #[tokio::test]
    async fn empty_wardrobe_gets_placeholder() {
        let stylist = stylist(basics(), sunny(), 10);
        let outfit = stylist.outfit_of_the_day("c1", "zoe", "Paris").await.unwrap();
        assert_eq!(outfit.reasoning, "No wardrobe items found");
    }

    #[tokio::test]
    async fn requests_over_the_limit_are_rejected() {
        let stylist = stylist(basics(), sunny(), 2);
        assert!(stylist.find_garment("c1", "ana", "Chinos").await.is_ok());
        assert!(stylist.find_garment("c1", "ana", "Chinos").await.is_ok());
        let err = stylist.find_garment("c1", "ana", "Chinos").await.unwrap_err();
        assert!(matches!(err, Error::RateLimited { ref client } if client == "c1"));
        // Other clients have their own window.
        assert!(stylist.find_garment("c2", "ana", "Chinos").await.is_ok());
    }

    #[tokio::test]
    async fn find_garment_is_scoped_to_owner() {
        let stylist = stylist(basics(), sunny(), 10);
        let err = stylist.find_garment("c1", "ana", "Parka").await.unwrap_err();
        match err {
            Error::Wardrobe(WardrobeError::NotFound { available, .. }) => {
                assert_eq!(available, vec!["Linen Shirt: white", "Chinos: beige"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn suggest_requires_inventory() {
        let stylist = stylist(basics(), sunny(), 10);
        let err = stylist
            .suggest("c1", "zoe", &["casual".into()], None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Wardrobe(WardrobeError::EmptyInventory(_))));
    }

    #[tokio::test]
    async fn suggest_marks_weather_when_requested() {
        let stylist = stylist(basics(), sunny(), 10);
        let with = stylist
            .suggest("c1", "ana", &["travel".into()], Some("Rome"))
            .await
            .unwrap();
        assert!(with.suggestions[0].weather_considered);

        let without = stylist
            .suggest("c1", "ana", &["travel".into()], None)
            .await
            .unwrap();
        assert!(!without.suggestions[0].weather_considered);
    }

    #[test]
    fn tips_are_passed_through() {
        let stylist = stylist(Vec::new(), sunny(), 1);
        assert_eq!(stylist.tips(Style::Formal, "").len(), 5);
    }
}
