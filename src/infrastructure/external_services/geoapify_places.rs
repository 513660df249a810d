use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::application::ports::places_search::{LawyerPlace, PlacesError};
use crate::application::ports::PlacesProvider;

const PLACES_ENDPOINT: &str = "https://api.geoapify.com/v2/places";

const LAWYER_CATEGORY: &str = "service.legal.lawyer";
const RESULT_LIMIT: usize = 20;

#[derive(Deserialize)]
struct PlacesResponse {
    features: Option<Vec<Feature>>,
}

#[derive(Deserialize)]
struct Feature {
    properties: Option<FeatureProperties>,
}

#[derive(Deserialize)]
struct FeatureProperties {
    name: Option<String>,
    formatted: Option<String>,
    distance: Option<f64>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Geoapify places lookup scoped to lawyer offices within a circle
/// around the requested coordinate.
pub struct GeoapifyPlaces {
    client: Client,
    api_key: Option<String>,
}

impl GeoapifyPlaces {
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self { client, api_key }
    }

    pub fn from_env() -> Self {
        Self::new(env::var("GEOAPIFY_API_KEY").ok())
    }

    fn feature_to_place(feature: Feature) -> Option<LawyerPlace> {
        let props = feature.properties?;
        let lat = props.lat?;
        let lon = props.lon?;
        let name = props
            .name
            .or_else(|| props.formatted.clone())
            .filter(|n| !n.trim().is_empty())?;

        Some(LawyerPlace {
            name,
            address: props.formatted.unwrap_or_default(),
            distance_meters: props.distance,
            lat,
            lon,
        })
    }
}

#[async_trait]
impl PlacesProvider for GeoapifyPlaces {
    async fn find_lawyers(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: u32,
    ) -> Result<Vec<LawyerPlace>, PlacesError> {
        let key = self.api_key.as_deref().ok_or(PlacesError::MissingApiKey)?;

        let filter = format!("circle:{},{},{}", lon, lat, radius_meters);
        let bias = format!("proximity:{},{}", lon, lat);

        let response = self
            .client
            .get(PLACES_ENDPOINT)
            .query(&[
                ("categories", LAWYER_CATEGORY),
                ("filter", filter.as_str()),
                ("bias", bias.as_str()),
                ("limit", &RESULT_LIMIT.to_string()),
                ("apiKey", key),
            ])
            .send()
            .await
            .map_err(|e| PlacesError::NetworkError(e.without_url().to_string()))?;

        if !response.status().is_success() {
            return Err(PlacesError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let parsed: PlacesResponse = response
            .json()
            .await
            .map_err(|e| PlacesError::ApiError(e.to_string()))?;

        Ok(parsed
            .features
            .into_iter()
            .flatten()
            .filter_map(Self::feature_to_place)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_maps_to_place() {
        let feature = Feature {
            properties: Some(FeatureProperties {
                name: Some("Sharma & Associates".to_string()),
                formatted: Some("12 Court Road, New Delhi".to_string()),
                distance: Some(420.0),
                lat: Some(28.61),
                lon: Some(77.21),
            }),
        };
        let place = GeoapifyPlaces::feature_to_place(feature).unwrap();
        assert_eq!(place.name, "Sharma & Associates");
        assert_eq!(place.distance_meters, Some(420.0));
    }

    #[test]
    fn test_feature_without_coordinates_is_dropped() {
        let feature = Feature {
            properties: Some(FeatureProperties {
                name: Some("No Coords LLP".to_string()),
                formatted: None,
                distance: None,
                lat: None,
                lon: None,
            }),
        };
        assert!(GeoapifyPlaces::feature_to_place(feature).is_none());
    }

    #[tokio::test]
    async fn test_missing_key_is_an_error() {
        let places = GeoapifyPlaces::new(None);
        let result = places.find_lawyers(28.61, 77.21, 5000).await;
        assert!(matches!(result, Err(PlacesError::MissingApiKey)));
    }
}
