use std::sync::Arc;

use crate::application::ports::places_search::{LawyerPlace, PlacesError};
use crate::application::ports::PlacesProvider;

const DEFAULT_RADIUS_METERS: u32 = 5_000;

#[derive(Debug)]
pub enum FindLawyersError {
    InvalidCoordinates,
    SearchError(String),
}

impl std::fmt::Display for FindLawyersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindLawyersError::InvalidCoordinates => write!(f, "Invalid coordinates"),
            FindLawyersError::SearchError(msg) => write!(f, "Places search error: {}", msg),
        }
    }
}

impl std::error::Error for FindLawyersError {}

#[derive(Debug, Clone)]
pub struct FindLawyersRequest {
    pub lat: f64,
    pub lon: f64,
    pub radius_meters: Option<u32>,
}

pub struct FindLawyersUseCase {
    places: Arc<dyn PlacesProvider>,
}

impl FindLawyersUseCase {
    pub fn new(places: Arc<dyn PlacesProvider>) -> Self {
        Self { places }
    }

    pub async fn execute(
        &self,
        request: FindLawyersRequest,
    ) -> Result<Vec<LawyerPlace>, FindLawyersError> {
        if !(-90.0..=90.0).contains(&request.lat) || !(-180.0..=180.0).contains(&request.lon) {
            return Err(FindLawyersError::InvalidCoordinates);
        }

        let radius = request.radius_meters.unwrap_or(DEFAULT_RADIUS_METERS);
        self.places
            .find_lawyers(request.lat, request.lon, radius)
            .await
            .map_err(|e: PlacesError| FindLawyersError::SearchError(e.to_string()))
    }
}
