use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum PlacesError {
    MissingApiKey,
    NetworkError(String),
    ApiError(String),
}

impl std::fmt::Display for PlacesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacesError::MissingApiKey => write!(f, "Missing places API key"),
            PlacesError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            PlacesError::ApiError(msg) => write!(f, "API error: {}", msg),
        }
    }
}

impl std::error::Error for PlacesError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LawyerPlace {
    pub name: String,
    pub address: String,
    pub distance_meters: Option<f64>,
    pub lat: f64,
    pub lon: f64,
}

/// Geographic lookup of lawyer offices near a coordinate.
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    async fn find_lawyers(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: u32,
    ) -> Result<Vec<LawyerPlace>, PlacesError>;
}
