use serde::{Deserialize, Serialize};

use crate::application::ports::places_search::LawyerPlace;

#[derive(Debug, Deserialize)]
pub struct FindLawyersRequestDto {
    pub lat: f64,
    pub lon: f64,
    pub radius: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct LawyerDto {
    pub name: String,
    pub address: String,
    pub distance_meters: Option<f64>,
    pub lat: f64,
    pub lon: f64,
}

impl From<LawyerPlace> for LawyerDto {
    fn from(place: LawyerPlace) -> Self {
        Self {
            name: place.name,
            address: place.address,
            distance_meters: place.distance_meters,
            lat: place.lat,
            lon: place.lon,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FindLawyersResponseDto {
    pub lawyers: Vec<LawyerDto>,
}
