use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::application::use_cases::find_lawyers::{FindLawyersError, FindLawyersRequest};
use crate::application::use_cases::FindLawyersUseCase;
use crate::presentation::http::dto::{
    ErrorResponseDto, FindLawyersRequestDto, FindLawyersResponseDto, LawyerDto,
};

pub struct LawyerHandler {
    find_use_case: Arc<FindLawyersUseCase>,
}

impl LawyerHandler {
    pub fn new(find_use_case: Arc<FindLawyersUseCase>) -> Self {
        Self { find_use_case }
    }

    pub async fn find_lawyers(
        State(handler): State<Arc<LawyerHandler>>,
        Json(body): Json<FindLawyersRequestDto>,
    ) -> impl IntoResponse {
        let request = FindLawyersRequest {
            lat: body.lat,
            lon: body.lon,
            radius_meters: body.radius,
        };

        match handler.find_use_case.execute(request).await {
            Ok(places) => {
                let lawyers = places.into_iter().map(LawyerDto::from).collect();
                (StatusCode::OK, Json(FindLawyersResponseDto { lawyers })).into_response()
            }
            Err(e) => {
                let status = match e {
                    FindLawyersError::InvalidCoordinates => StatusCode::BAD_REQUEST,
                    FindLawyersError::SearchError(_) => StatusCode::BAD_GATEWAY,
                };
                (status, Json(ErrorResponseDto::new(e.to_string()))).into_response()
            }
        }
    }
}
