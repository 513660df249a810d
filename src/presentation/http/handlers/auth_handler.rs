use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::application::use_cases::login::LoginRequest;
use crate::application::use_cases::signup::{SignupError, SignupRequest};
use crate::application::use_cases::{LoginUseCase, SignupUseCase};
use crate::presentation::http::dto::{
    ErrorResponseDto, LoginRequestDto, LoginResponseDto, SignupRequestDto, SignupResponseDto,
};

pub struct AuthHandler {
    signup_use_case: Arc<SignupUseCase>,
    login_use_case: Arc<LoginUseCase>,
}

impl AuthHandler {
    pub fn new(signup_use_case: Arc<SignupUseCase>, login_use_case: Arc<LoginUseCase>) -> Self {
        Self {
            signup_use_case,
            login_use_case,
        }
    }

    pub async fn signup(
        State(handler): State<Arc<AuthHandler>>,
        Json(body): Json<SignupRequestDto>,
    ) -> impl IntoResponse {
        let request = SignupRequest {
            username: body.username,
            password: body.password,
        };

        match handler.signup_use_case.execute(request).await {
            Ok(response) => (
                StatusCode::CREATED,
                Json(SignupResponseDto {
                    message: "User registered successfully".to_string(),
                    user_id: response.user_id,
                }),
            )
                .into_response(),
            Err(e) => {
                let status = match e {
                    SignupError::UsernameTaken(_) => StatusCode::CONFLICT,
                    SignupError::InvalidEmail | SignupError::WeakPassword(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, Json(ErrorResponseDto::new(e.to_string()))).into_response()
            }
        }
    }

    pub async fn login(
        State(handler): State<Arc<AuthHandler>>,
        Json(body): Json<LoginRequestDto>,
    ) -> impl IntoResponse {
        let request = LoginRequest {
            username: body.username,
            password: body.password,
        };

        match handler.login_use_case.execute(request).await {
            Ok(response) => {
                (StatusCode::OK, Json(LoginResponseDto::from(response))).into_response()
            }
            Err(e) => {
                use crate::application::use_cases::login::LoginError;
                let status = match e {
                    LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, Json(ErrorResponseDto::new(e.to_string()))).into_response()
            }
        }
    }
}
