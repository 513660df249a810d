use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::services::TokenService;
use crate::application::use_cases::upload_document::{UploadDocumentError, UploadDocumentRequest};
use crate::application::use_cases::UploadDocumentUseCase;
use crate::presentation::http::auth::{AuthenticatedUser, TokenVerifier};
use crate::presentation::http::dto::{ErrorResponseDto, UploadResponseDto};

pub struct DocumentHandler {
    upload_use_case: Arc<UploadDocumentUseCase>,
    token_service: Arc<TokenService>,
}

impl TokenVerifier for DocumentHandler {
    fn token_service(&self) -> &TokenService {
        &self.token_service
    }
}

impl DocumentHandler {
    pub fn new(
        upload_use_case: Arc<UploadDocumentUseCase>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            upload_use_case,
            token_service,
        }
    }

    pub async fn upload(
        State(handler): State<Arc<DocumentHandler>>,
        AuthenticatedUser(user_id): AuthenticatedUser,
        mut multipart: Multipart,
    ) -> impl IntoResponse {
        let mut file_name = None;
        let mut data = None;

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponseDto::new(format!("Invalid upload: {}", e))),
                    )
                        .into_response();
                }
            };

            if field.name() == Some("file") {
                file_name = field.file_name().map(str::to_string);
                data = match field.bytes().await {
                    Ok(bytes) => Some(bytes.to_vec()),
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponseDto::new(format!(
                                "Could not read uploaded file: {}",
                                e
                            ))),
                        )
                            .into_response();
                    }
                };
            }
        }

        let (Some(file_name), Some(data)) = (file_name, data) else {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponseDto::new("No file part in the request")),
            )
                .into_response();
        };

        let request = UploadDocumentRequest {
            user_id,
            file_name,
            data,
        };

        match handler.upload_use_case.execute(request).await {
            Ok(response) => {
                (StatusCode::OK, Json(UploadResponseDto::from(response))).into_response()
            }
            Err(e) => {
                let status = match e {
                    UploadDocumentError::UnsupportedFileType(_)
                    | UploadDocumentError::EmptyFile
                    | UploadDocumentError::ExtractionError(_) => StatusCode::BAD_REQUEST,
                    UploadDocumentError::UserNotFound(_) => StatusCode::NOT_FOUND,
                    UploadDocumentError::RepositoryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, Json(ErrorResponseDto::new(e.to_string()))).into_response()
            }
        }
    }
}
