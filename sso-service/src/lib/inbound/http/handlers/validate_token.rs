use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::AppId;
use crate::domain::identity::models::ValidateTokenCommand;
use crate::domain::identity::models::VerifiedSession;
use crate::inbound::http::router::AppState;

pub async fn validate_token(
    State(state): State<AppState>,
    Json(body): Json<ValidateTokenRequestBody>,
) -> Result<ApiSuccess<ValidateTokenResponseData>, ApiError> {
    state
        .auth_service
        .validate_token(ValidateTokenCommand::new(body.token, AppId(body.app_id)))
        .await
        .map_err(ApiError::from)
        .map(|session| ApiSuccess::new(StatusCode::OK, session.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidateTokenRequestBody {
    #[serde(default)]
    token: String,
    #[serde(default)]
    app_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateTokenResponseData {
    pub user_id: i64,
    pub email: String,
    pub app_id: i32,
    pub expires_at: i64,
}

impl From<VerifiedSession> for ValidateTokenResponseData {
    fn from(session: VerifiedSession) -> Self {
        Self {
            user_id: session.user_id.0,
            email: session.email,
            app_id: session.app_id.0,
            expires_at: session.expires_at,
        }
    }
}
