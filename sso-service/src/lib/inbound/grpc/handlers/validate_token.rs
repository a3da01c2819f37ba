use tonic::Status;

use crate::domain::identity::models::AppId;
use crate::domain::identity::models::ValidateTokenCommand;
use crate::domain::identity::ports::AuthServicePort;
use crate::proto::ValidateTokenRequest;
use crate::proto::ValidateTokenResponse;

pub async fn validate_token<S: AuthServicePort>(
    service: &S,
    request: ValidateTokenRequest,
) -> Result<ValidateTokenResponse, Status> {
    let session = service
        .validate_token(ValidateTokenCommand::new(
            request.token,
            AppId(request.app_id),
        ))
        .await?;

    Ok(ValidateTokenResponse {
        user_id: session.user_id.0,
        email: session.email,
        app_id: session.app_id.0,
        expires_at: session.expires_at,
    })
}
