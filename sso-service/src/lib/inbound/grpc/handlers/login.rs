use tonic::Status;

use crate::domain::identity::models::AppId;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::ports::AuthServicePort;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S: AuthServicePort>(
    service: &S,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    let command = LoginCommand::new(request.email, request.password, AppId(request.app_id));
    let session = service.login(command).await?;

    Ok(LoginResponse {
        token: session.token,
        expires_at: session.expires_at.timestamp(),
    })
}
