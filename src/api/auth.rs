use tracing::{info, instrument};

use crate::client::ApiClient;
use crate::error::RequestError;
use crate::models::{LoginReqDto, LoginResponse};

/// `POST /api/auth/login`. Does not touch the session; the caller decides
/// what to persist.
#[instrument(skip(client, password))]
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<LoginResponse, RequestError> {
    let req = LoginReqDto {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response: LoginResponse = client.post("/api/auth/login", &req).await?;
    info!("Login accepted");
    Ok(response)
}
