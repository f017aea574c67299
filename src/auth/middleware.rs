use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    /// The bearer token that authenticated this request, kept around so
    /// logout can revoke it.
    pub token: Uuid,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    let token = Uuid::parse_str(token).map_err(|_| AppError::Unauthorized)?;

    let user_id = state
        .sessions
        .resolve(token)
        .await
        .ok_or(AppError::Unauthorized)?;

    req.extensions_mut().insert(AuthUser { id: user_id, token });
    Ok(next.run(req).await)
}
