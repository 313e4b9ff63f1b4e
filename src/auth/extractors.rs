use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use crate::auth::jwt::JwtKeys;
use crate::auth::repo_types::{Role, User};
use crate::error::ApiError;
use crate::state::AppState;

/// Authentication gate: extracts and verifies the bearer token, yielding
/// the caller's user id. Missing or bad credentials never reach a handler.
#[derive(Debug)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::unauthorized("Invalid Authorization header"))?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::unauthorized("Invalid or expired token")
        })?;

        Ok(AuthUser(claims.sub))
    }
}

/// Role gate layered on top of [`AuthUser`]: the caller must both hold a
/// valid token and still exist as a farmer. Runs before the request body is
/// ever deserialized, so a rejected caller cannot trigger a write.
#[derive(Debug)]
pub struct FarmerUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for FarmerUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user_id) = AuthUser::from_request_parts(parts, state).await?;

        let user = User::find_by_id(&state.db, user_id)
            .await
            .map_err(ApiError::internal)?
            .ok_or_else(|| {
                warn!(user_id = %user_id, "token subject no longer exists");
                ApiError::unauthorized("User not found")
            })?;

        require_farmer(&user)?;
        Ok(FarmerUser(user.id))
    }
}

pub fn require_farmer(user: &User) -> Result<(), ApiError> {
    if user.role != Role::Farmer {
        warn!(user_id = %user.id, "farmer role required");
        return Err(ApiError::forbidden("Farmer role required"));
    }
    Ok(())
}
