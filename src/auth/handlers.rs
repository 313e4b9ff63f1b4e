use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, PublicUser, RegisterRequest, TokenResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo_types::User,
    },
    error::{is_unique_violation, ApiError},
    response::{success, ApiResponse},
    state::AppState,
    validate::ValidatedJson,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PublicUser>>), ApiError> {
    if User::find_by_email(&state.db, &payload.email)
        .await
        .map_err(ApiError::internal)?
        .is_some()
    {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::conflict("User already exists"));
    }

    let hash = hash_password(&payload.password).map_err(ApiError::internal)?;

    let user = match User::create(&state.db, &payload.name, &payload.email, &hash, payload.role)
        .await
    {
        Ok(user) => user,
        // Two concurrent registrations can both pass the pre-check; the
        // unique index on email settles the race.
        Err(e) if is_unique_violation(&e) => {
            warn!(email = %payload.email, "email already registered (insert race)");
            return Err(ApiError::conflict("User already exists"));
        }
        Err(e) => return Err(ApiError::internal(e)),
    };

    info!(user_id = %user.id, email = %user.email, role = ?user.role, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(success("User registered successfully", PublicUser::from(user))),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let user = User::find_by_email(&state.db, &payload.email)
        .await
        .map_err(ApiError::internal)?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            ApiError::invalid_credentials("User not found")
        })?;

    let ok = verify_password(&payload.password, &user.password_hash).map_err(ApiError::internal)?;
    if !ok {
        warn!(email = %payload.email, user_id = %user.id, "login invalid password");
        return Err(ApiError::invalid_credentials("Invalid credentials"));
    }

    let token = JwtKeys::from_ref(&state)
        .sign(user.id)
        .map_err(ApiError::internal)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(success("Login successful", TokenResponse { token })))
}
