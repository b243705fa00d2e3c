use crate::config::EnvConfig;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RLogin};
use crate::utils::{hash::verify_password, jwt::issue_token};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

const INVALID_CREDENTIALS: &str =
    "Invalid credentials. Please check your username, password, and club code.";

#[post("/login")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    let user = db
        .find_user_by_login(&body.username, &body.club_code)
        .await?
        .ok_or_else(|| AppError::BadRequest(INVALID_CREDENTIALS.into()))?;

    let matches = verify_password(&body.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("stored hash unreadable: {e}")))?;
    if !matches {
        return Err(AppError::BadRequest(INVALID_CREDENTIALS.into()));
    }

    let token = issue_token(&user, &config.jwt)
        .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))?;

    info!(user_id = %user.id, club_code = %user.club_code, roles = ?user.roles, "user logged in");

    Ok(ApiResponse::Ok(LoginRes {
        token,
        user: user.into(),
    }))
}
