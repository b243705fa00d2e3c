use crate::db::database_service::DatabaseService;
use crate::db::registration_request::ADMIN_EXISTS;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::types::user::{DBUserCreate, RRegistration};
use crate::utils::hash::hash_password;
use actix_web::{post, web};
use entity::role::{Role, Roles};
use std::sync::Arc;
use tracing::info;

#[post("/register")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RRegistration>,
) -> ApiResult<MessageRes> {
    let role = body.validate()?;
    let body = body.into_inner();

    // Same person registering again in the same club gains the role instead of a second account.
    if let Some(user) = db.find_user_in_club(&body.username, &body.email, &body.club_code).await? {
        if user.has_role(role) {
            return Err(AppError::BadRequest(
                "User with this role already exists for this club.".into(),
            ));
        }
        if role == Role::Admin && db.find_club_admin(&body.club_code).await?.is_some() {
            return Err(AppError::BadRequest(ADMIN_EXISTS.into()));
        }

        let user = db.add_user_role(user, role).await?;
        info!(user_id = %user.id, club_code = %user.club_code, role = %role, "role added to existing user");
        return Ok(ApiResponse::Ok(MessageRes::new(
            "Role added to existing user for this club.",
        )));
    }

    if role == Role::Admin && db.find_club_admin(&body.club_code).await?.is_some() {
        return Err(AppError::BadRequest(ADMIN_EXISTS.into()));
    }

    let password_hash = hash_password(&body.password)
        .map_err(|e| AppError::Internal(format!("password hash failed: {e}")))?;

    let user = db
        .create_user(DBUserCreate {
            username: body.username,
            email: body.email,
            password_hash,
            roles: Roles::new([role]),
            club_code: body.club_code,
        })
        .await?;
    info!(user_id = %user.id, club_code = %user.club_code, role = %role, "user registered");

    Ok(ApiResponse::Created(MessageRes::new("User registered successfully")))
}
