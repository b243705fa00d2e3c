use crate::config::EnvConfig;
use crate::db::database_service::DatabaseService;
use crate::db::registration_request::{NewRegistrationRequest, ADMIN_EXISTS};
use crate::types::error::AppError;
use crate::types::mail::MailTemplate;
use crate::types::registration::SubmitRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RRegistration;
use crate::utils::{hash::hash_password, mail::notify};
use actix_web::{post, web};
use entity::role::{Role, Roles};
use entity::status::RequestType;
use std::sync::Arc;
use tracing::info;

#[post("/submit-request")]
async fn submit_request(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RRegistration>,
) -> ApiResult<SubmitRes> {
    let role = body.validate()?;
    let body = body.into_inner();

    // Admin identities are unique across all clubs; members only within theirs.
    match role {
        Role::Admin => {
            if db.find_user_anywhere(&body.username, &body.email).await?.is_some() {
                return Err(AppError::BadRequest(
                    "An admin account with this username or email already exists.".into(),
                ));
            }
            if db.find_club_admin(&body.club_code).await?.is_some() {
                return Err(AppError::BadRequest(ADMIN_EXISTS.into()));
            }
        }
        Role::ClubMember => {
            if db.find_user_in_club(&body.username, &body.email, &body.club_code).await?.is_some() {
                return Err(AppError::BadRequest(
                    "A club member with this username or email already exists for this club.".into(),
                ));
            }
        }
    }

    if db.has_pending_registration_request(&body.username, &body.email, &body.club_code).await? {
        return Err(AppError::BadRequest(
            "A registration request is already pending for this user in this club.".into(),
        ));
    }

    let (request_type, target_email, roles) = match role {
        Role::Admin => (
            RequestType::Admin,
            config.system_admin_email.clone(),
            Roles::new([Role::Admin, Role::ClubMember]),
        ),
        Role::ClubMember => {
            let club_admin = db.find_club_admin(&body.club_code).await?.ok_or_else(|| {
                AppError::BadRequest(
                    "No admin found for this club. Please contact the system administrator.".into(),
                )
            })?;
            (RequestType::Member, club_admin.email, Roles::new([Role::ClubMember]))
        }
    };

    let password_hash = hash_password(&body.password)
        .map_err(|e| AppError::Internal(format!("password hash failed: {e}")))?;

    let request = db
        .create_registration_request(NewRegistrationRequest {
            username: body.username,
            email: body.email,
            password_hash,
            roles,
            club_code: body.club_code,
            request_type,
            system_admin_email: (request_type == RequestType::Admin).then(|| target_email.clone()),
            club_admin_email: (request_type == RequestType::Member).then(|| target_email.clone()),
        })
        .await?;
    info!(request_id = %request.id, club_code = %request.club_code, request_type = ?request_type, "registration request stored");

    let data = (&request).into();
    let template = match request_type {
        RequestType::Admin => MailTemplate::AdminRequest(data),
        RequestType::Member => MailTemplate::MemberRequest(data),
    };
    let request_id = request.id;
    if notify(&config.mail, &target_email, &template).await {
        db.mark_registration_email_sent(request).await?;
    }

    Ok(ApiResponse::Created(SubmitRes {
        message: "Registration request submitted successfully. You will receive an email notification once your request is approved.".to_string(),
        request_id,
    }))
}
