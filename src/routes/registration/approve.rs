use crate::config::EnvConfig;
use crate::db::database_service::DatabaseService;
use crate::db::registration_request::ALREADY_PROCESSED;
use crate::routes::registration::authorize_decision;
use crate::types::error::AppError;
use crate::types::mail::MailTemplate;
use crate::types::registration::{ApproveRes, RApprove};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::mail::notify;
use actix_web::{put, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[put("/approve/{request_id}")]
async fn approve(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    config: web::Data<EnvConfig>,
    path: web::Path<Uuid>,
    body: web::Json<RApprove>,
) -> ApiResult<ApproveRes> {
    let request_id = path.into_inner();

    let request = db.get_registration_request(request_id).await?;
    if !request.status.is_pending() {
        return Err(AppError::BadRequest(ALREADY_PROCESSED.into()));
    }
    authorize_decision(body.approved_by, &request, "approve")?;

    let (request, user) = db.approve_registration_request(request_id, body.approved_by).await?;
    info!(request_id = %request.id, user_id = %user.id, approved_by = %body.approved_by, "registration request approved");

    notify(&config.mail, &request.email, &MailTemplate::ApprovalNotification((&request).into())).await;

    Ok(ApiResponse::Ok(ApproveRes {
        message: "Registration request approved successfully".to_string(),
        user: user.into(),
    }))
}
