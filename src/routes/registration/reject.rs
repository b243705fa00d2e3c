use crate::config::EnvConfig;
use crate::db::database_service::DatabaseService;
use crate::db::registration_request::ALREADY_PROCESSED;
use crate::routes::registration::authorize_decision;
use crate::types::error::AppError;
use crate::types::mail::MailTemplate;
use crate::types::registration::RReject;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::utils::mail::notify;
use actix_web::{put, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[put("/reject/{request_id}")]
async fn reject(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    config: web::Data<EnvConfig>,
    path: web::Path<Uuid>,
    body: web::Json<RReject>,
) -> ApiResult<MessageRes> {
    let request_id = path.into_inner();
    let body = body.into_inner();

    let request = db.get_registration_request(request_id).await?;
    if !request.status.is_pending() {
        return Err(AppError::BadRequest(ALREADY_PROCESSED.into()));
    }
    authorize_decision(body.rejected_by, &request, "reject")?;

    let request = db
        .reject_registration_request(request_id, body.rejected_by, body.rejection_reason)
        .await?;
    info!(request_id = %request.id, rejected_by = %body.rejected_by, "registration request rejected");

    let template = MailTemplate::RejectionNotification {
        data: (&request).into(),
        reason: request.rejection_reason.clone(),
    };
    notify(&config.mail, &request.email, &template).await;

    Ok(ApiResponse::Ok(MessageRes::new("Registration request rejected successfully")))
}
