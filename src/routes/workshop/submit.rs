use crate::db::database_service::DatabaseService;
use crate::types::claims::Claims;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::workshop::{RWorkshopSubmit, WorkshopSubmitRes};
use actix_web::{post, web};
use entity::role::Role;
use std::sync::Arc;
use tracing::info;

#[post("/submit")]
async fn submit(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    claims: web::ReqData<Claims>,
    body: web::Json<RWorkshopSubmit>,
) -> ApiResult<WorkshopSubmitRes> {
    if !claims.has_role(Role::ClubMember) {
        return Err(AppError::Forbidden("Only club members can submit workshop requests".into()));
    }
    body.validate()?;

    let request = db.create_workshop_request(&claims, body.into_inner()).await?;
    info!(request_id = %request.id, requester = %claims.user_id, club_code = %request.club_code, "workshop request submitted");

    Ok(ApiResponse::Created(WorkshopSubmitRes {
        message: "Workshop request submitted successfully".to_string(),
        request_id: request.id,
    }))
}
