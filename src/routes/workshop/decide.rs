use crate::db::database_service::DatabaseService;
use crate::types::claims::Claims;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::workshop::{RAdminDecision, WorkshopDecisionRes};
use actix_web::{put, web};
use entity::role::Role;
use entity::status::RequestStatus;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

async fn decide(
    db: &DatabaseService,
    claims: &Claims,
    request_id: Uuid,
    body: Option<web::Json<RAdminDecision>>,
    status: RequestStatus,
) -> Result<WorkshopDecisionRes, AppError> {
    let (verb, default_response, message) = match status {
        RequestStatus::Approved => ("approve", "Request approved", "Workshop request approved successfully"),
        _ => ("reject", "Request rejected", "Workshop request rejected"),
    };

    if !claims.has_role(Role::Admin) {
        return Err(AppError::Forbidden(format!("Only admins can {verb} workshop requests")));
    }

    let request = db.get_workshop_request(request_id).await?;
    if request.club_code != claims.club_code {
        return Err(AppError::Forbidden(format!("You can only {verb} requests from your club")));
    }

    let response = body
        .and_then(|b| b.into_inner().admin_response)
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| default_response.to_string());

    let request = db.decide_workshop_request(request_id, claims, status, response).await?;
    info!(request_id = %request.id, admin = %claims.user_id, status = ?status, "workshop request decided");

    Ok(WorkshopDecisionRes {
        message: message.to_string(),
        request,
    })
}

#[put("/approve/{request_id}")]
async fn approve(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    body: Option<web::Json<RAdminDecision>>,
) -> ApiResult<WorkshopDecisionRes> {
    let res = decide(&db, &claims, path.into_inner(), body, RequestStatus::Approved).await?;
    Ok(ApiResponse::Ok(res))
}

#[put("/reject/{request_id}")]
async fn reject(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    body: Option<web::Json<RAdminDecision>>,
) -> ApiResult<WorkshopDecisionRes> {
    let res = decide(&db, &claims, path.into_inner(), body, RequestStatus::Rejected).await?;
    Ok(ApiResponse::Ok(res))
}
