use crate::db::database_service::DatabaseService;
use crate::db::registration_request::PendingFilter;
use crate::types::error::AppError;
use crate::types::registration::{DashboardRole, PendingQuery};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use entity::registration_request::Model as RequestModel;
use entity::status::RequestType;
use std::sync::Arc;

#[get("/pending-requests")]
async fn pending_requests(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    query: web::Query<PendingQuery>,
) -> ApiResult<Vec<RequestModel>> {
    let filter = match query.dashboard_role() {
        DashboardRole::SystemAdmin => PendingFilter {
            request_type: Some(RequestType::Admin),
            club_code: None,
        },
        DashboardRole::Admin => {
            let club_code = query
                .club_code
                .clone()
                .filter(|c| !c.trim().is_empty())
                .ok_or_else(|| AppError::BadRequest("clubCode is required for club admins.".into()))?;
            PendingFilter {
                request_type: Some(RequestType::Member),
                club_code: Some(club_code),
            }
        }
        DashboardRole::Other => PendingFilter::default(),
    };

    Ok(ApiResponse::Ok(db.list_pending_registration_requests(filter).await?))
}
