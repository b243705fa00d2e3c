use crate::db::database_service::DatabaseService;
use crate::routes::workshop::scope_for;
use crate::types::claims::Claims;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::workshop::WorkshopStats;
use actix_web::{get, web};
use std::sync::Arc;

#[get("/stats")]
async fn stats(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    claims: web::ReqData<Claims>,
) -> ApiResult<WorkshopStats> {
    Ok(ApiResponse::Ok(db.workshop_stats(&scope_for(&claims)).await?))
}
