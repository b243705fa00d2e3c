use crate::db::database_service::DatabaseService;
use crate::routes::workshop::scope_for;
use crate::types::claims::Claims;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use entity::workshop_request::Model as WorkshopModel;
use std::sync::Arc;

#[get("/requests")]
async fn requests(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    claims: web::ReqData<Claims>,
) -> ApiResult<Vec<WorkshopModel>> {
    Ok(ApiResponse::Ok(db.list_workshop_requests(&scope_for(&claims)).await?))
}
