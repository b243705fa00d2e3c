use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use entity::registration_request::Model as RequestModel;
use std::sync::Arc;
use uuid::Uuid;

#[get("/status/{request_id}")]
async fn status(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<Uuid>,
) -> ApiResult<RequestModel> {
    Ok(ApiResponse::Ok(db.get_registration_request(path.into_inner()).await?))
}
