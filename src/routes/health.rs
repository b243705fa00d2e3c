use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

/// Liveness plus a database round trip; a dead connection surfaces as a 500.
#[get("")]
async fn health(db: web::Data<Arc<DatabaseService>>) -> ApiResult<()> {
    db.ping().await?;
    Ok(ApiResponse::EmptyOk)
}
