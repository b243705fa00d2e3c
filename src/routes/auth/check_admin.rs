use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{AdminSummary, CheckAdminRes};
use actix_web::{get, web};
use std::sync::Arc;
use tracing::debug;

#[get("/check-admin/{club_code}")]
async fn check_admin(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
) -> ApiResult<CheckAdminRes> {
    let club_code = path.into_inner();

    let res = match db.find_club_admin(&club_code).await? {
        Some(admin) => {
            debug!(club_code = %club_code, admin = %admin.username, "club admin found");
            CheckAdminRes {
                exists: true,
                admin: Some(AdminSummary {
                    username: admin.username,
                    email: admin.email,
                    club_code: admin.club_code,
                }),
                message: "Admin already exists for this club".to_string(),
            }
        }
        None => CheckAdminRes {
            exists: false,
            admin: None,
            message: "No admin found for this club".to_string(),
        },
    };

    Ok(ApiResponse::Ok(res))
}
