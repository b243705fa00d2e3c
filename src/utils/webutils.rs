use actix_web::{dev::ServiceRequest, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tracing::{debug, error};

use crate::config::EnvConfig;
use crate::types::error::AppError;
use crate::utils::jwt::decode_token;

/// Bearer validator: decodes the JWT and stores its `Claims` in request extensions.
///
/// Takes `Option<BearerAuth>` so a missing or malformed header reaches this function and is
/// answered with the same JSON error body as every other failure.
pub async fn validate_token(req: ServiceRequest, credentials: Option<BearerAuth>) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(credentials) = credentials else {
        debug!("request without bearer token");
        return Err((AppError::Unauthorized.into(), req));
    };

    let config = match req.app_data::<web::Data<EnvConfig>>() {
        Some(config) => config.clone(),
        None => {
            error!("EnvConfig missing from app data");
            return Err((AppError::Unauthorized.into(), req));
        }
    };

    match decode_token(credentials.token(), &config.jwt) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(e) => {
            debug!("rejected bearer token: {e}");
            Err((AppError::Unauthorized.into(), req))
        }
    }
}
