use crate::types::error::AppError;
use crate::types::registration::Approver;
use entity::registration_request::Model as RequestModel;
use entity::status::RequestType;

pub mod approve;
pub mod pending;
pub mod reject;
pub mod status;
pub mod submit;

/// The system admin decides club-admin requests; club admins decide member requests.
pub(crate) fn authorize_decision(approver: Approver, request: &RequestModel, verb: &str) -> Result<(), AppError> {
    match (approver, request.request_type) {
        (Approver::SystemAdmin, RequestType::Member) => Err(AppError::Forbidden(format!(
            "System admin can only {verb} admin requests"
        ))),
        (Approver::ClubAdmin, RequestType::Admin) => Err(AppError::Forbidden(format!(
            "Club admin can only {verb} member requests"
        ))),
        _ => Ok(()),
    }
}
