use crate::types::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RWorkshopSubmit {
    pub workshop_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub topic: String,
    pub description: Option<String>,
    pub max_participants: i32,
}

impl RWorkshopSubmit {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("workshopName", &self.workshop_name),
            ("time", &self.time),
            ("location", &self.location),
            ("topic", &self.topic),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required.")));
            }
        }
        if self.max_participants < 1 {
            return Err(AppError::Validation("maxParticipants must be at least 1.".into()));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RAdminDecision {
    pub admin_response: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopSubmitRes {
    pub message: String,
    pub request_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WorkshopDecisionRes {
    pub message: String,
    pub request: entity::workshop_request::Model,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct WorkshopStats {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}
