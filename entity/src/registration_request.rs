use crate::role::Roles;
use crate::status::{RequestStatus, RequestType};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registration_request")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Already hashed; copied verbatim onto the user on approval.
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[sea_orm(column_type = "Json")]
    pub roles: Roles,
    pub club_code: String,
    pub status: RequestStatus,
    pub request_type: RequestType,
    pub system_admin_email: Option<String>,
    pub club_admin_email: Option<String>,
    // Also holds the rejecting actor and time for rejected requests.
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTimeUtc>,
    pub rejection_reason: Option<String>,
    pub email_sent: bool,
    pub email_sent_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
