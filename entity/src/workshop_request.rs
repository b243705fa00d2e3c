use crate::status::RequestStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workshop_request")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub requester_id: Uuid,            // user.id of the submitting member
    pub requester_name: String,
    pub club_code: String,
    pub workshop_name: String,
    pub date: Date,
    pub time: String,
    pub location: String,
    pub topic: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub max_participants: i32,
    pub status: RequestStatus,
    pub admin_id: Option<Uuid>,
    pub admin_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub admin_response: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
