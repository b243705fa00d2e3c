use crate::types::user::UserView;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Who is deciding a registration request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Approver {
    SystemAdmin,
    ClubAdmin,
}

impl Approver {
    pub fn as_str(&self) -> &'static str {
        match self {
            Approver::SystemAdmin => "systemAdmin",
            Approver::ClubAdmin => "clubAdmin",
        }
    }
}

impl fmt::Display for Approver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dashboard perspective for the pending list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardRole {
    SystemAdmin,
    Admin,
    Other,
}

impl From<Option<&str>> for DashboardRole {
    fn from(role: Option<&str>) -> Self {
        match role {
            Some("systemAdmin") => DashboardRole::SystemAdmin,
            Some("admin") => DashboardRole::Admin,
            _ => DashboardRole::Other,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PendingQuery {
    pub user_role: Option<String>,
    pub club_code: Option<String>,
}

impl PendingQuery {
    pub fn dashboard_role(&self) -> DashboardRole {
        self.user_role.as_deref().into()
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RApprove {
    pub approved_by: Approver,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RReject {
    pub rejected_by: Approver,
    pub rejection_reason: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRes {
    pub message: String,
    pub request_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApproveRes {
    pub message: String,
    pub user: UserView,
}
