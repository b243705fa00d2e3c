use crate::types::error::AppError;
use entity::role::{Role, Roles};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of both direct registration and registration-request submission.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RRegistration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub club_code: String,
}

impl RRegistration {
    /// Checks required fields and returns the parsed role.
    pub fn validate(&self) -> Result<Role, AppError> {
        for (field, value) in [
            ("username", &self.username),
            ("email", &self.email),
            ("password", &self.password),
            ("clubCode", &self.club_code),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required.")));
            }
        }
        if !self.email.contains('@') {
            return Err(AppError::Validation("A valid email address is required.".into()));
        }
        self.role
            .parse::<Role>()
            .map_err(|_| AppError::Validation("Role must be either 'admin' or 'clubMember'.".into()))
    }
}

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Roles,
    pub club_code: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RLogin {
    pub username: String,
    pub password: String,
    pub club_code: String,
}

/// Public view of a user, used by login and approval responses.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub roles: Roles,
    pub club_code: String,
}

impl From<entity::user::Model> for UserView {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            roles: user.roles,
            club_code: user.club_code,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRes {
    pub token: String,
    pub user: UserView,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub username: String,
    pub email: String,
    pub club_code: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CheckAdminRes {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminSummary>,
    pub message: String,
}
