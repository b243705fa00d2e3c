use entity::role::{Role, Roles};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload issued at login and attached to authenticated requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: Uuid,
    pub username: String,
    pub roles: Roles,
    pub club_code: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(role)
    }
}
