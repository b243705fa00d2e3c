use crate::db::workshop_request::WorkshopScope;
use crate::types::claims::Claims;
use entity::role::Role;

pub mod decide;
pub mod list;
pub mod stats;
pub mod submit;

/// Admins act on their whole club, everyone else on their own requests.
pub(crate) fn scope_for(claims: &Claims) -> WorkshopScope {
    if claims.has_role(Role::Admin) {
        WorkshopScope::Club(claims.club_code.clone())
    } else {
        WorkshopScope::Requester(claims.user_id)
    }
}
