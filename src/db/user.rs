use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, user::DBUserCreate};
use chrono::Utc;
use entity::role::{Role, Roles};
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

fn username_or_email(username: &str, email: &str) -> Condition {
    Condition::any()
        .add(Column::Username.eq(username))
        .add(Column::Email.eq(email))
}

// Roles live in a JSON column, so the admin lookup filters by club in SQL and by role here.
pub(crate) async fn find_club_admin_on<C: ConnectionTrait>(
    conn: &C,
    club_code: &str,
) -> Result<Option<UserModel>, AppError> {
    Ok(User::find()
        .filter(Column::ClubCode.eq(club_code))
        .all(conn)
        .await?
        .into_iter()
        .find(|u| u.has_role(Role::Admin)))
}

pub(crate) async fn find_user_by_login_on<C: ConnectionTrait>(
    conn: &C,
    username: &str,
    club_code: &str,
) -> Result<Option<UserModel>, AppError> {
    Ok(User::find()
        .filter(Column::Username.eq(username))
        .filter(Column::ClubCode.eq(club_code))
        .one(conn)
        .await?)
}

pub(crate) async fn insert_user_on<C: ConnectionTrait>(
    conn: &C,
    payload: DBUserCreate,
) -> Result<UserModel, AppError> {
    let now = Utc::now();
    Ok(UserActive {
        id: Set(Uuid::new_v4()),
        username: Set(payload.username),
        email: Set(payload.email),
        password_hash: Set(payload.password_hash),
        roles: Set(payload.roles),
        club_code: Set(payload.club_code),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await?)
}

/// Merges `roles` into the user's set. No write happens when nothing changes.
pub(crate) async fn merge_user_roles_on<C: ConnectionTrait>(
    conn: &C,
    user: UserModel,
    roles: &Roles,
) -> Result<UserModel, AppError> {
    let mut merged = user.roles.clone();
    if !merged.merge(roles) {
        return Ok(user);
    }
    let mut am: UserActive = user.into();
    am.roles = Set(merged);
    am.updated_at = Set(Utc::now());
    Ok(am.update(conn).await?)
}

impl DatabaseService {
    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Login lookup: usernames are only unique within a club.
    pub async fn find_user_by_login(&self, username: &str, club_code: &str) -> Result<Option<UserModel>, AppError> {
        find_user_by_login_on(&self.database_connection, username, club_code).await
    }

    pub async fn find_user_in_club(
        &self,
        username: &str,
        email: &str,
        club_code: &str,
    ) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(username_or_email(username, email))
            .filter(Column::ClubCode.eq(club_code))
            .one(&self.database_connection)
            .await?)
    }

    /// Same as `find_user_in_club` but across every club.
    pub async fn find_user_anywhere(&self, username: &str, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(username_or_email(username, email))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn find_club_admin(&self, club_code: &str) -> Result<Option<UserModel>, AppError> {
        find_club_admin_on(&self.database_connection, club_code).await
    }

    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        insert_user_on(&self.database_connection, payload).await
    }

    pub async fn add_user_role(&self, user: UserModel, role: Role) -> Result<UserModel, AppError> {
        merge_user_roles_on(&self.database_connection, user, &Roles::new([role])).await
    }
}
