use crate::db::database_service::DatabaseService;
use crate::db::user::{find_club_admin_on, find_user_by_login_on, insert_user_on, merge_user_roles_on};
use crate::types::{error::AppError, registration::Approver, user::DBUserCreate};
use chrono::Utc;
use entity::registration_request::{
    ActiveModel as RequestActive, Column, Entity as Request, Model as RequestModel,
};
use entity::role::Roles;
use entity::status::{RequestStatus, RequestType};
use entity::user::Model as UserModel;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

pub struct NewRegistrationRequest {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Roles,
    pub club_code: String,
    pub request_type: RequestType,
    pub system_admin_email: Option<String>,
    pub club_admin_email: Option<String>,
}

/// Filter for the pending dashboard list.
#[derive(Debug, Clone, Default)]
pub struct PendingFilter {
    pub request_type: Option<RequestType>,
    pub club_code: Option<String>,
}

pub const ALREADY_PROCESSED: &str = "Request has already been processed";
pub const ADMIN_EXISTS: &str = "An admin already exists for this club. Only one admin is allowed per club.";

impl DatabaseService {
    pub async fn create_registration_request(&self, new: NewRegistrationRequest) -> Result<RequestModel, AppError> {
        let now = Utc::now();
        Ok(RequestActive {
            id: Set(Uuid::new_v4()),
            username: Set(new.username),
            email: Set(new.email),
            password_hash: Set(new.password_hash),
            roles: Set(new.roles),
            club_code: Set(new.club_code),
            status: Set(RequestStatus::Pending),
            request_type: Set(new.request_type),
            system_admin_email: Set(new.system_admin_email),
            club_admin_email: Set(new.club_admin_email),
            approved_by: Set(None),
            approved_at: Set(None),
            rejection_reason: Set(None),
            email_sent: Set(false),
            email_sent_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn get_registration_request(&self, id: Uuid) -> Result<RequestModel, AppError> {
        Ok(Request::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or(DbErr::RecordNotFound("Registration request not found".into()))?)
    }

    pub async fn has_pending_registration_request(
        &self,
        username: &str,
        email: &str,
        club_code: &str,
    ) -> Result<bool, AppError> {
        Ok(Request::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(username))
                    .add(Column::Email.eq(email)),
            )
            .filter(Column::ClubCode.eq(club_code))
            .filter(Column::Status.eq(RequestStatus::Pending))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    /// Newest first.
    pub async fn list_pending_registration_requests(&self, filter: PendingFilter) -> Result<Vec<RequestModel>, AppError> {
        let mut query = Request::find().filter(Column::Status.eq(RequestStatus::Pending));
        if let Some(request_type) = filter.request_type {
            query = query.filter(Column::RequestType.eq(request_type));
        }
        if let Some(club_code) = filter.club_code {
            query = query.filter(Column::ClubCode.eq(club_code));
        }
        Ok(query
            .order_by_desc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn mark_registration_email_sent(&self, request: RequestModel) -> Result<RequestModel, AppError> {
        let now = Utc::now();
        let mut am: RequestActive = request.into();
        am.email_sent = Set(true);
        am.email_sent_at = Set(Some(now));
        am.updated_at = Set(now);
        Ok(am.update(&self.database_connection).await?)
    }

    /// Approves a pending request and creates the user, or merges the requested roles
    /// into the existing (username, club) user, in one transaction.
    pub async fn approve_registration_request(
        &self,
        id: Uuid,
        approver: Approver,
    ) -> Result<(RequestModel, UserModel), AppError> {
        let txn = self.database_connection.begin().await?;

        let request = Request::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound("Registration request not found".into()))?;

        if !request.status.is_pending() {
            txn.rollback().await?;
            return Err(AppError::BadRequest(ALREADY_PROCESSED.into()));
        }

        if request.request_type == RequestType::Admin {
            if let Some(admin) = find_club_admin_on(&txn, &request.club_code).await? {
                if admin.username != request.username {
                    txn.rollback().await?;
                    return Err(AppError::BadRequest(ADMIN_EXISTS.into()));
                }
            }
        }

        let now = Utc::now();
        let mut am: RequestActive = request.clone().into();
        am.status = Set(RequestStatus::Approved);
        am.approved_by = Set(Some(approver.to_string()));
        am.approved_at = Set(Some(now));
        am.updated_at = Set(now);
        let request_after = am.update(&txn).await?;

        let user = match find_user_by_login_on(&txn, &request.username, &request.club_code).await? {
            Some(user) => merge_user_roles_on(&txn, user, &request.roles).await?,
            None => {
                insert_user_on(&txn, DBUserCreate {
                    username: request.username,
                    email: request.email,
                    password_hash: request.password_hash,
                    roles: request.roles,
                    club_code: request.club_code,
                })
                .await?
            }
        };

        txn.commit().await?;
        Ok((request_after, user))
    }

    pub async fn reject_registration_request(
        &self,
        id: Uuid,
        rejected_by: Approver,
        reason: Option<String>,
    ) -> Result<RequestModel, AppError> {
        let txn = self.database_connection.begin().await?;

        let request = Request::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound("Registration request not found".into()))?;

        if !request.status.is_pending() {
            txn.rollback().await?;
            return Err(AppError::BadRequest(ALREADY_PROCESSED.into()));
        }

        let now = Utc::now();
        let mut am: RequestActive = request.into();
        am.status = Set(RequestStatus::Rejected);
        am.approved_by = Set(Some(rejected_by.to_string()));
        am.approved_at = Set(Some(now));
        am.rejection_reason = Set(reason);
        am.updated_at = Set(now);
        let request = am.update(&txn).await?;

        txn.commit().await?;
        Ok(request)
    }
}
