use crate::db::database_service::DatabaseService;
use crate::db::registration_request::ALREADY_PROCESSED;
use crate::types::{claims::Claims, error::AppError, workshop::{RWorkshopSubmit, WorkshopStats}};
use chrono::Utc;
use entity::status::RequestStatus;
use entity::workshop_request::{
    ActiveModel as WorkshopActive, Column, Entity as Workshop, Model as WorkshopModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

/// Which requests a caller may see: a whole club (admins) or only their own.
#[derive(Debug, Clone)]
pub enum WorkshopScope {
    Club(String),
    Requester(Uuid),
}

impl WorkshopScope {
    fn condition(&self) -> Condition {
        match self {
            WorkshopScope::Club(code) => Condition::all().add(Column::ClubCode.eq(code.as_str())),
            WorkshopScope::Requester(id) => Condition::all().add(Column::RequesterId.eq(*id)),
        }
    }
}

impl DatabaseService {
    pub async fn create_workshop_request(
        &self,
        requester: &Claims,
        submit: RWorkshopSubmit,
    ) -> Result<WorkshopModel, AppError> {
        let now = Utc::now();
        Ok(WorkshopActive {
            id: Set(Uuid::new_v4()),
            requester_id: Set(requester.user_id),
            requester_name: Set(requester.username.clone()),
            club_code: Set(requester.club_code.clone()),
            workshop_name: Set(submit.workshop_name),
            date: Set(submit.date),
            time: Set(submit.time),
            location: Set(submit.location),
            topic: Set(submit.topic),
            description: Set(submit.description),
            max_participants: Set(submit.max_participants),
            status: Set(RequestStatus::Pending),
            admin_id: Set(None),
            admin_name: Set(None),
            admin_response: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn get_workshop_request(&self, id: Uuid) -> Result<WorkshopModel, AppError> {
        Ok(Workshop::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or(DbErr::RecordNotFound("Workshop request not found".into()))?)
    }

    /// Newest first.
    pub async fn list_workshop_requests(&self, scope: &WorkshopScope) -> Result<Vec<WorkshopModel>, AppError> {
        Ok(Workshop::find()
            .filter(scope.condition())
            .order_by_desc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn workshop_stats(&self, scope: &WorkshopScope) -> Result<WorkshopStats, AppError> {
        let count = |status: Option<RequestStatus>| {
            let mut q = Workshop::find().filter(scope.condition());
            if let Some(status) = status {
                q = q.filter(Column::Status.eq(status));
            }
            q.count(&self.database_connection)
        };

        Ok(WorkshopStats {
            total: count(None).await?,
            pending: count(Some(RequestStatus::Pending)).await?,
            approved: count(Some(RequestStatus::Approved)).await?,
            rejected: count(Some(RequestStatus::Rejected)).await?,
        })
    }

    /// Moves a pending request to `status`, recording the deciding admin.
    pub async fn decide_workshop_request(
        &self,
        id: Uuid,
        admin: &Claims,
        status: RequestStatus,
        response: String,
    ) -> Result<WorkshopModel, AppError> {
        let txn = self.database_connection.begin().await?;

        let request = Workshop::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound("Workshop request not found".into()))?;

        if !request.status.is_pending() {
            txn.rollback().await?;
            return Err(AppError::BadRequest(ALREADY_PROCESSED.into()));
        }

        let mut am: WorkshopActive = request.into();
        am.status = Set(status);
        am.admin_id = Set(Some(admin.user_id));
        am.admin_name = Set(Some(admin.username.clone()));
        am.admin_response = Set(Some(response));
        am.updated_at = Set(Utc::now());
        let request = am.update(&txn).await?;

        txn.commit().await?;
        Ok(request)
    }
}
