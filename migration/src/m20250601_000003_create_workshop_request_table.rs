use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum WorkshopRequest {
    Table,
    Id,
    RequesterId,
    RequesterName,
    ClubCode,
    WorkshopName,
    Date,
    Time,
    Location,
    Topic,
    Description,
    MaxParticipants,
    Status,
    AdminId,
    AdminName,
    AdminResponse,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(WorkshopRequest::Table)
                .if_not_exists()
                .col(ColumnDef::new(WorkshopRequest::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(WorkshopRequest::RequesterId).uuid().not_null())
                .col(ColumnDef::new(WorkshopRequest::RequesterName).string().not_null())
                .col(ColumnDef::new(WorkshopRequest::ClubCode).string().not_null())
                .col(ColumnDef::new(WorkshopRequest::WorkshopName).string().not_null())
                .col(ColumnDef::new(WorkshopRequest::Date).date().not_null())
                .col(ColumnDef::new(WorkshopRequest::Time).string().not_null())
                .col(ColumnDef::new(WorkshopRequest::Location).string().not_null())
                .col(ColumnDef::new(WorkshopRequest::Topic).string().not_null())
                .col(ColumnDef::new(WorkshopRequest::Description).text().null())
                .col(ColumnDef::new(WorkshopRequest::MaxParticipants).integer().not_null())
                .col(ColumnDef::new(WorkshopRequest::Status).string_len(16).not_null().default("pending"))
                .col(ColumnDef::new(WorkshopRequest::AdminId).uuid().null())
                .col(ColumnDef::new(WorkshopRequest::AdminName).string().null())
                .col(ColumnDef::new(WorkshopRequest::AdminResponse).text().null())
                .col(ColumnDef::new(WorkshopRequest::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(WorkshopRequest::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_workshop_request_club_code")
                .table(WorkshopRequest::Table)
                .col(WorkshopRequest::ClubCode)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_workshop_request_requester")
                .table(WorkshopRequest::Table)
                .col(WorkshopRequest::RequesterId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(WorkshopRequest::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
