use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum RegistrationRequest {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Roles,
    ClubCode,
    Status,
    RequestType,
    SystemAdminEmail,
    ClubAdminEmail,
    ApprovedBy,
    ApprovedAt,
    RejectionReason,
    EmailSent,
    EmailSentAt,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(RegistrationRequest::Table)
                .if_not_exists()
                .col(ColumnDef::new(RegistrationRequest::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(RegistrationRequest::Username).string().not_null())
                .col(ColumnDef::new(RegistrationRequest::Email).string().not_null())
                .col(ColumnDef::new(RegistrationRequest::PasswordHash).string().not_null())
                .col(ColumnDef::new(RegistrationRequest::Roles).json().not_null())
                .col(ColumnDef::new(RegistrationRequest::ClubCode).string().not_null())
                .col(ColumnDef::new(RegistrationRequest::Status).string_len(16).not_null().default("pending"))
                .col(ColumnDef::new(RegistrationRequest::RequestType).string_len(16).not_null())
                .col(ColumnDef::new(RegistrationRequest::SystemAdminEmail).string().null())
                .col(ColumnDef::new(RegistrationRequest::ClubAdminEmail).string().null())
                .col(ColumnDef::new(RegistrationRequest::ApprovedBy).string().null())
                .col(ColumnDef::new(RegistrationRequest::ApprovedAt).timestamp_with_time_zone().null())
                .col(ColumnDef::new(RegistrationRequest::RejectionReason).text().null())
                .col(ColumnDef::new(RegistrationRequest::EmailSent).boolean().not_null().default(false))
                .col(ColumnDef::new(RegistrationRequest::EmailSentAt).timestamp_with_time_zone().null())
                .col(ColumnDef::new(RegistrationRequest::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(RegistrationRequest::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_registration_request_status_type")
                .table(RegistrationRequest::Table)
                .col(RegistrationRequest::Status)
                .col(RegistrationRequest::RequestType)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_registration_request_club_code")
                .table(RegistrationRequest::Table)
                .col(RegistrationRequest::ClubCode)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(RegistrationRequest::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
