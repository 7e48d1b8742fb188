//! Create `employees` table.
//! One row per employee; `email` is unique and `status` holds `Active`/`Inactive`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(pk_auto(Employees::Id))
                    .col(string_len(Employees::Name, 255).not_null())
                    .col(string_len_uniq(Employees::Email, 320).not_null())
                    .col(string_len(Employees::Phone, 32).not_null())
                    .col(string_null(Employees::Role))
                    .col(string_null(Employees::Department))
                    .col(double_null(Employees::Salary))
                    .col(date_null(Employees::DateOfJoining))
                    .col(string_len(Employees::Status, 16).not_null().default("Active"))
                    .col(timestamp_with_time_zone(Employees::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Employees::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employees::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Employees {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Role,
    Department,
    Salary,
    DateOfJoining,
    Status,
    CreatedAt,
    UpdatedAt,
}
