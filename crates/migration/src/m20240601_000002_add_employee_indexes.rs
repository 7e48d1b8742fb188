use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_employees::Employees;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Name lookups back the list search
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employees_name")
                    .table(Employees::Table)
                    .col(Employees::Name)
                    .to_owned(),
            )
            .await?;

        // Department equality filter
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employees_department")
                    .table(Employees::Table)
                    .col(Employees::Department)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_employees_department").table(Employees::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_employees_name").table(Employees::Table).to_owned())
            .await
    }
}
