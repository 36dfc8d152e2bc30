use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseProject::Table)
                    .if_not_exists()
                    .col(pk_auto(CourseProject::Id))
                    .col(string(CourseProject::ProjectName))
                    .col(string(CourseProject::CourseName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseProject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseProject {
    Table,
    Id,
    ProjectName,
    CourseName,
}
