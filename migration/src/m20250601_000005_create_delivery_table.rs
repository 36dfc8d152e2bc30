use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000004_create_schedule_table::Schedule;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Delivery::Table)
                    .if_not_exists()
                    .col(pk_auto(Delivery::Id))
                    .col(integer(Delivery::ScheduleId))
                    .col(big_integer(Delivery::DeliveryDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_schedule_id")
                            .from(Delivery::Table, Delivery::ScheduleId)
                            .to(Schedule::Table, Schedule::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager.create_index(delivery_date_unique_index()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Delivery::Table).to_owned())
            .await
    }
}

/// Unique index over `(schedule_id, delivery_date)`.
///
/// Duplicate delivery dates within one schedule are rejected by the store,
/// not deduplicated in application code. Shared with `test-utils` so
/// in-memory test databases carry the same constraint.
pub fn delivery_date_unique_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_delivery_schedule_id_delivery_date")
        .table(Delivery::Table)
        .col(Delivery::ScheduleId)
        .col(Delivery::DeliveryDate)
        .unique()
        .if_not_exists()
        .to_owned()
}

#[derive(DeriveIden)]
pub enum Delivery {
    Table,
    Id,
    ScheduleId,
    DeliveryDate,
}
