//! Delivery factory for creating test delivery rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a delivery row owned by the given schedule.
///
/// The insert runs against the same triggers and unique index as production
/// code, so a date outside the schedule's window or a duplicate date fails
/// here too.
///
/// # Arguments
/// - `db` - Database connection
/// - `schedule_id` - Identity of the owning schedule
/// - `delivery_date` - Delivery point in time (epoch seconds)
///
/// # Returns
/// - `Ok(Model)` - The created delivery entity
/// - `Err(DbErr)` - Database error during insert, including constraint violations
pub async fn create_delivery(
    db: &DatabaseConnection,
    schedule_id: i32,
    delivery_date: i64,
) -> Result<entity::delivery::Model, DbErr> {
    entity::delivery::ActiveModel {
        schedule_id: ActiveValue::Set(schedule_id),
        delivery_date: ActiveValue::Set(delivery_date),
        ..Default::default()
    }
    .insert(db)
    .await
}
