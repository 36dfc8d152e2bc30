//! Schedule repository: persistence for the schedule aggregate.
//!
//! Validation of delivery dates is delegated to the storage layer — the
//! unique index over `(schedule_id, delivery_date)` and the window
//! containment triggers created by the migration crate. The repository
//! classifies resulting driver errors but never re-checks the invariants in
//! memory.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};

use crate::server::{
    error::schedule::ScheduleError,
    model::schedule::{CourseSchedule, DeliveryDate, RecordId},
};

pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads one schedule aggregate by identity.
    ///
    /// Delivery dates come back ascending by date regardless of the order
    /// they were saved in; the ordering is the query's `ORDER BY`, not an
    /// in-memory sort. Stored epoch seconds are converted back to points in
    /// time during materialization.
    ///
    /// # Arguments
    /// - `id` - Schedule identity
    ///
    /// # Returns
    /// - `Ok(Some(CourseSchedule))` - Aggregate with all children
    /// - `Ok(None)` - No schedule with that identity (not an error)
    /// - `Err(ScheduleError::Db)` - Database error during query
    pub async fn load(&self, id: i32) -> Result<Option<CourseSchedule>, ScheduleError> {
        let Some(schedule) = entity::prelude::Schedule::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let deliveries = entity::prelude::Delivery::find()
            .filter(entity::delivery::Column::ScheduleId.eq(id))
            .order_by_asc(entity::delivery::Column::DeliveryDate)
            .all(self.db)
            .await?;

        Ok(Some(CourseSchedule::from_entity(schedule, deliveries)?))
    }

    /// Persists a schedule aggregate, parent first, then every delivery.
    ///
    /// Insert or update is decided per record by its `RecordId`: `New`
    /// inserts and receives a generated identity, `Persisted` updates in
    /// place and keeps its identity. New deliveries use the (possibly just
    /// assigned) schedule identity as their foreign key.
    ///
    /// The whole save runs in a single transaction: if any row violates a
    /// storage constraint, previously written rows of this save are rolled
    /// back and nothing persists.
    ///
    /// # Arguments
    /// - `schedule` - The aggregate to persist
    ///
    /// # Returns
    /// - `Ok(CourseSchedule)` - The aggregate with every identity `Persisted`
    /// - `Err(ScheduleError::DeliveryOutsideWindow)` - A delivery date lies outside the window
    /// - `Err(ScheduleError::DuplicateDelivery)` - Two deliveries of the schedule share a date
    /// - `Err(ScheduleError::Db)` - Any other database error
    pub async fn save(&self, schedule: CourseSchedule) -> Result<CourseSchedule, ScheduleError> {
        let txn = self.db.begin().await?;

        let schedule_id = match schedule.id {
            RecordId::New => {
                entity::schedule::ActiveModel {
                    start_date: ActiveValue::Set(schedule.start_date.timestamp()),
                    end_date: ActiveValue::Set(schedule.end_date.timestamp()),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(classify)?
                .id
            }
            RecordId::Persisted(id) => {
                entity::schedule::ActiveModel {
                    id: ActiveValue::Unchanged(id),
                    start_date: ActiveValue::Set(schedule.start_date.timestamp()),
                    end_date: ActiveValue::Set(schedule.end_date.timestamp()),
                }
                .update(&txn)
                .await
                .map_err(classify)?;
                id
            }
        };

        let mut delivery_dates = Vec::with_capacity(schedule.delivery_dates.len());
        for delivery in schedule.delivery_dates {
            let delivery_id = match delivery.id {
                RecordId::New => {
                    entity::delivery::ActiveModel {
                        schedule_id: ActiveValue::Set(schedule_id),
                        delivery_date: ActiveValue::Set(delivery.delivery_date.timestamp()),
                        ..Default::default()
                    }
                    .insert(&txn)
                    .await
                    .map_err(classify)?
                    .id
                }
                RecordId::Persisted(id) => {
                    // Only the date moves; ownership never changes.
                    entity::delivery::ActiveModel {
                        id: ActiveValue::Unchanged(id),
                        schedule_id: ActiveValue::NotSet,
                        delivery_date: ActiveValue::Set(delivery.delivery_date.timestamp()),
                    }
                    .update(&txn)
                    .await
                    .map_err(classify)?;
                    id
                }
            };

            delivery_dates.push(DeliveryDate {
                id: RecordId::Persisted(delivery_id),
                delivery_date: delivery.delivery_date,
            });
        }

        txn.commit().await?;

        Ok(CourseSchedule {
            id: RecordId::Persisted(schedule_id),
            start_date: schedule.start_date,
            end_date: schedule.end_date,
            delivery_dates,
        })
    }
}

/// Classifies a driver error into the schedule error taxonomy.
///
/// Duplicate dates surface as a unique constraint violation; the containment
/// triggers abort with the message exported by the migration crate. Anything
/// else passes through as a plain database error.
fn classify(err: DbErr) -> ScheduleError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return ScheduleError::DuplicateDelivery;
    }

    if err
        .to_string()
        .contains(migration::DELIVERY_WINDOW_CHECK_MESSAGE)
    {
        return ScheduleError::DeliveryOutsideWindow;
    }

    ScheduleError::Db(err)
}
