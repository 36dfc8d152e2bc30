//! Schedule factory for creating test schedule rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// 2022-01-01T00:00:00Z, default window start.
const DEFAULT_START: i64 = 1_640_995_200;
/// 2022-02-01T00:00:00Z, default window end.
const DEFAULT_END: i64 = 1_643_673_600;

/// Factory for creating test schedules with customizable window bounds.
///
/// Bounds are plain epoch seconds, matching the column representation, so
/// tests can assert against stored values directly.
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    start_date: i64,
    end_date: i64,
}

impl<'a> ScheduleFactory<'a> {
    /// Creates a new ScheduleFactory with default values.
    ///
    /// Defaults:
    /// - start_date: 2022-01-01T00:00:00Z
    /// - end_date: 2022-02-01T00:00:00Z
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ScheduleFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            start_date: DEFAULT_START,
            end_date: DEFAULT_END,
        }
    }

    /// Sets the window start (epoch seconds).
    pub fn start_date(mut self, start_date: i64) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the window end (epoch seconds).
    pub fn end_date(mut self, end_date: i64) -> Self {
        self.end_date = end_date;
        self
    }

    /// Inserts the schedule into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created schedule entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        entity::schedule::ActiveModel {
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a schedule with the default 2022-01-01 to 2022-02-01 window.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created schedule entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_schedule(db: &DatabaseConnection) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db).build().await
}
