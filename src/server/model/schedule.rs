//! Schedule aggregate domain model.
//!
//! A `CourseSchedule` is a time window owning a collection of
//! `DeliveryDate`s. Whether an aggregate has been persisted is carried by
//! `RecordId` rather than an optional id, so the repository's
//! insert-vs-update decision is a `match` and a "save with the wrong
//! identity state" bug cannot be expressed.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::schedule::{DeliveryDateDto, ScheduleDto};

/// Persistence identity of a schedule or delivery date.
///
/// `New` marks a value that has never been stored; it becomes
/// `Persisted(id)` on first successful insert and stays stable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordId {
    New,
    Persisted(i32),
}

impl RecordId {
    /// Returns the stored identity, or `None` before first persistence.
    pub fn value(&self) -> Option<i32> {
        match self {
            Self::New => None,
            Self::Persisted(id) => Some(*id),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Self::New)
    }
}

/// Schedule window bounding the valid dates for its deliveries.
///
/// No invariant relates `start_date` and `end_date`; an inverted window is
/// accepted and simply rejects every delivery at the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSchedule {
    pub id: RecordId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Owned delivery dates. Order is caller-supplied on save; loads always
    /// come back ascending by delivery date.
    pub delivery_dates: Vec<DeliveryDate>,
}

impl CourseSchedule {
    /// Creates an unsaved schedule aggregate.
    pub fn new(
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        delivery_dates: Vec<DeliveryDate>,
    ) -> Self {
        Self {
            id: RecordId::New,
            start_date,
            end_date,
            delivery_dates,
        }
    }

    /// Converts stored rows into the domain aggregate at the repository boundary.
    ///
    /// # Arguments
    /// - `schedule` - The schedule row
    /// - `deliveries` - Its delivery rows, already sorted by the query
    ///
    /// # Returns
    /// - `Ok(CourseSchedule)` - The converted aggregate
    /// - `Err(DbErr)` - A stored epoch value is outside chrono's representable range
    pub fn from_entity(
        schedule: entity::schedule::Model,
        deliveries: Vec<entity::delivery::Model>,
    ) -> Result<Self, DbErr> {
        let delivery_dates = deliveries
            .into_iter()
            .map(DeliveryDate::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: RecordId::Persisted(schedule.id),
            start_date: datetime_from_epoch(schedule.start_date)?,
            end_date: datetime_from_epoch(schedule.end_date)?,
            delivery_dates,
        })
    }

    /// Converts the aggregate to its wire representation.
    pub fn into_dto(self) -> ScheduleDto {
        ScheduleDto {
            id: self.id.value(),
            start_date: self.start_date.timestamp(),
            end_date: self.end_date.timestamp(),
            delivery_dates: self
                .delivery_dates
                .into_iter()
                .map(DeliveryDate::into_dto)
                .collect(),
        }
    }
}

/// A single dated delivery owned by exactly one schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryDate {
    pub id: RecordId,
    pub delivery_date: DateTime<Utc>,
}

impl DeliveryDate {
    /// Creates an unsaved delivery date.
    pub fn new(delivery_date: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::New,
            delivery_date,
        }
    }

    pub fn from_entity(entity: entity::delivery::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: RecordId::Persisted(entity.id),
            delivery_date: datetime_from_epoch(entity.delivery_date)?,
        })
    }

    pub fn into_dto(self) -> DeliveryDateDto {
        DeliveryDateDto {
            id: self.id.value(),
            delivery_date: self.delivery_date.timestamp(),
        }
    }
}

/// Converts stored epoch seconds back into a point in time.
fn datetime_from_epoch(seconds: i64) -> Result<DateTime<Utc>, DbErr> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| DbErr::Custom(format!("stored epoch seconds out of range: {}", seconds)))
}
