use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::ScheduleRepository,
    data::test::schedule::date,
    model::schedule::RecordId,
};

/// A missing identity is `Ok(None)`, not an error.
#[tokio::test]
async fn returns_none_for_missing_schedule() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let loaded = ScheduleRepository::new(db).load(42).await.unwrap();

    assert!(loaded.is_none());
}

/// Window bounds stored as epoch seconds come back as the same points in time.
#[tokio::test]
async fn converts_stored_epoch_seconds() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::schedule::create_schedule(db).await.unwrap();

    let loaded = ScheduleRepository::new(db)
        .load(row.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(loaded.id, RecordId::Persisted(row.id));
    assert_eq!(loaded.start_date, date(2022, 1, 1));
    assert_eq!(loaded.end_date, date(2022, 2, 1));
    assert!(loaded.delivery_dates.is_empty());
}

/// Deliveries load ascending by date no matter the insertion order.
#[tokio::test]
async fn loads_deliveries_ascending_by_date() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::schedule::create_schedule(db).await.unwrap();

    // Deliberately out of order.
    factory::delivery::create_delivery(db, row.id, date(2022, 1, 3).timestamp())
        .await
        .unwrap();
    factory::delivery::create_delivery(db, row.id, date(2022, 1, 1).timestamp())
        .await
        .unwrap();
    factory::delivery::create_delivery(db, row.id, date(2022, 1, 2).timestamp())
        .await
        .unwrap();

    let loaded = ScheduleRepository::new(db)
        .load(row.id)
        .await
        .unwrap()
        .unwrap();

    let dates: Vec<_> = loaded
        .delivery_dates
        .iter()
        .map(|d| d.delivery_date)
        .collect();
    assert_eq!(dates, vec![date(2022, 1, 1), date(2022, 1, 2), date(2022, 1, 3)]);
    assert!(loaded.delivery_dates.iter().all(|d| !d.id.is_new()));
}

/// Deliveries of other schedules never leak into a loaded aggregate.
#[tokio::test]
async fn loads_only_own_deliveries() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::schedule::create_schedule(db).await.unwrap();
    let second = factory::schedule::create_schedule(db).await.unwrap();

    factory::delivery::create_delivery(db, first.id, date(2022, 1, 5).timestamp())
        .await
        .unwrap();
    factory::delivery::create_delivery(db, second.id, date(2022, 1, 6).timestamp())
        .await
        .unwrap();

    let loaded = ScheduleRepository::new(db)
        .load(first.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(loaded.delivery_dates.len(), 1);
    assert_eq!(loaded.delivery_dates[0].delivery_date, date(2022, 1, 5));
}
