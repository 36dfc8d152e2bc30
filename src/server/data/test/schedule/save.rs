use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::ScheduleRepository,
    data::test::schedule::date,
    error::schedule::ScheduleError,
    model::schedule::{CourseSchedule, DeliveryDate, RecordId},
};

/// Saving a new aggregate assigns identities to the parent and every child.
#[tokio::test]
async fn assigns_identities_on_first_save() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let schedule = CourseSchedule::new(
        date(2022, 1, 1),
        date(2022, 2, 1),
        vec![
            DeliveryDate::new(date(2022, 1, 10)),
            DeliveryDate::new(date(2022, 1, 5)),
        ],
    );

    let saved = ScheduleRepository::new(db).save(schedule).await.unwrap();

    assert!(!saved.id.is_new());
    assert!(saved.delivery_dates.iter().all(|d| !d.id.is_new()));

    // Caller-supplied order survives the save result itself.
    assert_eq!(saved.delivery_dates[0].delivery_date, date(2022, 1, 10));
    assert_eq!(saved.delivery_dates[1].delivery_date, date(2022, 1, 5));
}

/// A saved aggregate reloads with the same window and children, ascending.
#[tokio::test]
async fn reloads_saved_aggregate() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ScheduleRepository::new(db);

    let saved = repo
        .save(CourseSchedule::new(
            date(2022, 1, 1),
            date(2022, 2, 1),
            vec![
                DeliveryDate::new(date(2022, 1, 20)),
                DeliveryDate::new(date(2022, 1, 2)),
            ],
        ))
        .await
        .unwrap();

    let loaded = repo
        .load(saved.id.value().unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(loaded.start_date, date(2022, 1, 1));
    assert_eq!(loaded.end_date, date(2022, 2, 1));
    let dates: Vec<_> = loaded
        .delivery_dates
        .iter()
        .map(|d| d.delivery_date)
        .collect();
    assert_eq!(dates, vec![date(2022, 1, 2), date(2022, 1, 20)]);
}

/// Saving a persisted aggregate updates in place and keeps identities stable.
#[tokio::test]
async fn updates_persisted_aggregate_in_place() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ScheduleRepository::new(db);

    let mut saved = repo
        .save(CourseSchedule::new(
            date(2022, 1, 1),
            date(2022, 2, 1),
            vec![DeliveryDate::new(date(2022, 1, 10))],
        ))
        .await
        .unwrap();

    let schedule_id = saved.id;
    let delivery_id = saved.delivery_dates[0].id;

    // Widen the window and move the delivery inside the new bounds.
    saved.end_date = date(2022, 3, 1);
    saved.delivery_dates[0].delivery_date = date(2022, 2, 15);

    let updated = repo.save(saved).await.unwrap();

    assert_eq!(updated.id, schedule_id);
    assert_eq!(updated.delivery_dates[0].id, delivery_id);

    let loaded = repo
        .load(schedule_id.value().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.end_date, date(2022, 3, 1));
    assert_eq!(loaded.delivery_dates[0].delivery_date, date(2022, 2, 15));
    assert_eq!(loaded.delivery_dates[0].id, delivery_id);
}

/// A persisted aggregate can gain new deliveries on a later save.
#[tokio::test]
async fn inserts_new_children_on_update() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ScheduleRepository::new(db);

    let mut saved = repo
        .save(CourseSchedule::new(
            date(2022, 1, 1),
            date(2022, 2, 1),
            vec![DeliveryDate::new(date(2022, 1, 10))],
        ))
        .await
        .unwrap();

    saved.delivery_dates.push(DeliveryDate::new(date(2022, 1, 15)));

    let updated = repo.save(saved).await.unwrap();
    assert!(updated.delivery_dates.iter().all(|d| !d.id.is_new()));

    let loaded = repo
        .load(updated.id.value().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.delivery_dates.len(), 2);
}

/// A delivery before the window start is rejected by the storage trigger.
#[tokio::test]
async fn rejects_delivery_before_window() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ScheduleRepository::new(db)
        .save(CourseSchedule::new(
            date(2022, 1, 1),
            date(2022, 2, 1),
            vec![DeliveryDate::new(date(2021, 12, 31))],
        ))
        .await;

    assert!(matches!(result, Err(ScheduleError::DeliveryOutsideWindow)));
}

/// A delivery after the window end is rejected by the storage trigger.
#[tokio::test]
async fn rejects_delivery_after_window() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ScheduleRepository::new(db)
        .save(CourseSchedule::new(
            date(2022, 1, 1),
            date(2022, 2, 1),
            vec![DeliveryDate::new(date(2022, 2, 2))],
        ))
        .await;

    assert!(matches!(result, Err(ScheduleError::DeliveryOutsideWindow)));
}

/// The window bounds themselves are valid delivery dates.
#[tokio::test]
async fn accepts_deliveries_on_window_bounds() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let saved = ScheduleRepository::new(db)
        .save(CourseSchedule::new(
            date(2022, 1, 1),
            date(2022, 2, 1),
            vec![
                DeliveryDate::new(date(2022, 1, 1)),
                DeliveryDate::new(date(2022, 2, 1)),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(saved.delivery_dates.len(), 2);
}

/// Two deliveries of one schedule sharing a date violate the unique index.
#[tokio::test]
async fn rejects_duplicate_delivery_dates() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ScheduleRepository::new(db)
        .save(CourseSchedule::new(
            date(2022, 1, 1),
            date(2022, 2, 1),
            vec![
                DeliveryDate::new(date(2022, 1, 10)),
                DeliveryDate::new(date(2022, 1, 10)),
            ],
        ))
        .await;

    assert!(matches!(result, Err(ScheduleError::DuplicateDelivery)));
}

/// The same date under two different schedules is fine; uniqueness is scoped
/// per schedule.
#[tokio::test]
async fn allows_same_date_across_schedules() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ScheduleRepository::new(db);

    repo.save(CourseSchedule::new(
        date(2022, 1, 1),
        date(2022, 2, 1),
        vec![DeliveryDate::new(date(2022, 1, 10))],
    ))
    .await
    .unwrap();

    let second = repo
        .save(CourseSchedule::new(
            date(2022, 1, 1),
            date(2022, 2, 1),
            vec![DeliveryDate::new(date(2022, 1, 10))],
        ))
        .await;

    assert!(second.is_ok());
}

/// Moving a persisted delivery outside the window fails on update too.
#[tokio::test]
async fn rejects_update_moving_delivery_outside_window() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ScheduleRepository::new(db);

    let mut saved = repo
        .save(CourseSchedule::new(
            date(2022, 1, 1),
            date(2022, 2, 1),
            vec![DeliveryDate::new(date(2022, 1, 10))],
        ))
        .await
        .unwrap();

    saved.delivery_dates[0].delivery_date = date(2022, 6, 1);

    let result = repo.save(saved).await;
    assert!(matches!(result, Err(ScheduleError::DeliveryOutsideWindow)));
}

/// A failed save persists nothing; earlier rows of the same save roll back.
#[tokio::test]
async fn rolls_back_whole_save_on_constraint_violation() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ScheduleRepository::new(db)
        .save(CourseSchedule::new(
            date(2022, 1, 1),
            date(2022, 2, 1),
            vec![
                DeliveryDate::new(date(2022, 1, 5)),
                DeliveryDate::new(date(2022, 5, 1)),
            ],
        ))
        .await;

    assert!(matches!(result, Err(ScheduleError::DeliveryOutsideWindow)));

    assert_eq!(
        entity::prelude::Schedule::find().count(db).await.unwrap(),
        0
    );
    assert_eq!(
        entity::prelude::Delivery::find().count(db).await.unwrap(),
        0
    );
}

/// Inverted windows save fine; no ordering invariant relates the bounds.
/// Every delivery is simply outside such a window.
#[tokio::test]
async fn accepts_inverted_window_without_deliveries() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ScheduleRepository::new(db);

    let saved = repo
        .save(CourseSchedule::new(date(2022, 2, 1), date(2022, 1, 1), vec![]))
        .await
        .unwrap();

    let result = repo
        .save(CourseSchedule {
            id: saved.id,
            start_date: saved.start_date,
            end_date: saved.end_date,
            delivery_dates: vec![DeliveryDate::new(date(2022, 1, 15))],
        })
        .await;

    assert!(matches!(result, Err(ScheduleError::DeliveryOutsideWindow)));
}

/// RecordId drives insert-vs-update; an id field never has a sentinel state.
#[tokio::test]
async fn persisted_id_survives_noop_update() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = ScheduleRepository::new(db);

    let saved = repo
        .save(CourseSchedule::new(date(2022, 1, 1), date(2022, 2, 1), vec![]))
        .await
        .unwrap();

    let resaved = repo.save(saved.clone()).await.unwrap();

    assert_eq!(resaved.id, saved.id);
    assert_eq!(
        entity::prelude::Schedule::find().count(db).await.unwrap(),
        1
    );
}

/// The factory default window matches what the repository writes.
#[tokio::test]
async fn factory_and_repository_agree_on_representation() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::schedule::create_schedule(db).await.unwrap();
    let saved = ScheduleRepository::new(db)
        .save(CourseSchedule::new(date(2022, 1, 1), date(2022, 2, 1), vec![]))
        .await
        .unwrap();

    let loaded_row = ScheduleRepository::new(db)
        .load(row.id)
        .await
        .unwrap()
        .unwrap();
    let loaded_saved = ScheduleRepository::new(db)
        .load(saved.id.value().unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(loaded_row.start_date, loaded_saved.start_date);
    assert_eq!(loaded_row.end_date, loaded_saved.end_date);
}

/// Updating a missing persisted schedule surfaces as a database error, not a
/// silent insert.
#[tokio::test]
async fn update_of_missing_schedule_fails() {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ScheduleRepository::new(db)
        .save(CourseSchedule {
            id: RecordId::Persisted(999),
            start_date: date(2022, 1, 1),
            end_date: date(2022, 2, 1),
            delivery_dates: vec![],
        })
        .await;

    assert!(matches!(result, Err(ScheduleError::Db(_))));
}
