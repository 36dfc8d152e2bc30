//! Registered methods of the course category.
//!
//! Besides the plain accessors, courses expose the schedule operations:
//! `createSchedule` persists a new window with its delivery dates through
//! the schedule repository, and `getSchedule` loads one by identity.

use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    data::ScheduleRepository,
    dispatch::{
        args,
        registry::{MethodFuture, MethodRegistry},
    },
    model::{
        course::Course,
        schedule::{CourseSchedule, DeliveryDate},
    },
};

pub(super) fn registry() -> MethodRegistry<Course> {
    let mut methods = MethodRegistry::new();

    methods.register("getSemester", get_semester);
    methods.register("getCourseName", get_course_name);
    methods.register("createSchedule", create_schedule);
    methods.register("getSchedule", get_schedule);

    methods
}

fn get_semester<'a>(
    course: &'a Course,
    _args: &'a [Value],
    _db: &'a DatabaseConnection,
) -> MethodFuture<'a> {
    Box::pin(async move { Ok(Value::String(course.semester.clone())) })
}

fn get_course_name<'a>(
    course: &'a Course,
    _args: &'a [Value],
    _db: &'a DatabaseConnection,
) -> MethodFuture<'a> {
    Box::pin(async move { Ok(Value::String(course.course_name.clone())) })
}

/// `createSchedule(startDate, endDate, [deliveryDates])`, all epoch seconds.
///
/// Builds an unsaved aggregate and hands it to the schedule repository; a
/// constraint violation (date outside the window, duplicate date) comes back
/// as this method's own failure.
fn create_schedule<'a>(
    _course: &'a Course,
    args: &'a [Value],
    db: &'a DatabaseConnection,
) -> MethodFuture<'a> {
    Box::pin(async move {
        let start_date = args::datetime("createSchedule", args, 0)?;
        let end_date = args::datetime("createSchedule", args, 1)?;
        let delivery_dates = args::datetime_list("createSchedule", args, 2)?
            .into_iter()
            .map(DeliveryDate::new)
            .collect();

        let schedule = CourseSchedule::new(start_date, end_date, delivery_dates);
        let saved = ScheduleRepository::new(db).save(schedule).await?;

        Ok(serde_json::to_value(saved.into_dto())?)
    })
}

/// `getSchedule(id)`. Resolves to `null` when no schedule has that identity.
fn get_schedule<'a>(
    _course: &'a Course,
    args: &'a [Value],
    db: &'a DatabaseConnection,
) -> MethodFuture<'a> {
    Box::pin(async move {
        let id = args::id("getSchedule", args, 0)?;

        match ScheduleRepository::new(db).load(id).await? {
            Some(schedule) => Ok(serde_json::to_value(schedule.into_dto())?),
            None => Ok(Value::Null),
        }
    })
}
