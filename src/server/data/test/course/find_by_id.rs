use test_utils::{builder::TestBuilder, factory};

use crate::server::data::CourseRepository;

#[tokio::test]
async fn finds_course_by_id() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::course::CourseFactory::new(db)
        .semester("SS25")
        .course_name("Distributed Systems")
        .build()
        .await
        .unwrap();

    let course = CourseRepository::new(db)
        .find_by_id(row.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(course.semester, "SS25");
    assert_eq!(course.course_name, "Distributed Systems");
}

#[tokio::test]
async fn returns_none_for_unknown_id() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = CourseRepository::new(db).find_by_id(42).await.unwrap();

    assert!(course.is_none());
}
