use test_utils::{builder::TestBuilder, factory};

use crate::server::data::CourseProjectRepository;

#[tokio::test]
async fn finds_course_project_by_id() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseProject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::course_project::CourseProjectFactory::new(db)
        .project_name("scheduler")
        .course_name("Software Engineering")
        .build()
        .await
        .unwrap();

    let project = CourseProjectRepository::new(db)
        .find_by_id(row.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(project.project_name, "scheduler");
    assert_eq!(project.course_name, "Software Engineering");
}

#[tokio::test]
async fn returns_none_for_unknown_id() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseProject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = CourseProjectRepository::new(db).find_by_id(7).await.unwrap();

    assert!(project.is_none());
}
