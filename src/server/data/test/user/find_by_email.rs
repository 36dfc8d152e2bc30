use test_utils::{builder::TestBuilder, factory};

use crate::server::data::UserRepository;

#[tokio::test]
async fn finds_user_by_email() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::user::UserFactory::new(db)
        .name("Grace")
        .email("grace@example.org")
        .status("confirmed")
        .build()
        .await
        .unwrap();

    let user = UserRepository::new(db)
        .find_by_email("grace@example.org")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(user.id, row.id);
    assert_eq!(user.name, "Grace");
    assert!(user.is_confirmed());
}

#[tokio::test]
async fn returns_none_for_unknown_email() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await.unwrap();

    let user = UserRepository::new(db)
        .find_by_email("nobody@example.org")
        .await
        .unwrap();

    assert!(user.is_none());
}
