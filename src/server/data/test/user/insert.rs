use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::UserRepository, model::user::CreateUserParam};

#[tokio::test]
async fn inserts_user_and_counts_it() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    assert_eq!(repo.count().await.unwrap(), 0);

    let user = repo
        .insert(CreateUserParam {
            name: "admin".to_string(),
            email: "sys@admin.org".to_string(),
            password: "digest".to_string(),
            status: "confirmed".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.name, "admin");
    assert_eq!(user.email, "sys@admin.org");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn counts_existing_users() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await.unwrap();
    factory::user::create_user(db).await.unwrap();

    assert_eq!(UserRepository::new(db).count().await.unwrap(), 2);
}
