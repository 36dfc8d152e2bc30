pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_course_table;
mod m20250601_000003_create_course_project_table;
mod m20250601_000004_create_schedule_table;
mod m20250601_000005_create_delivery_table;
mod m20250601_000006_create_delivery_window_triggers;

pub use m20250601_000005_create_delivery_table::delivery_date_unique_index;
pub use m20250601_000006_create_delivery_window_triggers::{
    delivery_insert_trigger, delivery_update_trigger, DELIVERY_WINDOW_CHECK_MESSAGE,
};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_course_table::Migration),
            Box::new(m20250601_000003_create_course_project_table::Migration),
            Box::new(m20250601_000004_create_schedule_table::Migration),
            Box::new(m20250601_000005_create_delivery_table::Migration),
            Box::new(m20250601_000006_create_delivery_window_triggers::Migration),
        ]
    }
}
