use sea_orm_migration::prelude::*;

/// Message raised by the containment triggers. The schedule repository
/// matches on it to classify driver errors; the trigger SQL is built from
/// this constant so the two cannot drift.
pub const DELIVERY_WINDOW_CHECK_MESSAGE: &str =
    "delivery_date must be between start_date and end_date";

/// Rejects inserting a delivery dated outside its schedule's window.
pub fn delivery_insert_trigger() -> String {
    window_check_trigger("delivery_insert_window_check", "INSERT")
}

/// Rejects moving a delivery outside its schedule's window.
pub fn delivery_update_trigger() -> String {
    window_check_trigger("delivery_update_window_check", "UPDATE")
}

fn window_check_trigger(name: &str, event: &str) -> String {
    format!(
        r#"
CREATE TRIGGER IF NOT EXISTS {name}
BEFORE {event} ON delivery
FOR EACH ROW
BEGIN
    SELECT RAISE(ABORT, '{DELIVERY_WINDOW_CHECK_MESSAGE}')
    WHERE NEW.delivery_date < (SELECT start_date FROM schedule WHERE id = NEW.schedule_id)
       OR NEW.delivery_date > (SELECT end_date FROM schedule WHERE id = NEW.schedule_id);
END;
"#
    )
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared(&delivery_insert_trigger()).await?;
        conn.execute_unprepared(&delivery_update_trigger()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared("DROP TRIGGER IF EXISTS delivery_insert_window_check;")
            .await?;
        conn.execute_unprepared("DROP TRIGGER IF EXISTS delivery_update_window_check;")
            .await?;

        Ok(())
    }
}
