//! Database connection and first-run seeding.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::server::{
    config::Config,
    data::UserRepository,
    model::user::CreateUserParam,
    util::hash::hash_password,
};

const DEFAULT_ADMIN_NAME: &str = "admin";
const DEFAULT_ADMIN_EMAIL: &str = "sys@admin.org";
const DEFAULT_ADMIN_PASSWORD: &str = "helloworld";

/// Connects to the database and applies pending migrations.
///
/// # Arguments
/// - `config` - Application configuration carrying the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Migrated, ready-to-use connection
/// - `Err(DbErr)` - Connection or migration failure
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(&config.database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds the default admin account on an empty user table.
///
/// Runs once per fresh database; any existing user suppresses the seed. The
/// password is stored as a digest, never in plain text.
pub async fn seed_default_admin(db: &DatabaseConnection) -> Result<(), DbErr> {
    let repo = UserRepository::new(db);

    if repo.count().await? > 0 {
        return Ok(());
    }

    repo.insert(CreateUserParam {
        name: DEFAULT_ADMIN_NAME.to_string(),
        email: DEFAULT_ADMIN_EMAIL.to_string(),
        password: hash_password(DEFAULT_ADMIN_PASSWORD),
        status: "confirmed".to_string(),
    })
    .await?;

    tracing::info!("Seeded default admin account ({})", DEFAULT_ADMIN_EMAIL);

    Ok(())
}
