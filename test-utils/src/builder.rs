use entity::prelude::*;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, indexes, and raw statements
/// (for triggers), then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Course, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Course)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after the tables exist.
    indexes: Vec<IndexCreateStatement>,
    /// Raw SQL statements executed last, used for trigger creation which
    /// SeaORM's schema builder does not model.
    statements: Vec<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty schema configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to the test database schema.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement, executed after table creation
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds a raw SQL statement to run after tables and indexes exist.
    ///
    /// Used for the delivery window triggers, which have no schema-builder
    /// representation.
    ///
    /// # Arguments
    /// - `statement` - Raw SQL executed unprepared during `build()`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
        self.statements.push(statement.into());
        self
    }

    /// Adds all tables and constraints required for schedule operations.
    ///
    /// This convenience method adds, in dependency order:
    /// - Schedule
    /// - Delivery
    /// - the unique index on `(schedule_id, delivery_date)`
    /// - the insert/update window-containment triggers
    ///
    /// The constraints come from the migration crate, so tests exercise the
    /// same storage-level validation as a migrated production database.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_schedule_tables(self) -> Self {
        self.with_table(Schedule)
            .with_table(Delivery)
            .with_index(migration::delivery_date_unique_index())
            .with_statement(migration::delivery_insert_trigger())
            .with_statement(migration::delivery_update_trigger())
    }

    /// Builds and initializes the test context with the configured schema.
    ///
    /// Creates an in-memory SQLite database connection, then executes all CREATE TABLE
    /// statements, indexes, and raw statements in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database ready
    /// - `Err(TestError::Database)` - Failed to connect to database or apply schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;
        setup.with_statements(self.statements).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
