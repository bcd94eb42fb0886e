//! Fixtures that hand each test a freshly migrated database.

use super::cluster::{BoxError, PostgresCluster, TemporaryDatabase, shared_cluster};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use mockable::DefaultClock;
use rstest::fixture;
use taskward::config::{DatabaseConfig, PgPool};
use taskward::identity::domain::{EmailAddress, User};
use taskward::task::domain::TaskId;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Schema applied to the template database.
pub const SCHEMA_SQL: &str =
    include_str!("../../migrations/2025-08-04-141046_create_users_and_tasks/up.sql");

/// Template database carrying the migrated schema.
pub const TEMPLATE_DB: &str = "taskward_test_template";

/// Per-test database with a pool and a runtime to drive async adapters.
pub struct TestDatabase {
    pub pool: PgPool,
    rt: Runtime,
    _database: TemporaryDatabase,
}

impl TestDatabase {
    /// Runs an adapter future to completion.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.rt.block_on(future)
    }

    /// Inserts a user row so that tasks can reference it.
    pub fn insert_user(&self, email: &str) -> Result<User, BoxError> {
        let user = User::new(EmailAddress::new(email)?, &DefaultClock);
        let mut conn = self.pool.get()?;
        diesel::sql_query("INSERT INTO users (id, email, created_at) VALUES ($1, $2, $3)")
            .bind::<diesel::sql_types::Uuid, _>(user.id().into_inner())
            .bind::<diesel::sql_types::Text, _>(user.email().as_str())
            .bind::<diesel::sql_types::Timestamptz, _>(user.created_at())
            .execute(&mut *conn)?;
        Ok(user)
    }

    /// Reads the raw `title` column, bypassing the adapter.
    pub fn stored_title(&self, id: TaskId) -> Result<Option<String>, BoxError> {
        #[derive(diesel::QueryableByName)]
        struct TitleRow {
            #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
            title: Option<String>,
        }

        let mut conn = self.pool.get()?;
        let row = diesel::sql_query("SELECT title FROM tasks WHERE id = $1")
            .bind::<diesel::sql_types::Uuid, _>(id.into_inner())
            .get_result::<TitleRow>(&mut *conn)?;
        Ok(row.title)
    }
}

fn apply_schema(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url)?;
    conn.batch_execute(SCHEMA_SQL)?;
    Ok(())
}

fn prepare(cluster: PostgresCluster) -> Result<TestDatabase, BoxError> {
    cluster.ensure_template_exists(TEMPLATE_DB, apply_schema)?;
    let database = cluster.temporary_database_from_template(
        &format!("taskward_test_{}", Uuid::new_v4().simple()),
        TEMPLATE_DB,
    )?;
    let pool = DatabaseConfig {
        url: database.url().to_owned(),
        max_connections: 2,
    }
    .connect()?;
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    Ok(TestDatabase {
        pool,
        rt,
        _database: database,
    })
}

/// Provides a migrated database, or `None` when no cluster can run here.
#[fixture]
pub fn database() -> Option<TestDatabase> {
    let cluster = shared_cluster()?;
    Some(prepare(cluster).expect("test database setup"))
}
