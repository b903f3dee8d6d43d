use migration::{Migrator, MigratorTrait};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_DATABASE_URL, error::TestError};

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect(TEST_DATABASE_URL).await?;

        Ok(TestSetup {
            state: TestAppState { db },
        })
    }

    /// Create tables straight from entity definitions.
    ///
    /// Tables built this way carry no column defaults, so rows must be inserted with every
    /// field set. Use [`TestSetup::with_migrations`] when a test depends on defaults or the
    /// seeded configuration rows.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Apply every migration, giving the test the production schema including seed rows.
    pub async fn with_migrations(&self) -> Result<(), TestError> {
        Migrator::up(&self.state.db, None).await?;

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_schema {
    () => {{
        async {
            let setup = $crate::TestSetup::new().await?;
            setup.with_migrations().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
