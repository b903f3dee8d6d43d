use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    tracing::debug!(max_connections = config.max_connections, "Connected to database");

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(db)
}

#[cfg(test)]
mod tests {
    use sea_orm::{EntityTrait, PaginatorTrait};

    use crate::{config::Config, startup::connect_to_database};

    fn sqlite_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            admin_username: "admin".to_string(),
            admin_password: None,
            max_connections: 1,
        }
    }

    /// Expect the schema and configuration seed rows after connecting
    #[tokio::test]
    async fn connects_and_migrates() {
        let db = connect_to_database(&sqlite_config()).await.unwrap();

        let seeded = entity::prelude::Configuracion::find()
            .count(&db)
            .await
            .unwrap();
        assert_eq!(seeded, 2);
    }

    /// Expect Error for an unreachable database URL
    #[tokio::test]
    async fn fails_for_invalid_url() {
        let mut config = sqlite_config();
        config.database_url = "sqlite:///nonexistent-dir/maskngo.db".to_string();

        let result = connect_to_database(&config).await;

        assert!(result.is_err());
    }
}
