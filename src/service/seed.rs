//! Initial admin account.
//!
//! The admin is created from [`Config`] on startup instead of a migration so that no password,
//! plaintext or hashed, lives in the schema history.

use entity::sea_orm_active_enums::Rol;
use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    data::usuario::UsuarioRepository,
    error::Error,
    model::{db::UsuarioModel, usuario::NewUsuario},
    service::usuario::UsuarioService,
};

/// Creates the admin account described by `config` unless an admin already exists
///
/// # Returns
/// - `Ok(Some(UsuarioModel))`: The admin was created
/// - `Ok(None)`: An admin already exists, or no admin password is configured
/// - `Err(Error::ValidationError(_))`: The configured username or password is invalid
pub async fn seed_admin(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<Option<UsuarioModel>, Error> {
    if UsuarioRepository::new(db).admin_exists().await? {
        tracing::debug!("Admin account already exists, skipping seed");
        return Ok(None);
    }

    let Some(password) = config.admin_password.as_deref() else {
        tracing::warn!("No admin account exists and MASKNGO_ADMIN_PASSWORD is not set");
        return Ok(None);
    };

    let admin = UsuarioService::new(db)
        .register(NewUsuario {
            usuario: config.admin_username.clone(),
            nombre: "Administrador".to_string(),
            apellido_paterno: "Sistema".to_string(),
            password: password.to_string(),
            rol: Rol::Admin,
        })
        .await?;

    tracing::info!(usuario = %admin.usuario, "Seeded admin account");

    Ok(Some(admin))
}

#[cfg(test)]
mod tests {
    use crate::config::Config;

    fn config(admin_password: Option<&str>) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            admin_username: "admin".to_string(),
            admin_password: admin_password.map(str::to_string),
            max_connections: 1,
        }
    }

    mod seed_admin {
        use entity::sea_orm_active_enums::Rol;
        use maskngo_test_utils::prelude::*;

        use super::config;
        use crate::{
            data::usuario::UsuarioRepository,
            error::Error,
            service::{seed::seed_admin, usuario::UsuarioService},
        };

        /// Expect the admin to be created once and to log in with the configured password
        #[tokio::test]
        async fn seeds_admin_once() -> Result<(), TestError> {
            let test = test_setup_with_schema!()?;
            let config = config(Some("admin123"));

            let first = seed_admin(&test.state.db, &config).await.unwrap();
            let second = seed_admin(&test.state.db, &config).await.unwrap();

            let admin = first.unwrap();
            assert_eq!(admin.rol, Rol::Admin);
            assert!(second.is_none());
            assert_eq!(
                UsuarioRepository::new(&test.state.db)
                    .count(Some(Rol::Admin))
                    .await?,
                1
            );
            assert!(UsuarioService::new(&test.state.db)
                .authenticate("admin", "admin123")
                .await
                .is_ok());

            Ok(())
        }

        #[tokio::test]
        async fn skips_without_password() -> Result<(), TestError> {
            let test = test_setup_with_schema!()?;

            let result = seed_admin(&test.state.db, &config(None)).await.unwrap();

            assert!(result.is_none());
            assert!(!UsuarioRepository::new(&test.state.db).admin_exists().await?);

            Ok(())
        }

        /// Expect an existing admin to be left alone even with a password configured
        #[tokio::test]
        async fn skips_when_admin_exists() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_schema()
                .with_mock_usuario("dueno", Rol::Admin)
                .build()
                .await?;

            let result = seed_admin(&test.state.db, &config(Some("admin123"))).await.unwrap();

            assert!(result.is_none());
            assert!(UsuarioRepository::new(&test.state.db)
                .get_by_usuario("admin")
                .await?
                .is_none());

            Ok(())
        }

        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = seed_admin(&test.state.db, &config(Some("admin123"))).await;

            assert!(matches!(result, Err(Error::DbErr(_))));

            Ok(())
        }
    }
}
