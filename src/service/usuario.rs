use entity::sea_orm_active_enums::Rol;
use sea_orm::DatabaseConnection;

use crate::{
    data::usuario::UsuarioRepository,
    error::{auth::AuthError, constraint::ConstraintError, validation::ValidationError, Error},
    model::{
        db::UsuarioModel,
        usuario::{NewUsuario, UsuarioUpdate},
    },
    util::{
        password::{hash_password, verify_password},
        validation::{validate_nombre, validate_password, validate_usuario},
    },
};

pub struct UsuarioService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsuarioService<'a> {
    /// Creates a new instance of [`UsuarioService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an account, storing an Argon2 hash of the password
    ///
    /// # Returns
    /// - `Ok(UsuarioModel)`: The stored account
    /// - `Err(Error::ValidationError(_))`: Invalid username, password or name
    /// - `Err(Error::ConstraintError(ConstraintError::Unique(_)))`: Username already taken
    pub async fn register(&self, usuario: NewUsuario) -> Result<UsuarioModel, Error> {
        let username = validate_usuario(&usuario.usuario)?;
        validate_password(&usuario.password)?;
        let nombre = validate_nombre("nombre", &usuario.nombre)?;
        let apellido_paterno = validate_nombre("apellido_paterno", &usuario.apellido_paterno)?;

        let password_hash = hash_off_thread(usuario.password).await?;

        let usuario_repo = UsuarioRepository::new(self.db);
        let usuario = usuario_repo
            .create(
                &username,
                &nombre,
                &apellido_paterno,
                &password_hash,
                usuario.rol,
            )
            .await?;

        tracing::info!(
            id_usuario = usuario.id_usuario,
            usuario = %usuario.usuario,
            rol = ?usuario.rol,
            "Registered user"
        );

        Ok(usuario)
    }

    /// Checks a username and password
    ///
    /// An unknown username and a wrong password both return
    /// [`AuthError::InvalidCredentials`] after the same amount of Argon2 work.
    pub async fn authenticate(&self, usuario: &str, password: &str) -> Result<UsuarioModel, Error> {
        let usuario_repo = UsuarioRepository::new(self.db);

        let Some(found) = usuario_repo.get_by_usuario(usuario.trim()).await? else {
            // Hashing costs one Argon2 run, as a verification does
            hash_off_thread(password.to_string()).await?;
            tracing::debug!(usuario, "Login attempt for unknown user");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_off_thread(password, &found.password).await? {
            tracing::debug!(id_usuario = found.id_usuario, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(found)
    }

    /// Replaces the password after checking the current one
    pub async fn change_password(
        &self,
        id_usuario: i32,
        actual: &str,
        nueva: &str,
    ) -> Result<UsuarioModel, Error> {
        let usuario_repo = UsuarioRepository::new(self.db);

        let usuario = usuario_repo
            .get_by_id(id_usuario)
            .await?
            .ok_or_else(|| Error::not_found("Usuario", id_usuario))?;

        if !verify_off_thread(actual, &usuario.password).await? {
            return Err(AuthError::InvalidCredentials.into());
        }
        validate_password(nueva)?;

        let password_hash = hash_off_thread(nueva.to_string()).await?;
        let usuario = usuario_repo
            .update_password(id_usuario, &password_hash)
            .await?
            .ok_or_else(|| Error::not_found("Usuario", id_usuario))?;

        tracing::info!(id_usuario, "Changed password");

        Ok(usuario)
    }

    /// Changes the role of an account
    ///
    /// The last remaining admin cannot be demoted.
    pub async fn change_role(&self, id_usuario: i32, rol: Rol) -> Result<UsuarioModel, Error> {
        let usuario_repo = UsuarioRepository::new(self.db);

        let usuario = usuario_repo
            .get_by_id(id_usuario)
            .await?
            .ok_or_else(|| Error::not_found("Usuario", id_usuario))?;
        self.ensure_not_last_admin(&usuario, Some(rol)).await?;

        let usuario = usuario_repo
            .update_rol(id_usuario, rol)
            .await?
            .ok_or_else(|| Error::not_found("Usuario", id_usuario))?;

        tracing::info!(id_usuario, rol = ?usuario.rol, "Changed role");

        Ok(usuario)
    }

    /// Edits name, surname and role, and the password when a new one is given
    ///
    /// Unlike [`Self::change_password`] the current password is not asked for; this is the
    /// administrator's edit of an account.
    ///
    /// # Returns
    /// - `Ok(UsuarioModel)`: The updated account
    /// - `Err(Error::ValidationError(_))`: Invalid name or password, or the edit would demote
    ///   the last admin
    /// - `Err(Error::NotFound { .. })`: No account with that ID
    pub async fn update(
        &self,
        id_usuario: i32,
        update: UsuarioUpdate,
    ) -> Result<UsuarioModel, Error> {
        let nombre = validate_nombre("nombre", &update.nombre)?;
        let apellido_paterno = validate_nombre("apellido_paterno", &update.apellido_paterno)?;
        if let Some(password) = &update.password {
            validate_password(password)?;
        }

        let usuario_repo = UsuarioRepository::new(self.db);

        let usuario = usuario_repo
            .get_by_id(id_usuario)
            .await?
            .ok_or_else(|| Error::not_found("Usuario", id_usuario))?;
        self.ensure_not_last_admin(&usuario, Some(update.rol))
            .await?;

        let password_hash = match update.password {
            Some(password) => Some(hash_off_thread(password).await?),
            None => None,
        };

        let usuario = usuario_repo
            .update_profile(
                id_usuario,
                &nombre,
                &apellido_paterno,
                update.rol,
                password_hash.as_deref(),
            )
            .await?
            .ok_or_else(|| Error::not_found("Usuario", id_usuario))?;

        tracing::info!(
            id_usuario,
            rol = ?usuario.rol,
            password_changed = password_hash.is_some(),
            "Updated user"
        );

        Ok(usuario)
    }

    /// Deletes an account with no rentals or sales
    ///
    /// # Returns
    /// - `Ok(())`: The account was deleted
    /// - `Err(Error::NotFound { .. })`: No account with that ID
    /// - `Err(Error::ValidationError(_))`: The account is the last admin
    /// - `Err(Error::ConstraintError(ConstraintError::StillReferenced { .. }))`: Rentals or
    ///   sales were made or cancelled by the account
    pub async fn remove(&self, id_usuario: i32) -> Result<(), Error> {
        let usuario_repo = UsuarioRepository::new(self.db);

        let usuario = usuario_repo
            .get_by_id(id_usuario)
            .await?
            .ok_or_else(|| Error::not_found("Usuario", id_usuario))?;
        self.ensure_not_last_admin(&usuario, None).await?;

        if usuario_repo.has_movements(id_usuario).await? {
            return Err(ConstraintError::StillReferenced {
                entity: "Usuario",
                key: id_usuario.to_string(),
                referenced_by: "rentas or ventas",
            }
            .into());
        }

        usuario_repo.delete(id_usuario).await?;

        tracing::info!(id_usuario, usuario = %usuario.usuario, "Removed user");

        Ok(())
    }

    /// Loads an account and fails unless it has the `admin` role
    pub async fn require_admin(&self, id_usuario: i32) -> Result<UsuarioModel, Error> {
        let usuario_repo = UsuarioRepository::new(self.db);

        let usuario = usuario_repo
            .get_by_id(id_usuario)
            .await?
            .ok_or_else(|| Error::not_found("Usuario", id_usuario))?;
        ensure_admin(&usuario)?;

        Ok(usuario)
    }

    /// Fails when `usuario` is the only admin and would stop being one
    ///
    /// `rol` is the role it keeps, `None` when the account is deleted.
    async fn ensure_not_last_admin(
        &self,
        usuario: &UsuarioModel,
        rol: Option<Rol>,
    ) -> Result<(), Error> {
        if usuario.rol != Rol::Admin || rol == Some(Rol::Admin) {
            return Ok(());
        }

        let admins = UsuarioRepository::new(self.db)
            .count(Some(Rol::Admin))
            .await?;
        if admins <= 1 {
            return Err(ValidationError::field("rol", "the last admin must remain").into());
        }

        Ok(())
    }
}

fn ensure_admin(usuario: &UsuarioModel) -> Result<(), AuthError> {
    match usuario.rol {
        Rol::Admin => Ok(()),
        Rol::Empleado => Err(AuthError::AdminRequired(usuario.id_usuario)),
    }
}

async fn hash_off_thread(password: String) -> Result<String, Error> {
    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| Error::InternalError(format!("Password hashing task failed: {}", e)))??;

    Ok(hash)
}

async fn verify_off_thread(password: &str, stored_hash: &str) -> Result<bool, Error> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();

    tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| Error::InternalError(format!("Password verification task failed: {}", e)))
}
