use entity::sea_orm_active_enums::Rol;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::util::time::now;

pub struct UsuarioRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UsuarioRepository<'a, C> {
    /// Creates a new instance of [`UsuarioRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an account
    ///
    /// `password_hash` must already be hashed; this layer stores it verbatim.
    pub async fn create(
        &self,
        usuario: &str,
        nombre: &str,
        apellido_paterno: &str,
        password_hash: &str,
        rol: Rol,
    ) -> Result<entity::usuarios::Model, DbErr> {
        let usuario = entity::usuarios::ActiveModel {
            usuario: ActiveValue::Set(usuario.to_string()),
            nombre: ActiveValue::Set(nombre.to_string()),
            apellido_paterno: ActiveValue::Set(apellido_paterno.to_string()),
            password: ActiveValue::Set(password_hash.to_string()),
            rol: ActiveValue::Set(rol),
            fecha_registro: ActiveValue::Set(now()),
            ..Default::default()
        };

        usuario.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        id_usuario: i32,
    ) -> Result<Option<entity::usuarios::Model>, DbErr> {
        entity::prelude::Usuarios::find_by_id(id_usuario)
            .one(self.db)
            .await
    }

    pub async fn get_by_usuario(
        &self,
        usuario: &str,
    ) -> Result<Option<entity::usuarios::Model>, DbErr> {
        entity::prelude::Usuarios::find()
            .filter(entity::usuarios::Column::Usuario.eq(usuario))
            .one(self.db)
            .await
    }

    /// Accounts newest first, optionally of a single role
    pub async fn list(&self, rol: Option<Rol>) -> Result<Vec<entity::usuarios::Model>, DbErr> {
        let mut query = entity::prelude::Usuarios::find();
        if let Some(rol) = rol {
            query = query.filter(entity::usuarios::Column::Rol.eq(rol));
        }

        query
            .order_by_desc(entity::usuarios::Column::FechaRegistro)
            .order_by_desc(entity::usuarios::Column::IdUsuario)
            .all(self.db)
            .await
    }

    pub async fn update_password(
        &self,
        id_usuario: i32,
        password_hash: &str,
    ) -> Result<Option<entity::usuarios::Model>, DbErr> {
        let usuario = match self.get_by_id(id_usuario).await? {
            Some(usuario) => usuario,
            None => return Ok(None),
        };

        let mut usuario_am = usuario.into_active_model();
        usuario_am.password = ActiveValue::Set(password_hash.to_string());

        let usuario = usuario_am.update(self.db).await?;

        Ok(Some(usuario))
    }

    pub async fn update_rol(
        &self,
        id_usuario: i32,
        rol: Rol,
    ) -> Result<Option<entity::usuarios::Model>, DbErr> {
        let usuario = match self.get_by_id(id_usuario).await? {
            Some(usuario) => usuario,
            None => return Ok(None),
        };

        let mut usuario_am = usuario.into_active_model();
        usuario_am.rol = ActiveValue::Set(rol);

        let usuario = usuario_am.update(self.db).await?;

        Ok(Some(usuario))
    }

    /// Replaces name, surname and role, and the password hash when one is given
    pub async fn update_profile(
        &self,
        id_usuario: i32,
        nombre: &str,
        apellido_paterno: &str,
        rol: Rol,
        password_hash: Option<&str>,
    ) -> Result<Option<entity::usuarios::Model>, DbErr> {
        let usuario = match self.get_by_id(id_usuario).await? {
            Some(usuario) => usuario,
            None => return Ok(None),
        };

        let mut usuario_am = usuario.into_active_model();
        usuario_am.nombre = ActiveValue::Set(nombre.to_string());
        usuario_am.apellido_paterno = ActiveValue::Set(apellido_paterno.to_string());
        usuario_am.rol = ActiveValue::Set(rol);
        if let Some(password_hash) = password_hash {
            usuario_am.password = ActiveValue::Set(password_hash.to_string());
        }

        let usuario = usuario_am.update(self.db).await?;

        Ok(Some(usuario))
    }

    /// Deletes an account
    ///
    /// Fails with a foreign key error while rentals or sales reference the account.
    pub async fn delete(&self, id_usuario: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Usuarios::delete_by_id(id_usuario)
            .exec(self.db)
            .await
    }

    pub async fn count(&self, rol: Option<Rol>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Usuarios::find();
        if let Some(rol) = rol {
            query = query.filter(entity::usuarios::Column::Rol.eq(rol));
        }

        query.count(self.db).await
    }

    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        Ok(self.count(Some(Rol::Admin)).await? > 0)
    }

    /// Whether any rental or sale was made or cancelled by the account
    pub async fn has_movements(&self, id_usuario: i32) -> Result<bool, DbErr> {
        let rentas = entity::prelude::Rentas::find()
            .filter(entity::rentas::Column::IdUsuario.eq(id_usuario))
            .count(self.db)
            .await?;
        if rentas > 0 {
            return Ok(true);
        }

        let ventas = entity::prelude::Ventas::find()
            .filter(
                Condition::any()
                    .add(entity::ventas::Column::UsuarioId.eq(id_usuario))
                    .add(entity::ventas::Column::CanceladaPor.eq(id_usuario)),
            )
            .count(self.db)
            .await?;

        Ok(ventas > 0)
    }
}
