use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

pub struct ConfiguracionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConfiguracionRepository<'a, C> {
    /// Creates a new instance of [`ConfiguracionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a setting, fails with a unique violation if `nombre` already exists
    pub async fn create(
        &self,
        nombre: &str,
        valor: &str,
        descripcion: Option<&str>,
    ) -> Result<entity::configuracion::Model, DbErr> {
        let config = entity::configuracion::ActiveModel {
            nombre_config: ActiveValue::Set(nombre.to_string()),
            valor_config: ActiveValue::Set(valor.to_string()),
            descripcion: ActiveValue::Set(descripcion.map(str::to_string)),
            ..Default::default()
        };

        config.insert(self.db).await
    }

    pub async fn get(&self, nombre: &str) -> Result<Option<entity::configuracion::Model>, DbErr> {
        entity::prelude::Configuracion::find()
            .filter(entity::configuracion::Column::NombreConfig.eq(nombre))
            .one(self.db)
            .await
    }

    /// Only the `Valor_Config` of a setting
    pub async fn get_value(&self, nombre: &str) -> Result<Option<String>, DbErr> {
        entity::prelude::Configuracion::find()
            .select_only()
            .column(entity::configuracion::Column::ValorConfig)
            .filter(entity::configuracion::Column::NombreConfig.eq(nombre))
            .into_tuple::<String>()
            .one(self.db)
            .await
    }

    /// Inserts the setting or replaces its value, touching `Fecha_Modificacion`
    ///
    /// An existing description is kept when `descripcion` is `None`.
    pub async fn upsert(
        &self,
        nombre: &str,
        valor: &str,
        descripcion: Option<&str>,
    ) -> Result<entity::configuracion::Model, DbErr> {
        let config = match self.get(nombre).await? {
            Some(config) => config,
            None => return self.create(nombre, valor, descripcion).await,
        };

        let mut config_am = config.into_active_model();
        config_am.valor_config = ActiveValue::Set(valor.to_string());
        if let Some(descripcion) = descripcion {
            config_am.descripcion = ActiveValue::Set(Some(descripcion.to_string()));
        }
        config_am.fecha_modificacion = ActiveValue::Set(Utc::now().naive_utc());

        config_am.update(self.db).await
    }

    /// All settings ordered by name
    pub async fn list(&self) -> Result<Vec<entity::configuracion::Model>, DbErr> {
        entity::prelude::Configuracion::find()
            .order_by_asc(entity::configuracion::Column::NombreConfig)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, nombre: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Configuracion::delete_many()
            .filter(entity::configuracion::Column::NombreConfig.eq(nombre))
            .exec(self.db)
            .await
    }
}
