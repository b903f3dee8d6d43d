use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Named shop setting, e.g. the late fee charged per overdue rental day.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "configuracion")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id_Config")]
    pub id_config: i32,
    #[sea_orm(
        column_name = "Nombre_Config",
        column_type = "String(StringLen::N(100))",
        unique
    )]
    pub nombre_config: String,
    #[sea_orm(column_name = "Valor_Config", column_type = "Text")]
    pub valor_config: String,
    #[sea_orm(column_name = "Descripcion", column_type = "Text", nullable)]
    pub descripcion: Option<String>,
    #[sea_orm(column_name = "Fecha_Modificacion")]
    pub fecha_modificacion: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
