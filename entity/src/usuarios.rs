use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::Rol;

/// Employee or admin account.
///
/// `password` holds an Argon2 PHC hash string and is never serialized.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id_usuario")]
    pub id_usuario: i32,
    #[sea_orm(
        column_name = "Usuario",
        column_type = "String(StringLen::N(255))",
        unique
    )]
    pub usuario: String,
    #[sea_orm(column_name = "Nombre", column_type = "Text")]
    pub nombre: String,
    #[sea_orm(column_name = "Apellido_Paterno", column_type = "Text")]
    pub apellido_paterno: String,
    #[serde(skip_serializing)]
    #[sea_orm(column_name = "Password", column_type = "String(StringLen::N(255))")]
    pub password: String,
    #[sea_orm(column_name = "Rol")]
    pub rol: Rol,
    #[sea_orm(column_name = "Fecha_Registro")]
    pub fecha_registro: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rentas::Entity")]
    Rentas,
    #[sea_orm(has_many = "super::ventas::Entity")]
    Ventas,
}

impl Related<super::rentas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rentas.def()
    }
}

impl Related<super::ventas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ventas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
