use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clientes")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id_cliente")]
    pub id_cliente: i32,
    #[sea_orm(column_name = "Nombre", column_type = "Text")]
    pub nombre: String,
    #[sea_orm(column_name = "Apellido_Paterno", column_type = "Text")]
    pub apellido_paterno: String,
    #[sea_orm(column_name = "Telefono", column_type = "String(StringLen::N(20))")]
    pub telefono: String,
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
