use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One costume line of a rental. Deleted together with its rental.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "detalle_rentas")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id_DetalleRenta")]
    pub id_detalle_renta: i32,
    #[sea_orm(column_name = "Id_Renta")]
    pub id_renta: i32,
    #[sea_orm(column_name = "Codigo_Barras", column_type = "String(StringLen::N(50))")]
    pub codigo_barras: String,
    #[sea_orm(column_name = "Cantidad")]
    pub cantidad: i32,
    #[sea_orm(column_name = "Precio_Unitario", column_type = "Decimal(Some((10, 2)))")]
    pub precio_unitario: Decimal,
    #[sea_orm(column_name = "Subtotal", column_type = "Decimal(Some((10, 2)))")]
    pub subtotal: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rentas::Entity",
        from = "Column::IdRenta",
        to = "super::rentas::Column::IdRenta",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Rentas,
    #[sea_orm(
        belongs_to = "super::inventario::Entity",
        from = "Column::CodigoBarras",
        to = "super::inventario::Column::CodigoBarras",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Inventario,
}

impl Related<super::rentas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rentas.def()
    }
}

impl Related<super::inventario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inventario.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
