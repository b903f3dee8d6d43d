use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::EstadoInventario;

/// A costume kept in stock, keyed by its printed barcode.
///
/// `disponible` counts the units currently on the shelf and must never exceed `stock`. The
/// schema does not check this; the inventory service does.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventario")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "Codigo_Barras",
        column_type = "String(StringLen::N(50))"
    )]
    pub codigo_barras: String,
    #[sea_orm(column_name = "Descripcion", column_type = "Text")]
    pub descripcion: String,
    #[sea_orm(column_name = "Talla", column_type = "String(StringLen::N(20))")]
    pub talla: String,
    #[sea_orm(
        column_name = "Color",
        column_type = "String(StringLen::N(50))",
        nullable
    )]
    pub color: Option<String>,
    #[sea_orm(
        column_name = "Categoria",
        column_type = "String(StringLen::N(100))",
        nullable
    )]
    pub categoria: Option<String>,
    #[sea_orm(column_name = "Precio_Venta", column_type = "Decimal(Some((10, 2)))")]
    pub precio_venta: Decimal,
    #[sea_orm(column_name = "Precio_Renta", column_type = "Decimal(Some((10, 2)))")]
    pub precio_renta: Decimal,
    #[sea_orm(column_name = "Stock")]
    pub stock: i32,
    #[sea_orm(column_name = "Disponible")]
    pub disponible: i32,
    #[sea_orm(column_name = "Estado")]
    pub estado: EstadoInventario,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::detalle_rentas::Entity")]
    DetalleRentas,
    #[sea_orm(has_many = "super::detalle_ventas::Entity")]
    DetalleVentas,
}

impl Related<super::detalle_rentas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetalleRentas.def()
    }
}

impl Related<super::detalle_ventas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetalleVentas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
