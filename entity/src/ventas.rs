use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{EstadoVenta, MetodoPago};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ventas")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id_Venta")]
    pub id_venta: i32,
    /// Human readable ticket number, `VEN-YYYYMMDD-####`.
    #[sea_orm(
        column_name = "Folio",
        column_type = "String(StringLen::N(20))",
        unique
    )]
    pub folio: String,
    #[sea_orm(column_name = "Id_cliente")]
    pub id_cliente: i32,
    #[sea_orm(column_name = "Usuario_id")]
    pub usuario_id: i32,
    #[sea_orm(column_name = "fecha_venta")]
    pub fecha_venta: DateTime,
    #[sea_orm(column_name = "Total", column_type = "Decimal(Some((10, 2)))")]
    pub total: Decimal,
    #[sea_orm(
        column_name = "Descuento_Porcentaje",
        column_type = "Decimal(Some((5, 2)))",
        nullable
    )]
    pub descuento_porcentaje: Option<Decimal>,
    #[sea_orm(
        column_name = "Descuento_Monto",
        column_type = "Decimal(Some((10, 2)))",
        nullable
    )]
    pub descuento_monto: Option<Decimal>,
    #[sea_orm(column_name = "Motivo_Descuento", column_type = "Text", nullable)]
    pub motivo_descuento: Option<String>,
    /// Campaign or occasion the sale belongs to, e.g. `Halloween`.
    #[sea_orm(
        column_name = "Motivo_Venta",
        column_type = "String(StringLen::N(100))",
        nullable
    )]
    pub motivo_venta: Option<String>,
    #[sea_orm(column_name = "Notas", column_type = "Text", nullable)]
    pub notas: Option<String>,
    #[sea_orm(column_name = "Estado")]
    pub estado: EstadoVenta,
    #[sea_orm(column_name = "Cancelada_Por", nullable)]
    pub cancelada_por: Option<i32>,
    #[sea_orm(column_name = "Fecha_Cancelacion", nullable)]
    pub fecha_cancelacion: Option<DateTime>,
    #[sea_orm(column_name = "Motivo_Cancelacion", column_type = "Text", nullable)]
    pub motivo_cancelacion: Option<String>,
    #[sea_orm(column_name = "metodo_pago")]
    pub metodo_pago: MetodoPago,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clientes::Entity",
        from = "Column::IdCliente",
        to = "super::clientes::Column::IdCliente",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Clientes,
    #[sea_orm(
        belongs_to = "super::usuarios::Entity",
        from = "Column::UsuarioId",
        to = "super::usuarios::Column::IdUsuario",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Usuarios,
    #[sea_orm(
        belongs_to = "super::usuarios::Entity",
        from = "Column::CanceladaPor",
        to = "super::usuarios::Column::IdUsuario",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    CanceladaPor,
    #[sea_orm(has_many = "super::detalle_ventas::Entity")]
    DetalleVentas,
}

impl Related<super::clientes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clientes.def()
    }
}

impl Related<super::usuarios::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuarios.def()
    }
}

impl Related<super::detalle_ventas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetalleVentas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
