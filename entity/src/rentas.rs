use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::EstadoRenta;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rentas")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id_Renta")]
    pub id_renta: i32,
    #[sea_orm(column_name = "Id_Cliente")]
    pub id_cliente: i32,
    #[sea_orm(column_name = "Id_Usuario")]
    pub id_usuario: i32,
    #[sea_orm(column_name = "Fecha_Renta")]
    pub fecha_renta: DateTime,
    /// Date the costumes are due back.
    #[sea_orm(column_name = "Fecha_Devolucion")]
    pub fecha_devolucion: DateTime,
    /// Date the costumes actually came back, `None` while the rental is open.
    #[sea_orm(column_name = "Fecha_Devuelto", nullable)]
    pub fecha_devuelto: Option<DateTime>,
    #[sea_orm(column_name = "Penalizacion", column_type = "Decimal(Some((10, 2)))")]
    pub penalizacion: Decimal,
    #[sea_orm(column_name = "Dias_Renta")]
    pub dias_renta: i32,
    #[sea_orm(column_name = "Total", column_type = "Decimal(Some((10, 2)))")]
    pub total: Decimal,
    #[sea_orm(column_name = "Deposito", column_type = "Decimal(Some((10, 2)))")]
    pub deposito: Decimal,
    #[sea_orm(column_name = "Estado")]
    pub estado: EstadoRenta,
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
        from = "Column::IdUsuario",
        to = "super::usuarios::Column::IdUsuario",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Usuarios,
    #[sea_orm(has_many = "super::detalle_rentas::Entity")]
    DetalleRentas,
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

impl Related<super::detalle_rentas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetalleRentas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
