//! Closed value sets stored as database enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Whether an inventory item is still offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "estado_inventario")]
pub enum EstadoInventario {
    #[sea_orm(string_value = "Activo")]
    Activo,
    #[sea_orm(string_value = "Inactivo")]
    Inactivo,
}

/// Lifecycle of a rental.
///
/// `Activa` moves to `Devuelto` once `Fecha_Devuelto` is stamped, or to `Vencida` when the
/// due date passes without a return. A `Vencida` rental can still be returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "estado_renta")]
pub enum EstadoRenta {
    #[sea_orm(string_value = "Activa")]
    Activa,
    #[sea_orm(string_value = "Devuelto")]
    Devuelto,
    #[sea_orm(string_value = "Vencida")]
    Vencida,
}

/// Lifecycle of a sale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "estado_venta")]
pub enum EstadoVenta {
    #[sea_orm(string_value = "Activa")]
    Activa,
    #[sea_orm(string_value = "Cancelada")]
    Cancelada,
}

/// Payment method of a sale.
///
/// The lowercase `tarjeta` is kept for compatibility with existing rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "metodo_pago")]
pub enum MetodoPago {
    #[sea_orm(string_value = "Efectivo")]
    Efectivo,
    #[sea_orm(string_value = "tarjeta")]
    Tarjeta,
    #[sea_orm(string_value = "Transferencia")]
    Transferencia,
}

/// Role of an employee account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "rol")]
pub enum Rol {
    #[sea_orm(string_value = "empleado")]
    Empleado,
    #[sea_orm(string_value = "admin")]
    Admin,
}
