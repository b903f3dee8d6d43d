use entity::sea_orm_active_enums::MetodoPago;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::renta::LineItem;

/// Discount granted on a sale. The amount is supplied by the caller, not derived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descuento {
    pub porcentaje: Decimal,
    pub monto: Decimal,
    pub motivo: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVenta {
    pub id_cliente: i32,
    pub usuario_id: i32,
    pub descuento: Option<Descuento>,
    /// Campaign the sale belongs to, e.g. `Halloween`.
    pub motivo_venta: Option<String>,
    pub notas: Option<String>,
    /// `Efectivo` when `None`.
    pub metodo_pago: Option<MetodoPago>,
    pub lineas: Vec<LineItem>,
}
