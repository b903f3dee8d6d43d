use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One costume line of a rental or sale before it is stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub codigo_barras: String,
    pub cantidad: i32,
    pub precio_unitario: Decimal,
}

impl LineItem {
    /// `Cantidad × Precio_Unitario`
    pub fn subtotal(&self) -> Decimal {
        self.precio_unitario * Decimal::from(self.cantidad)
    }
}

/// Sum of the line subtotals.
pub fn total_of(lineas: &[LineItem]) -> Decimal {
    lineas.iter().map(LineItem::subtotal).sum()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRenta {
    pub id_cliente: i32,
    pub id_usuario: i32,
    /// Start of the rental; the current time when `None`.
    pub fecha_renta: Option<NaiveDateTime>,
    pub fecha_devolucion: NaiveDateTime,
    pub dias_renta: i32,
    pub deposito: Decimal,
    pub lineas: Vec<LineItem>,
}
