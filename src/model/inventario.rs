use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInventarioItem {
    pub codigo_barras: String,
    pub descripcion: String,
    pub talla: String,
    pub color: Option<String>,
    pub categoria: Option<String>,
    pub precio_venta: Decimal,
    pub precio_renta: Decimal,
    pub stock: i32,
    pub disponible: i32,
}

/// Replacement values for an existing item. The barcode and `Estado` are not changed here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventarioUpdate {
    pub descripcion: String,
    pub talla: String,
    pub color: Option<String>,
    pub categoria: Option<String>,
    pub precio_venta: Decimal,
    pub precio_renta: Decimal,
    pub stock: i32,
    pub disponible: i32,
}

impl From<NewInventarioItem> for InventarioUpdate {
    fn from(item: NewInventarioItem) -> Self {
        Self {
            descripcion: item.descripcion,
            talla: item.talla,
            color: item.color,
            categoria: item.categoria,
            precio_venta: item.precio_venta,
            precio_renta: item.precio_renta,
            stock: item.stock,
            disponible: item.disponible,
        }
    }
}

/// What `remove_item` did with an inventory item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoveOutcome {
    /// The row was deleted; no rental or sale line referenced it.
    Deleted,
    /// The row is referenced by line items and was marked `Inactivo` instead.
    Deactivated,
}
