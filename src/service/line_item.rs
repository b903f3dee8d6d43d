use std::collections::BTreeSet;

use entity::sea_orm_active_enums::EstadoInventario;
use rust_decimal::Decimal;
use sea_orm::ConnectionTrait;

use crate::{
    data::inventario::InventarioRepository,
    error::{validation::ValidationError, Error},
    model::renta::{total_of, LineItem},
    util::validation::{
        validate_cantidad, validate_codigo_barras, validate_importe, validate_precio,
    },
};

/// Checks the lines of a rental or sale and returns them with trimmed barcodes
///
/// `kind` names the document in the error for an empty list.
pub(crate) fn validate_lineas(
    kind: &'static str,
    lineas: &[LineItem],
) -> Result<Vec<LineItem>, ValidationError> {
    if lineas.is_empty() {
        return Err(ValidationError::EmptyLines(kind));
    }

    lineas
        .iter()
        .map(|linea| {
            let codigo_barras = validate_codigo_barras(&linea.codigo_barras)?;
            validate_cantidad("cantidad", linea.cantidad)?;
            validate_precio("precio_unitario", linea.precio_unitario)?;

            Ok(LineItem {
                codigo_barras,
                cantidad: linea.cantidad,
                precio_unitario: linea.precio_unitario,
            })
        })
        .collect()
}

/// Sum of the line subtotals, refusing any subtotal or total too large to store
pub(crate) fn checked_total(lineas: &[LineItem]) -> Result<Decimal, ValidationError> {
    for linea in lineas {
        validate_importe("subtotal", linea.subtotal())?;
    }

    let total = total_of(lineas);
    validate_importe("total", total)?;

    Ok(total)
}

/// Fails unless every barcode of `lineas` is an active inventory item
pub(crate) async fn ensure_items_active<C: ConnectionTrait>(
    conn: &C,
    lineas: &[LineItem],
) -> Result<(), Error> {
    let inventario_repo = InventarioRepository::new(conn);

    let codigos: BTreeSet<&str> = lineas.iter().map(|l| l.codigo_barras.as_str()).collect();
    for codigo in codigos {
        match inventario_repo.get_by_codigo(codigo).await? {
            None => return Err(ValidationError::UnknownBarcode(codigo.to_string()).into()),
            Some(item) if item.estado == EstadoInventario::Inactivo => {
                return Err(ValidationError::InactiveItem(codigo.to_string()).into())
            }
            Some(_) => {}
        }
    }

    Ok(())
}
