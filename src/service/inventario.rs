use entity::sea_orm_active_enums::EstadoInventario;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::inventario::InventarioRepository,
    error::{validation::ValidationError, Error},
    model::{
        db::InventarioModel,
        inventario::{InventarioUpdate, NewInventarioItem, RemoveOutcome},
    },
    util::validation::{
        optional_text, validate_codigo_barras, validate_descripcion, validate_precio,
        validate_stock, validate_talla,
    },
};

pub struct InventarioService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventarioService<'a> {
    /// Creates a new instance of [`InventarioService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a costume to the inventory
    ///
    /// # Returns
    /// - `Ok(InventarioModel)`: The stored item, `Activo`
    /// - `Err(Error::ValidationError(_))`: A field is invalid or `Disponible` exceeds `Stock`
    /// - `Err(Error::ConstraintError(_))`: The barcode is already registered
    pub async fn create_item(&self, item: NewInventarioItem) -> Result<InventarioModel, Error> {
        let codigo_barras = validate_codigo_barras(&item.codigo_barras)?;
        let update = validate_item(item.into())?;

        let inventario_repo = InventarioRepository::new(self.db);
        let item = inventario_repo
            .create(NewInventarioItem {
                codigo_barras,
                descripcion: update.descripcion,
                talla: update.talla,
                color: update.color,
                categoria: update.categoria,
                precio_venta: update.precio_venta,
                precio_renta: update.precio_renta,
                stock: update.stock,
                disponible: update.disponible,
            })
            .await?;

        tracing::info!(codigo_barras = %item.codigo_barras, "Created inventory item");

        Ok(item)
    }

    /// Replaces the editable fields of an item under the same rules as [`Self::create_item`]
    pub async fn update_item(
        &self,
        codigo_barras: &str,
        update: InventarioUpdate,
    ) -> Result<InventarioModel, Error> {
        let update = validate_item(update)?;

        let inventario_repo = InventarioRepository::new(self.db);
        let item = inventario_repo
            .update(codigo_barras, update)
            .await?
            .ok_or_else(|| Error::not_found("Inventario", codigo_barras))?;

        tracing::debug!(codigo_barras, "Updated inventory item");

        Ok(item)
    }

    /// Removes an item from the catalogue
    ///
    /// Items never used in a rental or sale are deleted. Items with line-item history are
    /// marked `Inactivo` instead, keeping past rentals and sales intact.
    ///
    /// # Returns
    /// - `Ok(RemoveOutcome::Deleted)`: The row was deleted
    /// - `Ok(RemoveOutcome::Deactivated)`: The row is referenced and was marked `Inactivo`
    /// - `Err(Error::NotFound { .. })`: No item with that barcode
    pub async fn remove_item(&self, codigo_barras: &str) -> Result<RemoveOutcome, Error> {
        let txn = self.db.begin().await?;
        let inventario_repo = InventarioRepository::new(&txn);

        if inventario_repo.get_by_codigo(codigo_barras).await?.is_none() {
            return Err(Error::not_found("Inventario", codigo_barras));
        }

        let outcome = if inventario_repo.has_movements(codigo_barras).await? {
            inventario_repo
                .set_estado(codigo_barras, EstadoInventario::Inactivo)
                .await?;
            RemoveOutcome::Deactivated
        } else {
            inventario_repo.delete(codigo_barras).await?;
            RemoveOutcome::Deleted
        };

        txn.commit().await?;

        tracing::info!(codigo_barras, ?outcome, "Removed inventory item");

        Ok(outcome)
    }
}

/// Normalizes the editable fields and checks `Disponible <= Stock`
fn validate_item(update: InventarioUpdate) -> Result<InventarioUpdate, ValidationError> {
    let descripcion = validate_descripcion(&update.descripcion)?;
    let talla = validate_talla(&update.talla)?;
    validate_precio("precio_venta", update.precio_venta)?;
    validate_precio("precio_renta", update.precio_renta)?;
    validate_stock("stock", update.stock)?;
    validate_stock("disponible", update.disponible)?;

    if update.disponible > update.stock {
        return Err(ValidationError::DisponibleExceedsStock {
            stock: update.stock,
            disponible: update.disponible,
        });
    }

    Ok(InventarioUpdate {
        descripcion,
        talla,
        color: optional_text(update.color.as_deref()),
        categoria: optional_text(update.categoria.as_deref()),
        ..update
    })
}
