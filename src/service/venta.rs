use chrono::NaiveDate;
use entity::sea_orm_active_enums::EstadoVenta;
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::venta::{DetalleVentaRepository, VentaRepository},
    error::{validation::ValidationError, Error},
    model::{
        db::{DetalleVentaModel, VentaModel},
        venta::{Descuento, NewVenta},
    },
    service::{
        configuracion::ConfiguracionService,
        line_item::{checked_total, ensure_items_active, validate_lineas},
        usuario::UsuarioService,
    },
    util::{
        folio::{folio_prefix, next_folio},
        time::now,
        validation::{optional_text, validate_precio, validate_scale},
    },
};

pub struct VentaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VentaService<'a> {
    /// Creates a new instance of [`VentaService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The folio the next sale made on `fecha` would receive
    pub async fn next_folio(&self, fecha: NaiveDate) -> Result<String, Error> {
        next_folio_with(self.db, fecha).await
    }

    /// Creates a sale with its lines in one transaction
    ///
    /// The folio is assigned inside the transaction from the sales already stored for today.
    /// `fecha_venta` and the folio date come from the same UTC reading of the clock.
    /// Totals follow the rental rule: `Subtotal = Cantidad × Precio_Unitario` and
    /// `Total = Σ Subtotal`. The discount, if any, is stored as given after checking it against
    /// `DESCUENTO_MAXIMO`.
    ///
    /// # Returns
    /// - `Ok((VentaModel, Vec<DetalleVentaModel>))`: The stored sale, `Activa`, and its lines
    /// - `Err(Error::ValidationError(_))`: Invalid lines or discount, a total too large to
    ///   store, an unknown or inactive barcode, or no folio left for today
    /// - `Err(Error::ConstraintError(_))`: Unknown customer or user, or a folio taken by a
    ///   concurrent sale; nothing is stored
    pub async fn create_sale(
        &self,
        venta: NewVenta,
    ) -> Result<(VentaModel, Vec<DetalleVentaModel>), Error> {
        let lineas = validate_lineas("sale", &venta.lineas)?;
        let total = checked_total(&lineas)?;

        let descuento = match &venta.descuento {
            Some(descuento) => {
                let maximo = ConfiguracionService::new(self.db)
                    .descuento_maximo()
                    .await?;
                Some(validate_descuento(descuento, total, maximo)?)
            }
            None => None,
        };

        let venta = NewVenta {
            descuento,
            motivo_venta: optional_text(venta.motivo_venta.as_deref()),
            notas: optional_text(venta.notas.as_deref()),
            lineas,
            ..venta
        };

        let txn = self.db.begin().await?;

        ensure_items_active(&txn, &venta.lineas).await?;

        let fecha_venta = now();
        let folio = next_folio_with(&txn, fecha_venta.date()).await?;
        let created = VentaRepository::new(&txn)
            .create(&venta, &folio, total, fecha_venta)
            .await?;
        let detalles = DetalleVentaRepository::new(&txn)
            .create_many(created.id_venta, &venta.lineas)
            .await?;

        txn.commit().await?;

        tracing::info!(
            id_venta = created.id_venta,
            folio = %created.folio,
            total = %created.total,
            lineas = detalles.len(),
            "Created sale"
        );

        Ok((created, detalles))
    }

    /// Cancels an active sale on behalf of an admin
    ///
    /// # Arguments
    /// - `id_venta` (`i32`): Sale to cancel, must be `Activa`
    /// - `id_usuario` (`i32`): User cancelling it, must have the `admin` role
    /// - `motivo` (`&str`): Reason, required
    ///
    /// # Returns
    /// - `Ok(VentaModel)`: The sale, now `Cancelada` with who, when and why recorded
    /// - `Err(Error::AuthError(AuthError::AdminRequired(_)))`: The user is not an admin
    /// - `Err(Error::ValidationError(ValidationError::InvalidTransition { .. }))`: Already
    ///   cancelled
    /// - `Err(Error::NotFound { .. })`: Unknown sale or user
    pub async fn cancel_sale(
        &self,
        id_venta: i32,
        id_usuario: i32,
        motivo: &str,
    ) -> Result<VentaModel, Error> {
        let motivo = motivo.trim();
        if motivo.is_empty() {
            return Err(ValidationError::field("motivo_cancelacion", "is required").into());
        }

        UsuarioService::new(self.db).require_admin(id_usuario).await?;

        let txn = self.db.begin().await?;
        let venta_repo = VentaRepository::new(&txn);

        let venta = venta_repo
            .get_by_id(id_venta)
            .await?
            .ok_or_else(|| Error::not_found("Venta", id_venta))?;

        if venta.estado != EstadoVenta::Activa {
            return Err(ValidationError::InvalidTransition {
                entity: "Venta",
                id: id_venta,
                from: format!("{:?}", venta.estado),
                to: format!("{:?}", EstadoVenta::Cancelada),
            }
            .into());
        }

        let venta = venta_repo
            .cancel(id_venta, id_usuario, motivo, now())
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Sale {} disappeared while cancelling it inside a transaction",
                    id_venta
                ))
            })?;

        txn.commit().await?;

        tracing::info!(id_venta, folio = %venta.folio, cancelada_por = id_usuario, "Cancelled sale");

        Ok(venta)
    }
}

async fn next_folio_with<C: ConnectionTrait>(conn: &C, fecha: NaiveDate) -> Result<String, Error> {
    let prefix = folio_prefix(fecha);
    let last = VentaRepository::new(conn)
        .last_folio_for_prefix(&prefix)
        .await?;

    next_folio(fecha, last.as_deref()).ok_or_else(|| ValidationError::FolioExhausted(prefix).into())
}

/// Checks a discount against the sale total and the configured maximum percentage
fn validate_descuento(
    descuento: &Descuento,
    total: Decimal,
    maximo: Decimal,
) -> Result<Descuento, ValidationError> {
    if descuento.porcentaje < Decimal::ZERO || descuento.porcentaje > maximo {
        return Err(ValidationError::field(
            "descuento_porcentaje",
            format!("must be between 0 and {}", maximo),
        ));
    }
    validate_scale("descuento_porcentaje", descuento.porcentaje)?;

    validate_precio("descuento_monto", descuento.monto)?;
    if descuento.monto > total {
        return Err(ValidationError::field(
            "descuento_monto",
            "cannot exceed the sale total",
        ));
    }

    let motivo = descuento.motivo.trim();
    if motivo.is_empty() {
        return Err(ValidationError::field(
            "motivo_descuento",
            "is required when a discount is granted",
        ));
    }

    Ok(Descuento {
        porcentaje: descuento.porcentaje,
        monto: descuento.monto,
        motivo: motivo.to_string(),
    })
}
