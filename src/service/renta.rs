use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::EstadoRenta;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::renta::{DetalleRentaRepository, RentaRepository},
    error::{validation::ValidationError, Error},
    model::{
        db::{DetalleRentaModel, RentaModel},
        renta::NewRenta,
    },
    service::line_item::{checked_total, ensure_items_active, validate_lineas},
    util::{time::now, validation::validate_precio},
};

pub struct RentaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RentaService<'a> {
    /// Creates a new instance of [`RentaService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a rental with its lines in one transaction
    ///
    /// Each line's `Subtotal` is `Cantidad × Precio_Unitario` and the rental `Total` is the sum
    /// of the subtotals. `Disponible` is not touched.
    ///
    /// # Arguments
    /// - `renta` ([`NewRenta`]): Header values and at least one line. `fecha_renta` defaults
    ///   to now and must come before `fecha_devolucion`.
    ///
    /// # Returns
    /// - `Ok((RentaModel, Vec<DetalleRentaModel>))`: The stored rental, `Activa`, and its lines
    /// - `Err(Error::ValidationError(_))`: Invalid header or line values, a subtotal or total
    ///   too large to store, or a barcode that is unknown or inactive
    /// - `Err(Error::ConstraintError(ConstraintError::ForeignKey(_)))`: The customer or user
    ///   does not exist; nothing is stored
    pub async fn create_rental(
        &self,
        renta: NewRenta,
    ) -> Result<(RentaModel, Vec<DetalleRentaModel>), Error> {
        let lineas = validate_lineas("rental", &renta.lineas)?;
        if renta.dias_renta < 1 {
            return Err(ValidationError::field("dias_renta", "must be at least 1").into());
        }
        validate_precio("deposito", renta.deposito)?;

        let fecha_renta = renta.fecha_renta.unwrap_or_else(now);
        if renta.fecha_devolucion <= fecha_renta {
            return Err(ValidationError::field(
                "fecha_devolucion",
                "must be after the rental date",
            )
            .into());
        }

        let total = checked_total(&lineas)?;
        let renta = NewRenta {
            fecha_renta: Some(fecha_renta),
            lineas,
            ..renta
        };

        let txn = self.db.begin().await?;

        ensure_items_active(&txn, &renta.lineas).await?;

        let created = RentaRepository::new(&txn).create(&renta, total).await?;
        let detalles = DetalleRentaRepository::new(&txn)
            .create_many(created.id_renta, &renta.lineas)
            .await?;

        txn.commit().await?;

        tracing::info!(
            id_renta = created.id_renta,
            id_cliente = created.id_cliente,
            total = %created.total,
            lineas = detalles.len(),
            "Created rental"
        );

        Ok((created, detalles))
    }

    /// Records the return of a rental
    ///
    /// Stamps `Fecha_Devuelto` with the current time, stores `penalizacion` as computed by the
    /// caller and moves the rental from `Activa` or `Vencida` to `Devuelto`.
    pub async fn return_rental(
        &self,
        id_renta: i32,
        penalizacion: Decimal,
    ) -> Result<RentaModel, Error> {
        validate_precio("penalizacion", penalizacion)?;

        let txn = self.db.begin().await?;
        let renta_repo = RentaRepository::new(&txn);

        let renta = renta_repo
            .get_by_id(id_renta)
            .await?
            .ok_or_else(|| Error::not_found("Renta", id_renta))?;

        if renta.estado == EstadoRenta::Devuelto {
            return Err(ValidationError::InvalidTransition {
                entity: "Renta",
                id: id_renta,
                from: format!("{:?}", renta.estado),
                to: format!("{:?}", EstadoRenta::Devuelto),
            }
            .into());
        }

        let renta = renta_repo
            .mark_returned(id_renta, now(), penalizacion)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Rental {} disappeared while marking it returned inside a transaction",
                    id_renta
                ))
            })?;

        txn.commit().await?;

        tracing::info!(id_renta, penalizacion = %renta.penalizacion, "Returned rental");

        Ok(renta)
    }

    /// Moves every active rental due before `now` to `Vencida`, returning how many moved
    pub async fn mark_overdue(&self, now: NaiveDateTime) -> Result<u64, Error> {
        let moved = RentaRepository::new(self.db).mark_overdue(now).await?;

        if moved > 0 {
            tracing::info!(moved, "Marked overdue rentals");
        } else {
            tracing::debug!("No overdue rentals");
        }

        Ok(moved)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;

    use crate::model::renta::{LineItem, NewRenta};

    fn new_renta(id_cliente: i32, id_usuario: i32, lineas: Vec<LineItem>) -> NewRenta {
        NewRenta {
            id_cliente,
            id_usuario,
            fecha_renta: None,
            fecha_devolucion: Utc::now().naive_utc() + Duration::days(3),
            dias_renta: 3,
            deposito: dec!(200.00),
            lineas,
        }
    }

    fn line(codigo_barras: &str, cantidad: i32) -> LineItem {
        LineItem {
            codigo_barras: codigo_barras.to_string(),
            cantidad,
            precio_unitario: dec!(300.00),
        }
    }

    mod create_rental {
        use entity::sea_orm_active_enums::{EstadoRenta, Rol};
        use maskngo_test_utils::prelude::*;
        use rust_decimal_macros::dec;

        use super::{line, new_renta};
        use crate::{
            data::{inventario::InventarioRepository, renta::RentaRepository},
            error::{constraint::ConstraintError, validation::ValidationError, Error},
            service::renta::RentaService,
        };

        /// Expect subtotals per line and the total as their sum
        #[tokio::test]
        async fn creates_rental_with_lines() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_schema()
                .with_mock_cliente("6181234567")
                .with_mock_usuario("jperez", Rol::Empleado)
                .with_mock_disfraz("DISNEY0000", 5, 0)
                .with_mock_disfraz("TERROR0001", 3, 3)
                .build()
                .await?;

            // The builder's customer and user are the first rows of their tables
            let renta_service = RentaService::new(&test.state.db);
            let (renta, detalles) = renta_service
                .create_rental(new_renta(
                    1,
                    1,
                    vec![line("DISNEY0000", 1), line(" TERROR0001", 2)],
                ))
                .await
                .unwrap();

            assert_eq!(renta.estado, EstadoRenta::Activa);
            assert_eq!(renta.total, dec!(900.00));
            assert_eq!(detalles.len(), 2);
            assert_eq!(detalles[0].subtotal, dec!(300.00));
            assert_eq!(detalles[1].subtotal, dec!(600.00));
            assert_eq!(detalles[1].codigo_barras, "TERROR0001");

            // Availability is left to the caller
            let disfraz = InventarioRepository::new(&test.state.db)
                .get_by_codigo("TERROR0001")
                .await?
                .unwrap();
            assert_eq!(disfraz.disponible, 3);

            Ok(())
        }

        #[tokio::test]
        async fn rejects_empty_lines() -> Result<(), TestError> {
            let mut test = test_setup_with_schema!()?;
            let cliente = test.shop().insert_mock_cliente("6181234567").await?;
            let usuario = test.shop().insert_mock_usuario("jperez", Rol::Empleado).await?;

            let renta_service = RentaService::new(&test.state.db);
            let result = renta_service
                .create_rental(new_renta(cliente.id_cliente, usuario.id_usuario, vec![]))
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::EmptyLines(_)))
            ));

            Ok(())
        }

        #[tokio::test]
        async fn rejects_due_date_before_start() -> Result<(), TestError> {
            let mut test = test_setup_with_schema!()?;
            let cliente = test.shop().insert_mock_cliente("6181234567").await?;
            let usuario = test.shop().insert_mock_usuario("jperez", Rol::Empleado).await?;
            test.shop().insert_mock_disfraz("DISNEY0000", 5, 0).await?;

            let mut renta = new_renta(
                cliente.id_cliente,
                usuario.id_usuario,
                vec![line("DISNEY0000", 1)],
            );
            renta.fecha_renta = Some(renta.fecha_devolucion);

            let renta_service = RentaService::new(&test.state.db);
            let result = renta_service.create_rental(renta).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::InvalidField {
                    field: "fecha_devolucion",
                    ..
                }))
            ));

            Ok(())
        }

        /// Expect lines that fit one by one but overflow the Total column together
        #[tokio::test]
        async fn rejects_total_too_large_to_store() -> Result<(), TestError> {
            let mut test = test_setup_with_schema!()?;
            let cliente = test.shop().insert_mock_cliente("6181234567").await?;
            let usuario = test.shop().insert_mock_usuario("jperez", Rol::Empleado).await?;
            test.shop().insert_mock_disfraz("DISNEY0000", 5, 0).await?;

            let mut lineas = vec![line("DISNEY0000", 100), line("DISNEY0000", 100)];
            for linea in &mut lineas {
                linea.precio_unitario = dec!(999999.99);
            }

            let renta_service = RentaService::new(&test.state.db);
            let result = renta_service
                .create_rental(new_renta(cliente.id_cliente, usuario.id_usuario, lineas))
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::InvalidField {
                    field: "total",
                    ..
                }))
            ));
            assert!(RentaRepository::new(&test.state.db)
                .list_by_cliente(cliente.id_cliente)
                .await?
                .is_empty());

            Ok(())
        }

        /// Expect nothing stored when one barcode is unknown
        #[tokio::test]
        async fn rejects_unknown_barcode() -> Result<(), TestError> {
            let mut test = test_setup_with_schema!()?;
            let cliente = test.shop().insert_mock_cliente("6181234567").await?;
            let usuario = test.shop().insert_mock_usuario("jperez", Rol::Empleado).await?;
            test.shop().insert_mock_disfraz("DISNEY0000", 5, 0).await?;

            let renta_service = RentaService::new(&test.state.db);
            let result = renta_service
                .create_rental(new_renta(
                    cliente.id_cliente,
                    usuario.id_usuario,
                    vec![line("DISNEY0000", 1), line("NOEXISTE", 1)],
                ))
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::UnknownBarcode(_)))
            ));
            assert!(RentaRepository::new(&test.state.db)
                .list_by_cliente(cliente.id_cliente)
                .await?
                .is_empty());

            Ok(())
        }

        /// Expect a foreign key error and no rental for a customer that does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_cliente() -> Result<(), TestError> {
            let mut test = test_setup_with_schema!()?;
            let usuario = test.shop().insert_mock_usuario("jperez", Rol::Empleado).await?;
            test.shop().insert_mock_disfraz("DISNEY0000", 5, 0).await?;

            let renta_service = RentaService::new(&test.state.db);
            let result = renta_service
                .create_rental(new_renta(42, usuario.id_usuario, vec![line("DISNEY0000", 1)]))
                .await;

            assert!(matches!(
                result,
                Err(Error::ConstraintError(ConstraintError::ForeignKey(_)))
            ));

            Ok(())
        }
    }

    mod return_rental {
        use entity::sea_orm_active_enums::EstadoRenta;
        use maskngo_test_utils::prelude::*;
        use rust_decimal_macros::dec;

        use crate::{
            error::{validation::ValidationError, Error},
            service::renta::RentaService,
        };

        #[tokio::test]
        async fn returns_rental_with_penalizacion() -> Result<(), TestError> {
            let mut test = test_setup_with_schema!()?;
            let (_, _, _, renta, _) = test.shop().insert_mock_renta_with_detalle().await?;

            let renta_service = RentaService::new(&test.state.db);
            let returned = renta_service
                .return_rental(renta.id_renta, dec!(100.00))
                .await
                .unwrap();

            assert_eq!(returned.estado, EstadoRenta::Devuelto);
            assert_eq!(returned.penalizacion, dec!(100.00));
            assert!(returned.fecha_devuelto.is_some());

            Ok(())
        }

        /// Expect a second return to be refused
        #[tokio::test]
        async fn rejects_second_return() -> Result<(), TestError> {
            let mut test = test_setup_with_schema!()?;
            let (_, _, _, renta, _) = test.shop().insert_mock_renta_with_detalle().await?;

            let renta_service = RentaService::new(&test.state.db);
            renta_service
                .return_rental(renta.id_renta, dec!(0))
                .await
                .unwrap();
            let result = renta_service.return_rental(renta.id_renta, dec!(0)).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::InvalidTransition { .. }))
            ));

            Ok(())
        }

        #[tokio::test]
        async fn rejects_negative_penalizacion() -> Result<(), TestError> {
            let mut test = test_setup_with_schema!()?;
            let (_, _, _, renta, _) = test.shop().insert_mock_renta_with_detalle().await?;

            let renta_service = RentaService::new(&test.state.db);
            let result = renta_service
                .return_rental(renta.id_renta, dec!(-50.00))
                .await;

            assert!(matches!(result, Err(Error::ValidationError(_))));

            Ok(())
        }

        #[tokio::test]
        async fn fails_for_nonexistent_renta() -> Result<(), TestError> {
            let test = test_setup_with_schema!()?;

            let renta_service = RentaService::new(&test.state.db);
            let result = renta_service.return_rental(1, dec!(0)).await;

            assert!(matches!(result, Err(Error::NotFound { .. })));

            Ok(())
        }
    }

    mod mark_overdue {
        use chrono::{Duration, Utc};
        use entity::sea_orm_active_enums::{EstadoRenta, Rol};
        use maskngo_test_utils::prelude::*;
        use rust_decimal_macros::dec;

        use crate::{data::renta::RentaRepository, service::renta::RentaService};

        /// Expect an overdue rental to become Vencida and still be returnable
        #[tokio::test]
        async fn marks_and_returns_overdue_rental() -> Result<(), TestError> {
            let mut test = test_setup_with_schema!()?;
            let cliente = test.shop().insert_mock_cliente("6181234567").await?;
            let usuario = test.shop().insert_mock_usuario("jperez", Rol::Empleado).await?;
            let renta = test
                .shop()
                .insert_mock_renta(
                    cliente.id_cliente,
                    usuario.id_usuario,
                    Utc::now().naive_utc() - Duration::days(1),
                )
                .await?;

            let renta_service = RentaService::new(&test.state.db);
            let moved = renta_service
                .mark_overdue(Utc::now().naive_utc())
                .await
                .unwrap();

            assert_eq!(moved, 1);
            let vencida = RentaRepository::new(&test.state.db)
                .get_by_id(renta.id_renta)
                .await?
                .unwrap();
            assert_eq!(vencida.estado, EstadoRenta::Vencida);

            let returned = renta_service
                .return_rental(renta.id_renta, dec!(50.00))
                .await
                .unwrap();
            assert_eq!(returned.estado, EstadoRenta::Devuelto);

            Ok(())
        }
    }
}
