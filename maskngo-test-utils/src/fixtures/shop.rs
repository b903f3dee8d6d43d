use chrono::{Duration, NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{EstadoRenta, EstadoVenta, MetodoPago, Rol};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{
    constant::{TEST_CODIGO_BARRAS, TEST_PASSWORD_PLACEHOLDER, TEST_TELEFONO},
    error::TestError,
    fixtures::factory,
    TestSetup,
};

impl TestSetup {
    pub fn shop<'a>(&'a mut self) -> ShopFixtures<'a> {
        ShopFixtures { setup: self }
    }
}

pub struct ShopFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> ShopFixtures<'a> {
    pub async fn insert_mock_cliente(
        &self,
        telefono: &str,
    ) -> Result<entity::clientes::Model, TestError> {
        Ok(
            entity::prelude::Clientes::insert(entity::clientes::ActiveModel {
                nombre: ActiveValue::Set("Maria".to_string()),
                apellido_paterno: ActiveValue::Set("Lopez".to_string()),
                telefono: ActiveValue::Set(telefono.to_string()),
                fecha_registro: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_mock_usuario(
        &self,
        usuario: &str,
        rol: Rol,
    ) -> Result<entity::usuarios::Model, TestError> {
        Ok(
            entity::prelude::Usuarios::insert(entity::usuarios::ActiveModel {
                usuario: ActiveValue::Set(usuario.to_string()),
                nombre: ActiveValue::Set("Juan".to_string()),
                apellido_paterno: ActiveValue::Set("Perez".to_string()),
                password: ActiveValue::Set(TEST_PASSWORD_PLACEHOLDER.to_string()),
                rol: ActiveValue::Set(rol),
                fecha_registro: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert an active costume built by [`factory::mock_inventario_model`].
    pub async fn insert_mock_disfraz(
        &self,
        codigo_barras: &str,
        stock: i32,
        disponible: i32,
    ) -> Result<entity::inventario::Model, TestError> {
        let disfraz = factory::mock_inventario_model(codigo_barras, stock, disponible)
            .into_active_model()
            .reset_all();

        Ok(entity::prelude::Inventario::insert(disfraz)
            .exec_with_returning(&self.setup.state.db)
            .await?)
    }

    /// Insert an `Activa` rental with no lines and a zero total.
    pub async fn insert_mock_renta(
        &self,
        id_cliente: i32,
        id_usuario: i32,
        fecha_devolucion: NaiveDateTime,
    ) -> Result<entity::rentas::Model, TestError> {
        let fecha_renta = fecha_devolucion - Duration::days(3);

        Ok(
            entity::prelude::Rentas::insert(entity::rentas::ActiveModel {
                id_cliente: ActiveValue::Set(id_cliente),
                id_usuario: ActiveValue::Set(id_usuario),
                fecha_renta: ActiveValue::Set(fecha_renta),
                fecha_devolucion: ActiveValue::Set(fecha_devolucion),
                fecha_devuelto: ActiveValue::Set(None),
                penalizacion: ActiveValue::Set(Decimal::ZERO),
                dias_renta: ActiveValue::Set(3),
                total: ActiveValue::Set(Decimal::ZERO),
                deposito: ActiveValue::Set(Decimal::ZERO),
                estado: ActiveValue::Set(EstadoRenta::Activa),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_mock_detalle_renta(
        &self,
        id_renta: i32,
        codigo_barras: &str,
        cantidad: i32,
        precio_unitario: Decimal,
    ) -> Result<entity::detalle_rentas::Model, TestError> {
        Ok(
            entity::prelude::DetalleRentas::insert(entity::detalle_rentas::ActiveModel {
                id_renta: ActiveValue::Set(id_renta),
                codigo_barras: ActiveValue::Set(codigo_barras.to_string()),
                cantidad: ActiveValue::Set(cantidad),
                precio_unitario: ActiveValue::Set(precio_unitario),
                subtotal: ActiveValue::Set(precio_unitario * Decimal::from(cantidad)),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert an `Activa` cash sale without discount.
    pub async fn insert_mock_venta(
        &self,
        id_cliente: i32,
        usuario_id: i32,
        folio: &str,
        total: Decimal,
    ) -> Result<entity::ventas::Model, TestError> {
        Ok(
            entity::prelude::Ventas::insert(entity::ventas::ActiveModel {
                folio: ActiveValue::Set(folio.to_string()),
                id_cliente: ActiveValue::Set(id_cliente),
                usuario_id: ActiveValue::Set(usuario_id),
                fecha_venta: ActiveValue::Set(Utc::now().naive_utc()),
                total: ActiveValue::Set(total),
                descuento_porcentaje: ActiveValue::Set(Some(Decimal::ZERO)),
                descuento_monto: ActiveValue::Set(Some(Decimal::ZERO)),
                motivo_descuento: ActiveValue::Set(None),
                motivo_venta: ActiveValue::Set(None),
                notas: ActiveValue::Set(None),
                estado: ActiveValue::Set(EstadoVenta::Activa),
                cancelada_por: ActiveValue::Set(None),
                fecha_cancelacion: ActiveValue::Set(None),
                motivo_cancelacion: ActiveValue::Set(None),
                metodo_pago: ActiveValue::Set(MetodoPago::Efectivo),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_mock_detalle_venta(
        &self,
        id_venta: i32,
        codigo_barras: &str,
        cantidad: i32,
        precio_unitario: Decimal,
    ) -> Result<entity::detalle_ventas::Model, TestError> {
        Ok(
            entity::prelude::DetalleVentas::insert(entity::detalle_ventas::ActiveModel {
                id_venta: ActiveValue::Set(id_venta),
                codigo_barras: ActiveValue::Set(codigo_barras.to_string()),
                cantidad: ActiveValue::Set(cantidad),
                precio_unitario: ActiveValue::Set(precio_unitario),
                subtotal: ActiveValue::Set(precio_unitario * Decimal::from(cantidad)),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a customer, an employee, the `DISNEY0000` costume (Stock 5, Disponible 0) and a
    /// rental of one unit due in three days.
    ///
    /// Uses the username `empleado`, so call it at most once per test.
    pub async fn insert_mock_renta_with_detalle(
        &mut self,
    ) -> Result<
        (
            entity::clientes::Model,
            entity::usuarios::Model,
            entity::inventario::Model,
            entity::rentas::Model,
            entity::detalle_rentas::Model,
        ),
        TestError,
    > {
        let cliente = self.insert_mock_cliente(TEST_TELEFONO).await?;
        let usuario = self.insert_mock_usuario("empleado", Rol::Empleado).await?;
        let disfraz = self.insert_mock_disfraz(TEST_CODIGO_BARRAS, 5, 0).await?;

        let due = Utc::now().naive_utc() + Duration::days(3);
        let renta = self
            .insert_mock_renta(cliente.id_cliente, usuario.id_usuario, due)
            .await?;
        let detalle = self
            .insert_mock_detalle_renta(renta.id_renta, &disfraz.codigo_barras, 1, disfraz.precio_renta)
            .await?;

        // Keep the header consistent with its single line
        let mut renta_am = renta.into_active_model();
        renta_am.total = ActiveValue::Set(detalle.subtotal);
        let renta = renta_am.update(&self.setup.state.db).await?;

        Ok((cliente, usuario, disfraz, renta, detalle))
    }

    /// Insert a customer, an employee, the `DISNEY0000` costume and a sale of one unit.
    ///
    /// Uses the username `empleado`, so call it at most once per test.
    pub async fn insert_mock_venta_with_detalle(
        &mut self,
        folio: &str,
    ) -> Result<
        (
            entity::clientes::Model,
            entity::usuarios::Model,
            entity::inventario::Model,
            entity::ventas::Model,
            entity::detalle_ventas::Model,
        ),
        TestError,
    > {
        let cliente = self.insert_mock_cliente(TEST_TELEFONO).await?;
        let usuario = self.insert_mock_usuario("empleado", Rol::Empleado).await?;
        let disfraz = self.insert_mock_disfraz(TEST_CODIGO_BARRAS, 5, 5).await?;

        let venta = self
            .insert_mock_venta(
                cliente.id_cliente,
                usuario.id_usuario,
                folio,
                disfraz.precio_venta,
            )
            .await?;
        let detalle = self
            .insert_mock_detalle_venta(venta.id_venta, &disfraz.codigo_barras, 1, disfraz.precio_venta)
            .await?;

        Ok((cliente, usuario, disfraz, venta, detalle))
    }
}
