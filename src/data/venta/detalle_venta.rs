use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::renta::LineItem;

pub struct DetalleVentaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DetalleVentaRepository<'a, C> {
    /// Creates a new instance of [`DetalleVentaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores the lines of a sale, `Subtotal` is computed from each line
    ///
    /// Returns every line of the sale in insertion order.
    pub async fn create_many(
        &self,
        id_venta: i32,
        lineas: &[LineItem],
    ) -> Result<Vec<entity::detalle_ventas::Model>, DbErr> {
        if lineas.is_empty() {
            return Ok(Vec::new());
        }

        let detalles = lineas.iter().map(|linea| entity::detalle_ventas::ActiveModel {
            id_venta: ActiveValue::Set(id_venta),
            codigo_barras: ActiveValue::Set(linea.codigo_barras.clone()),
            cantidad: ActiveValue::Set(linea.cantidad),
            precio_unitario: ActiveValue::Set(linea.precio_unitario),
            subtotal: ActiveValue::Set(linea.subtotal()),
            ..Default::default()
        });

        entity::prelude::DetalleVentas::insert_many(detalles)
            .exec(self.db)
            .await?;

        self.get_by_venta(id_venta).await
    }

    pub async fn get_by_venta(
        &self,
        id_venta: i32,
    ) -> Result<Vec<entity::detalle_ventas::Model>, DbErr> {
        entity::prelude::DetalleVentas::find()
            .filter(entity::detalle_ventas::Column::IdVenta.eq(id_venta))
            .order_by_asc(entity::detalle_ventas::Column::IdDetalleVenta)
            .all(self.db)
            .await
    }
}
