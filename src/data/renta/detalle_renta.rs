use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::renta::LineItem;

pub struct DetalleRentaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DetalleRentaRepository<'a, C> {
    /// Creates a new instance of [`DetalleRentaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores the lines of a rental, `Subtotal` is computed from each line
    ///
    /// Returns every line of the rental in insertion order.
    pub async fn create_many(
        &self,
        id_renta: i32,
        lineas: &[LineItem],
    ) -> Result<Vec<entity::detalle_rentas::Model>, DbErr> {
        if lineas.is_empty() {
            return Ok(Vec::new());
        }

        let detalles = lineas.iter().map(|linea| entity::detalle_rentas::ActiveModel {
            id_renta: ActiveValue::Set(id_renta),
            codigo_barras: ActiveValue::Set(linea.codigo_barras.clone()),
            cantidad: ActiveValue::Set(linea.cantidad),
            precio_unitario: ActiveValue::Set(linea.precio_unitario),
            subtotal: ActiveValue::Set(linea.subtotal()),
            ..Default::default()
        });

        entity::prelude::DetalleRentas::insert_many(detalles)
            .exec(self.db)
            .await?;

        self.get_by_renta(id_renta).await
    }

    pub async fn get_by_renta(
        &self,
        id_renta: i32,
    ) -> Result<Vec<entity::detalle_rentas::Model>, DbErr> {
        entity::prelude::DetalleRentas::find()
            .filter(entity::detalle_rentas::Column::IdRenta.eq(id_renta))
            .order_by_asc(entity::detalle_rentas::Column::IdDetalleRenta)
            .all(self.db)
            .await
    }
}
