pub mod detalle_venta;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use entity::sea_orm_active_enums::EstadoVenta;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::model::venta::NewVenta;

pub use detalle_venta::DetalleVentaRepository;

pub struct VentaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VentaRepository<'a, C> {
    /// Creates a new instance of [`VentaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a sale header in state `Activa` dated `fecha_venta`
    ///
    /// Without a discount both discount columns keep their `0.00` default, without a payment
    /// method the sale is `Efectivo`.
    pub async fn create(
        &self,
        venta: &NewVenta,
        folio: &str,
        total: Decimal,
        fecha_venta: NaiveDateTime,
    ) -> Result<entity::ventas::Model, DbErr> {
        let mut venta_am = entity::ventas::ActiveModel {
            folio: ActiveValue::Set(folio.to_string()),
            fecha_venta: ActiveValue::Set(fecha_venta),
            id_cliente: ActiveValue::Set(venta.id_cliente),
            usuario_id: ActiveValue::Set(venta.usuario_id),
            total: ActiveValue::Set(total),
            motivo_venta: ActiveValue::Set(venta.motivo_venta.clone()),
            notas: ActiveValue::Set(venta.notas.clone()),
            ..Default::default()
        };

        if let Some(descuento) = &venta.descuento {
            venta_am.descuento_porcentaje = ActiveValue::Set(Some(descuento.porcentaje));
            venta_am.descuento_monto = ActiveValue::Set(Some(descuento.monto));
            venta_am.motivo_descuento = ActiveValue::Set(Some(descuento.motivo.clone()));
        }
        if let Some(metodo_pago) = &venta.metodo_pago {
            venta_am.metodo_pago = ActiveValue::Set(*metodo_pago);
        }

        venta_am.insert(self.db).await
    }

    pub async fn get_by_id(&self, id_venta: i32) -> Result<Option<entity::ventas::Model>, DbErr> {
        entity::prelude::Ventas::find_by_id(id_venta)
            .one(self.db)
            .await
    }

    pub async fn get_by_folio(&self, folio: &str) -> Result<Option<entity::ventas::Model>, DbErr> {
        entity::prelude::Ventas::find()
            .filter(entity::ventas::Column::Folio.eq(folio))
            .one(self.db)
            .await
    }

    /// A sale together with its lines
    pub async fn get_with_detalles(
        &self,
        id_venta: i32,
    ) -> Result<Option<(entity::ventas::Model, Vec<entity::detalle_ventas::Model>)>, DbErr> {
        let ventas = entity::prelude::Ventas::find_by_id(id_venta)
            .find_with_related(entity::prelude::DetalleVentas)
            .all(self.db)
            .await?;

        Ok(ventas.into_iter().next())
    }

    /// Sales of a customer, newest first
    pub async fn list_by_cliente(
        &self,
        id_cliente: i32,
    ) -> Result<Vec<entity::ventas::Model>, DbErr> {
        entity::prelude::Ventas::find()
            .filter(entity::ventas::Column::IdCliente.eq(id_cliente))
            .order_by_desc(entity::ventas::Column::FechaVenta)
            .order_by_desc(entity::ventas::Column::IdVenta)
            .all(self.db)
            .await
    }

    /// Sales made on `fecha` in any state, in folio order
    pub async fn list_by_fecha(&self, fecha: NaiveDate) -> Result<Vec<entity::ventas::Model>, DbErr> {
        on_date(fecha)
            .order_by_asc(entity::ventas::Column::Folio)
            .all(self.db)
            .await
    }

    /// Sales made between `inicio` and `fin`, both days included, newest first
    pub async fn list_by_rango(
        &self,
        inicio: NaiveDate,
        fin: NaiveDate,
    ) -> Result<Vec<entity::ventas::Model>, DbErr> {
        let start = inicio.and_time(NaiveTime::MIN);
        let end = fin.and_time(NaiveTime::MIN) + Duration::days(1);

        entity::prelude::Ventas::find()
            .filter(entity::ventas::Column::FechaVenta.gte(start))
            .filter(entity::ventas::Column::FechaVenta.lt(end))
            .order_by_desc(entity::ventas::Column::FechaVenta)
            .order_by_desc(entity::ventas::Column::IdVenta)
            .all(self.db)
            .await
    }

    /// Sales tagged with a campaign such as `Halloween`, newest first
    pub async fn list_by_motivo_venta(
        &self,
        motivo_venta: &str,
    ) -> Result<Vec<entity::ventas::Model>, DbErr> {
        entity::prelude::Ventas::find()
            .filter(entity::ventas::Column::MotivoVenta.eq(motivo_venta))
            .order_by_desc(entity::ventas::Column::FechaVenta)
            .order_by_desc(entity::ventas::Column::IdVenta)
            .all(self.db)
            .await
    }

    /// The highest folio starting with `prefix`
    ///
    /// Sequences are zero padded, so the lexical maximum is the numeric one.
    pub async fn last_folio_for_prefix(&self, prefix: &str) -> Result<Option<String>, DbErr> {
        entity::prelude::Ventas::find()
            .select_only()
            .column(entity::ventas::Column::Folio)
            .filter(entity::ventas::Column::Folio.starts_with(prefix))
            .order_by_desc(entity::ventas::Column::Folio)
            .into_tuple::<String>()
            .one(self.db)
            .await
    }

    /// Moves a sale to `Cancelada` and records who cancelled it, when and why
    ///
    /// Does not check the current state or the role of `cancelada_por`; the sale service does.
    pub async fn cancel(
        &self,
        id_venta: i32,
        cancelada_por: i32,
        motivo_cancelacion: &str,
        fecha_cancelacion: NaiveDateTime,
    ) -> Result<Option<entity::ventas::Model>, DbErr> {
        let venta = match self.get_by_id(id_venta).await? {
            Some(venta) => venta,
            None => return Ok(None),
        };

        let mut venta_am = venta.into_active_model();
        venta_am.estado = ActiveValue::Set(EstadoVenta::Cancelada);
        venta_am.cancelada_por = ActiveValue::Set(Some(cancelada_por));
        venta_am.fecha_cancelacion = ActiveValue::Set(Some(fecha_cancelacion));
        venta_am.motivo_cancelacion = ActiveValue::Set(Some(motivo_cancelacion.to_string()));

        let venta = venta_am.update(self.db).await?;

        Ok(Some(venta))
    }

    /// Deletes a sale, its lines are removed by `ON DELETE CASCADE`
    pub async fn delete(&self, id_venta: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ventas::delete_by_id(id_venta)
            .exec(self.db)
            .await
    }

    pub async fn count_by_fecha(&self, fecha: NaiveDate) -> Result<u64, DbErr> {
        on_date(fecha).count(self.db).await
    }

    /// Revenue of the active sales made on `fecha`, net of discounts
    pub async fn total_neto_by_fecha(&self, fecha: NaiveDate) -> Result<Decimal, DbErr> {
        let importes = on_date(fecha)
            .select_only()
            .column(entity::ventas::Column::Total)
            .column(entity::ventas::Column::DescuentoMonto)
            .filter(entity::ventas::Column::Estado.eq(EstadoVenta::Activa))
            .into_tuple::<(Decimal, Option<Decimal>)>()
            .all(self.db)
            .await?;

        Ok(importes
            .into_iter()
            .map(|(total, descuento)| total - descuento.unwrap_or_default())
            .sum())
    }
}

fn on_date(fecha: NaiveDate) -> Select<entity::prelude::Ventas> {
    let start = fecha.and_time(NaiveTime::MIN);
    let end = start + Duration::days(1);

    entity::prelude::Ventas::find()
        .filter(entity::ventas::Column::FechaVenta.gte(start))
        .filter(entity::ventas::Column::FechaVenta.lt(end))
}
