pub mod detalle_renta;

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::EstadoRenta;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::renta::NewRenta;

pub use detalle_renta::DetalleRentaRepository;

pub struct RentaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RentaRepository<'a, C> {
    /// Creates a new instance of [`RentaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a rental header in state `Activa` with no penalty
    ///
    /// Lines are stored separately through [`DetalleRentaRepository`]. When
    /// `renta.fecha_renta` is `None` the database assigns the current time.
    pub async fn create(
        &self,
        renta: &NewRenta,
        total: Decimal,
    ) -> Result<entity::rentas::Model, DbErr> {
        let renta = entity::rentas::ActiveModel {
            id_cliente: ActiveValue::Set(renta.id_cliente),
            id_usuario: ActiveValue::Set(renta.id_usuario),
            fecha_renta: match renta.fecha_renta {
                Some(fecha) => ActiveValue::Set(fecha),
                None => ActiveValue::NotSet,
            },
            fecha_devolucion: ActiveValue::Set(renta.fecha_devolucion),
            dias_renta: ActiveValue::Set(renta.dias_renta),
            total: ActiveValue::Set(total),
            deposito: ActiveValue::Set(renta.deposito),
            ..Default::default()
        };

        renta.insert(self.db).await
    }

    pub async fn get_by_id(&self, id_renta: i32) -> Result<Option<entity::rentas::Model>, DbErr> {
        entity::prelude::Rentas::find_by_id(id_renta)
            .one(self.db)
            .await
    }

    /// A rental together with its lines
    pub async fn get_with_detalles(
        &self,
        id_renta: i32,
    ) -> Result<Option<(entity::rentas::Model, Vec<entity::detalle_rentas::Model>)>, DbErr> {
        let rentas = entity::prelude::Rentas::find_by_id(id_renta)
            .find_with_related(entity::prelude::DetalleRentas)
            .all(self.db)
            .await?;

        Ok(rentas.into_iter().next())
    }

    /// Rentals in `estado`, earliest due date first
    pub async fn list_by_estado(
        &self,
        estado: EstadoRenta,
    ) -> Result<Vec<entity::rentas::Model>, DbErr> {
        entity::prelude::Rentas::find()
            .filter(entity::rentas::Column::Estado.eq(estado))
            .order_by_asc(entity::rentas::Column::FechaDevolucion)
            .all(self.db)
            .await
    }

    /// Rentals of a customer, newest first
    pub async fn list_by_cliente(
        &self,
        id_cliente: i32,
    ) -> Result<Vec<entity::rentas::Model>, DbErr> {
        entity::prelude::Rentas::find()
            .filter(entity::rentas::Column::IdCliente.eq(id_cliente))
            .order_by_desc(entity::rentas::Column::FechaRenta)
            .order_by_desc(entity::rentas::Column::IdRenta)
            .all(self.db)
            .await
    }

    /// Stamps the return date, stores the penalty and moves the rental to `Devuelto`
    ///
    /// Does not check the current state; the rental service does.
    pub async fn mark_returned(
        &self,
        id_renta: i32,
        fecha_devuelto: NaiveDateTime,
        penalizacion: Decimal,
    ) -> Result<Option<entity::rentas::Model>, DbErr> {
        let renta = match self.get_by_id(id_renta).await? {
            Some(renta) => renta,
            None => return Ok(None),
        };

        let mut renta_am = renta.into_active_model();
        renta_am.fecha_devuelto = ActiveValue::Set(Some(fecha_devuelto));
        renta_am.penalizacion = ActiveValue::Set(penalizacion);
        renta_am.estado = ActiveValue::Set(EstadoRenta::Devuelto);

        let renta = renta_am.update(self.db).await?;

        Ok(Some(renta))
    }

    /// Moves every `Activa` rental due before `now` to `Vencida`
    ///
    /// Returns the number of rentals moved.
    pub async fn mark_overdue(&self, now: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::Rentas::update_many()
            .set(entity::rentas::ActiveModel {
                estado: ActiveValue::Set(EstadoRenta::Vencida),
                ..Default::default()
            })
            .filter(entity::rentas::Column::Estado.eq(EstadoRenta::Activa))
            .filter(entity::rentas::Column::FechaDevolucion.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a rental, its lines are removed by `ON DELETE CASCADE`
    pub async fn delete(&self, id_renta: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Rentas::delete_by_id(id_renta)
            .exec(self.db)
            .await
    }

    pub async fn count_by_estado(&self, estado: EstadoRenta) -> Result<u64, DbErr> {
        entity::prelude::Rentas::find()
            .filter(entity::rentas::Column::Estado.eq(estado))
            .count(self.db)
            .await
    }

    /// Sum of all penalties recorded on returned rentals
    pub async fn penalizacion_total(&self) -> Result<Decimal, DbErr> {
        let penalizaciones = entity::prelude::Rentas::find()
            .select_only()
            .column(entity::rentas::Column::Penalizacion)
            .filter(entity::rentas::Column::Estado.eq(EstadoRenta::Devuelto))
            .into_tuple::<Decimal>()
            .all(self.db)
            .await?;

        Ok(penalizaciones.into_iter().sum())
    }
}
