use entity::sea_orm_active_enums::EstadoInventario;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::inventario::{InventarioUpdate, NewInventarioItem};

pub struct InventarioRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventarioRepository<'a, C> {
    /// Creates a new instance of [`InventarioRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an item, `Estado` takes its `Activo` default
    pub async fn create(
        &self,
        item: NewInventarioItem,
    ) -> Result<entity::inventario::Model, DbErr> {
        let item = entity::inventario::ActiveModel {
            codigo_barras: ActiveValue::Set(item.codigo_barras),
            descripcion: ActiveValue::Set(item.descripcion),
            talla: ActiveValue::Set(item.talla),
            color: ActiveValue::Set(item.color),
            categoria: ActiveValue::Set(item.categoria),
            precio_venta: ActiveValue::Set(item.precio_venta),
            precio_renta: ActiveValue::Set(item.precio_renta),
            stock: ActiveValue::Set(item.stock),
            disponible: ActiveValue::Set(item.disponible),
            estado: ActiveValue::NotSet,
        };

        item.insert(self.db).await
    }

    pub async fn get_by_codigo(
        &self,
        codigo_barras: &str,
    ) -> Result<Option<entity::inventario::Model>, DbErr> {
        entity::prelude::Inventario::find_by_id(codigo_barras.to_string())
            .one(self.db)
            .await
    }

    /// Items ordered by description, optionally of one category and only active ones
    pub async fn list(
        &self,
        categoria: Option<&str>,
        solo_activos: bool,
    ) -> Result<Vec<entity::inventario::Model>, DbErr> {
        let mut query = entity::prelude::Inventario::find();
        if let Some(categoria) = categoria {
            query = query.filter(entity::inventario::Column::Categoria.eq(categoria));
        }
        if solo_activos {
            query = query.filter(entity::inventario::Column::Estado.eq(EstadoInventario::Activo));
        }

        query
            .order_by_asc(entity::inventario::Column::Descripcion)
            .all(self.db)
            .await
    }

    /// Items whose barcode, description or category contains `term`
    pub async fn search(&self, term: &str) -> Result<Vec<entity::inventario::Model>, DbErr> {
        entity::prelude::Inventario::find()
            .filter(
                Condition::any()
                    .add(entity::inventario::Column::CodigoBarras.contains(term))
                    .add(entity::inventario::Column::Descripcion.contains(term))
                    .add(entity::inventario::Column::Categoria.contains(term)),
            )
            .order_by_asc(entity::inventario::Column::Descripcion)
            .all(self.db)
            .await
    }

    /// Active items with at least one unit on the shelf
    pub async fn list_disponibles(&self) -> Result<Vec<entity::inventario::Model>, DbErr> {
        entity::prelude::Inventario::find()
            .filter(entity::inventario::Column::Estado.eq(EstadoInventario::Activo))
            .filter(entity::inventario::Column::Disponible.gt(0))
            .order_by_asc(entity::inventario::Column::Descripcion)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        codigo_barras: &str,
        update: InventarioUpdate,
    ) -> Result<Option<entity::inventario::Model>, DbErr> {
        let item = match self.get_by_codigo(codigo_barras).await? {
            Some(item) => item,
            None => return Ok(None),
        };

        let mut item_am = item.into_active_model();
        item_am.descripcion = ActiveValue::Set(update.descripcion);
        item_am.talla = ActiveValue::Set(update.talla);
        item_am.color = ActiveValue::Set(update.color);
        item_am.categoria = ActiveValue::Set(update.categoria);
        item_am.precio_venta = ActiveValue::Set(update.precio_venta);
        item_am.precio_renta = ActiveValue::Set(update.precio_renta);
        item_am.stock = ActiveValue::Set(update.stock);
        item_am.disponible = ActiveValue::Set(update.disponible);

        let item = item_am.update(self.db).await?;

        Ok(Some(item))
    }

    pub async fn set_estado(
        &self,
        codigo_barras: &str,
        estado: EstadoInventario,
    ) -> Result<Option<entity::inventario::Model>, DbErr> {
        let item = match self.get_by_codigo(codigo_barras).await? {
            Some(item) => item,
            None => return Ok(None),
        };

        let mut item_am = item.into_active_model();
        item_am.estado = ActiveValue::Set(estado);

        let item = item_am.update(self.db).await?;

        Ok(Some(item))
    }

    /// Whether any rental or sale line references the item
    pub async fn has_movements(&self, codigo_barras: &str) -> Result<bool, DbErr> {
        let rentas = entity::prelude::DetalleRentas::find()
            .filter(entity::detalle_rentas::Column::CodigoBarras.eq(codigo_barras))
            .count(self.db)
            .await?;
        if rentas > 0 {
            return Ok(true);
        }

        let ventas = entity::prelude::DetalleVentas::find()
            .filter(entity::detalle_ventas::Column::CodigoBarras.eq(codigo_barras))
            .count(self.db)
            .await?;

        Ok(ventas > 0)
    }

    /// Deletes an item
    ///
    /// Fails with a foreign key error while line items reference it.
    pub async fn delete(&self, codigo_barras: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Inventario::delete_by_id(codigo_barras.to_string())
            .exec(self.db)
            .await
    }

    /// Sum of `Stock` over active items
    pub async fn stock_total(&self) -> Result<i64, DbErr> {
        self.sum_active(entity::inventario::Column::Stock).await
    }

    /// Sum of `Disponible` over active items
    pub async fn disponible_total(&self) -> Result<i64, DbErr> {
        self.sum_active(entity::inventario::Column::Disponible).await
    }

    async fn sum_active(&self, column: entity::inventario::Column) -> Result<i64, DbErr> {
        let counts = entity::prelude::Inventario::find()
            .select_only()
            .column(column)
            .filter(entity::inventario::Column::Estado.eq(EstadoInventario::Activo))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(counts.into_iter().map(i64::from).sum())
    }
}
