use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::cliente::{ClienteUpdate, NewCliente},
    util::time::now,
};

pub struct ClienteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClienteRepository<'a, C> {
    /// Creates a new instance of [`ClienteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a customer registered now
    pub async fn create(&self, cliente: NewCliente) -> Result<entity::clientes::Model, DbErr> {
        let cliente = entity::clientes::ActiveModel {
            nombre: ActiveValue::Set(cliente.nombre),
            apellido_paterno: ActiveValue::Set(cliente.apellido_paterno),
            telefono: ActiveValue::Set(cliente.telefono),
            fecha_registro: ActiveValue::Set(now()),
            ..Default::default()
        };

        cliente.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        id_cliente: i32,
    ) -> Result<Option<entity::clientes::Model>, DbErr> {
        entity::prelude::Clientes::find_by_id(id_cliente)
            .one(self.db)
            .await
    }

    /// Customers registered with `telefono`, newest first
    ///
    /// The column carries no unique index; [`crate::service::cliente::ClienteService`] keeps
    /// phone numbers distinct.
    pub async fn find_by_telefono(
        &self,
        telefono: &str,
    ) -> Result<Vec<entity::clientes::Model>, DbErr> {
        entity::prelude::Clientes::find()
            .filter(entity::clientes::Column::Telefono.eq(telefono))
            .order_by_desc(entity::clientes::Column::IdCliente)
            .all(self.db)
            .await
    }

    /// Customers whose name or surname contains `term`
    pub async fn search_by_name(
        &self,
        term: &str,
    ) -> Result<Vec<entity::clientes::Model>, DbErr> {
        entity::prelude::Clientes::find()
            .filter(
                Condition::any()
                    .add(entity::clientes::Column::Nombre.contains(term))
                    .add(entity::clientes::Column::ApellidoPaterno.contains(term)),
            )
            .order_by_asc(entity::clientes::Column::Nombre)
            .order_by_asc(entity::clientes::Column::ApellidoPaterno)
            .all(self.db)
            .await
    }

    /// The `limit` most recently registered customers, newest first
    pub async fn list_recent(&self, limit: u64) -> Result<Vec<entity::clientes::Model>, DbErr> {
        entity::prelude::Clientes::find()
            .order_by_desc(entity::clientes::Column::FechaRegistro)
            .order_by_desc(entity::clientes::Column::IdCliente)
            .limit(limit)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id_cliente: i32,
        update: ClienteUpdate,
    ) -> Result<Option<entity::clientes::Model>, DbErr> {
        let cliente = match self.get_by_id(id_cliente).await? {
            Some(cliente) => cliente,
            None => return Ok(None),
        };

        let mut cliente_am = cliente.into_active_model();
        cliente_am.nombre = ActiveValue::Set(update.nombre);
        cliente_am.apellido_paterno = ActiveValue::Set(update.apellido_paterno);
        cliente_am.telefono = ActiveValue::Set(update.telefono);

        let cliente = cliente_am.update(self.db).await?;

        Ok(Some(cliente))
    }

    /// Deletes a customer
    ///
    /// Fails with a foreign key error while rentals or sales still reference the customer.
    pub async fn delete(&self, id_cliente: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Clientes::delete_by_id(id_cliente)
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Clientes::find().count(self.db).await
    }

    /// Whether any rental or sale references the customer
    pub async fn has_movements(&self, id_cliente: i32) -> Result<bool, DbErr> {
        let rentas = entity::prelude::Rentas::find()
            .filter(entity::rentas::Column::IdCliente.eq(id_cliente))
            .count(self.db)
            .await?;
        if rentas > 0 {
            return Ok(true);
        }

        let ventas = entity::prelude::Ventas::find()
            .filter(entity::ventas::Column::IdCliente.eq(id_cliente))
            .count(self.db)
            .await?;

        Ok(ventas > 0)
    }
}
