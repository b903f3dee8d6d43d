use sea_orm::DatabaseConnection;

use crate::{
    data::cliente::ClienteRepository,
    error::{constraint::ConstraintError, validation::ValidationError, Error},
    model::{
        cliente::{ClienteUpdate, NewCliente},
        db::ClienteModel,
    },
    util::validation::{validate_nombre, validate_telefono},
};

pub struct ClienteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClienteService<'a> {
    /// Creates a new instance of [`ClienteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a customer after validating name, surname and phone
    ///
    /// The phone is stored as digits only and must not belong to another customer.
    ///
    /// # Returns
    /// - `Ok(ClienteModel)`: The stored customer
    /// - `Err(Error::ValidationError(ValidationError::DuplicateTelefono { .. }))`: The phone is
    ///   already registered
    /// - `Err(Error::ValidationError(_))`: Invalid name, surname or phone
    pub async fn register(&self, cliente: NewCliente) -> Result<ClienteModel, Error> {
        let cliente = validate_cliente(cliente)?;

        let cliente_repo = ClienteRepository::new(self.db);
        ensure_telefono_free(&cliente_repo, &cliente.telefono, None).await?;
        let cliente = cliente_repo.create(cliente).await?;

        tracing::info!(id_cliente = cliente.id_cliente, "Registered customer");

        Ok(cliente)
    }

    pub async fn update(
        &self,
        id_cliente: i32,
        update: ClienteUpdate,
    ) -> Result<ClienteModel, Error> {
        let update = validate_cliente(update)?;

        let cliente_repo = ClienteRepository::new(self.db);
        ensure_telefono_free(&cliente_repo, &update.telefono, Some(id_cliente)).await?;
        cliente_repo
            .update(id_cliente, update)
            .await?
            .ok_or_else(|| Error::not_found("Cliente", id_cliente))
    }

    /// Deletes a customer with no rentals or sales
    ///
    /// # Returns
    /// - `Ok(())`: The customer was deleted
    /// - `Err(Error::NotFound { .. })`: No customer with that ID
    /// - `Err(Error::ConstraintError(ConstraintError::StillReferenced { .. }))`: The customer
    ///   still has rentals or sales
    pub async fn remove(&self, id_cliente: i32) -> Result<(), Error> {
        let cliente_repo = ClienteRepository::new(self.db);

        if cliente_repo.get_by_id(id_cliente).await?.is_none() {
            return Err(Error::not_found("Cliente", id_cliente));
        }
        if cliente_repo.has_movements(id_cliente).await? {
            return Err(ConstraintError::StillReferenced {
                entity: "Cliente",
                key: id_cliente.to_string(),
                referenced_by: "rentas or ventas",
            }
            .into());
        }

        cliente_repo.delete(id_cliente).await?;

        tracing::info!(id_cliente, "Removed customer");

        Ok(())
    }
}

/// Fails when a customer other than `except` already has `telefono`
async fn ensure_telefono_free(
    cliente_repo: &ClienteRepository<'_, DatabaseConnection>,
    telefono: &str,
    except: Option<i32>,
) -> Result<(), Error> {
    let existing = cliente_repo.find_by_telefono(telefono).await?;

    match existing.iter().find(|c| Some(c.id_cliente) != except) {
        Some(other) => Err(ValidationError::DuplicateTelefono {
            telefono: telefono.to_string(),
            id_cliente: other.id_cliente,
        }
        .into()),
        None => Ok(()),
    }
}

fn validate_cliente(cliente: NewCliente) -> Result<NewCliente, ValidationError> {
    Ok(NewCliente {
        nombre: validate_nombre("nombre", &cliente.nombre)?,
        apellido_paterno: validate_nombre("apellido_paterno", &cliente.apellido_paterno)?,
        telefono: validate_telefono(&cliente.telefono)?,
    })
}
