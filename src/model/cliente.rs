use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCliente {
    pub nombre: String,
    pub apellido_paterno: String,
    pub telefono: String,
}

/// Replacement values for an existing customer. All fields are written.
pub type ClienteUpdate = NewCliente;
