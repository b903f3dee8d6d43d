use entity::sea_orm_active_enums::Rol;
use serde::{Deserialize, Serialize};

/// Registration form of an account. `password` is the plaintext and is hashed before storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUsuario {
    pub usuario: String,
    pub nombre: String,
    pub apellido_paterno: String,
    pub password: String,
    pub rol: Rol,
}

/// Profile edit of an account. A new password is hashed before storage; `None` keeps the
/// current one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsuarioUpdate {
    pub nombre: String,
    pub apellido_paterno: String,
    pub rol: Rol,
    pub password: Option<String>,
}
