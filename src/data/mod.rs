//! Data access layer repositories.
//!
//! One repository per table, each generic over [`sea_orm::ConnectionTrait`] so the same code
//! runs on a pooled connection or inside a transaction. Repositories return
//! [`sea_orm::DbErr`] and hold no business rules; those live in [`crate::service`].

pub mod cliente;
pub mod configuracion;
pub mod inventario;
pub mod renta;
pub mod usuario;
pub mod venta;
