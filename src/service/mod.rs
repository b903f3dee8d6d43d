//! Service layer.
//!
//! Services validate input, enforce the rules the schema leaves to the application (such as
//! `Disponible <= Stock` or line subtotals) and run multi-statement operations inside a single
//! transaction. They return [`crate::error::Error`].

pub mod cliente;
pub mod configuracion;
pub mod inventario;
pub mod renta;
pub mod seed;
pub mod usuario;
pub mod venta;

mod line_item;
