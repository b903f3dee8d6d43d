//! Input types and model aliases shared by repositories and services.

pub mod cliente;
pub mod db;
pub mod inventario;
pub mod renta;
pub mod usuario;
pub mod venta;
