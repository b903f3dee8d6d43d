//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate, used in repository and service
//! signatures.

pub type ClienteModel = entity::clientes::Model;

/// A named shop setting such as `PENALIZACION_DIA`.
pub type ConfiguracionModel = entity::configuracion::Model;

/// A costume in stock, keyed by barcode.
pub type InventarioModel = entity::inventario::Model;

pub type UsuarioModel = entity::usuarios::Model;

/// Rental header. Lines are [`DetalleRentaModel`].
pub type RentaModel = entity::rentas::Model;

pub type DetalleRentaModel = entity::detalle_rentas::Model;

/// Sale header. Lines are [`DetalleVentaModel`].
pub type VentaModel = entity::ventas::Model;

pub type DetalleVentaModel = entity::detalle_ventas::Model;
