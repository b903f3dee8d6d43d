//! SeaORM entities for the MaskNGo schema.
//!
//! One module per table. Table and column names match the shop's original MySQL schema
//! exactly, so the entities can be pointed at an existing database without renaming anything.

pub mod prelude;

pub mod clientes;
pub mod configuracion;
pub mod detalle_rentas;
pub mod detalle_ventas;
pub mod inventario;
pub mod rentas;
pub mod sea_orm_active_enums;
pub mod usuarios;
pub mod ventas;
