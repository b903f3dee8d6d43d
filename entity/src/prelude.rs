pub use super::clientes::Entity as Clientes;
pub use super::configuracion::Entity as Configuracion;
pub use super::detalle_rentas::Entity as DetalleRentas;
pub use super::detalle_ventas::Entity as DetalleVentas;
pub use super::inventario::Entity as Inventario;
pub use super::rentas::Entity as Rentas;
pub use super::usuarios::Entity as Usuarios;
pub use super::ventas::Entity as Ventas;
