//! Factory functions for mock database models.
//!
//! These build model instances in memory only. Fixtures in [`super::shop`] turn them into
//! rows; unit tests can use them directly.

use chrono::Utc;
use entity::sea_orm_active_enums::{EstadoInventario, Rol};
use rust_decimal::Decimal;

/// Create a mock costume with rental price 300.00 and sale price 850.00.
///
/// # Arguments
/// - `codigo_barras` - Barcode used as primary key
/// - `stock` - Units owned by the shop
/// - `disponible` - Units currently on the shelf
pub fn mock_inventario_model(
    codigo_barras: &str,
    stock: i32,
    disponible: i32,
) -> entity::inventario::Model {
    entity::inventario::Model {
        codigo_barras: codigo_barras.to_string(),
        descripcion: format!("Disfraz {}", codigo_barras),
        talla: "M".to_string(),
        color: Some("Azul".to_string()),
        categoria: Some("Infantil".to_string()),
        precio_venta: Decimal::new(85000, 2),
        precio_renta: Decimal::new(30000, 2),
        stock,
        disponible,
        estado: EstadoInventario::Activo,
    }
}

/// Create a mock employee or admin model.
///
/// The password column holds a placeholder that is not a valid hash.
pub fn mock_usuario_model(id_usuario: i32, usuario: &str, rol: Rol) -> entity::usuarios::Model {
    entity::usuarios::Model {
        id_usuario,
        usuario: usuario.to_string(),
        nombre: "Juan".to_string(),
        apellido_paterno: "Perez".to_string(),
        password: crate::constant::TEST_PASSWORD_PLACEHOLDER.to_string(),
        rol,
        fecha_registro: Utc::now().naive_utc(),
    }
}
