pub use sea_orm_migration::prelude::*;

mod m20250121_000001_usuarios;
mod m20250121_000002_clientes;
mod m20250121_000003_configuracion;
mod m20250121_000004_inventario;
mod m20250121_000005_rentas;
mod m20250121_000006_detalle_rentas;
mod m20250121_000007_ventas;
mod m20250121_000008_detalle_ventas;
mod m20250121_000009_seed_configuracion;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250121_000001_usuarios::Migration),
            Box::new(m20250121_000002_clientes::Migration),
            Box::new(m20250121_000003_configuracion::Migration),
            Box::new(m20250121_000004_inventario::Migration),
            Box::new(m20250121_000005_rentas::Migration),
            Box::new(m20250121_000006_detalle_rentas::Migration),
            Box::new(m20250121_000007_ventas::Migration),
            Box::new(m20250121_000008_detalle_ventas::Migration),
            Box::new(m20250121_000009_seed_configuracion::Migration),
        ]
    }
}
