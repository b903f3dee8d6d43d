use sea_orm_migration::prelude::*;

use crate::m20250121_000003_configuracion::Configuracion;

/// Settings the shop starts with: `(Nombre_Config, Valor_Config, Descripcion)`.
const SEED_ROWS: [(&str, &str, &str); 2] = [
    ("PENALIZACION_DIA", "50.00", "Late fee per overdue rental day"),
    (
        "DESCUENTO_MAXIMO",
        "50.00",
        "Maximum discount percentage allowed on a sale",
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Configuracion::Table).columns([
            Configuracion::NombreConfig,
            Configuracion::ValorConfig,
            Configuracion::Descripcion,
        ]);

        for (nombre, valor, descripcion) in SEED_ROWS {
            insert
                .values([nombre.into(), valor.into(), descripcion.into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Configuracion::Table)
            .and_where(
                Expr::col(Configuracion::NombreConfig)
                    .is_in(SEED_ROWS.map(|(nombre, _, _)| nombre)),
            )
            .to_owned();

        manager.exec_stmt(delete).await?;

        Ok(())
    }
}
