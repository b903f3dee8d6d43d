use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250121_000004_inventario::Inventario, m20250121_000005_rentas::Rentas};

static FK_DETALLE_RENTAS_ID_RENTA: &str = "fk-detalle_rentas-id_renta";
static FK_DETALLE_RENTAS_CODIGO_BARRAS: &str = "fk-detalle_rentas-codigo_barras";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DetalleRentas::Table)
                    .if_not_exists()
                    .col(pk_auto(DetalleRentas::IdDetalleRenta))
                    .col(integer(DetalleRentas::IdRenta))
                    .col(string_len(DetalleRentas::CodigoBarras, 50))
                    .col(integer(DetalleRentas::Cantidad))
                    .col(decimal_len(DetalleRentas::PrecioUnitario, 10, 2))
                    .col(decimal_len(DetalleRentas::Subtotal, 10, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DETALLE_RENTAS_ID_RENTA)
                            .from(DetalleRentas::Table, DetalleRentas::IdRenta)
                            .to(Rentas::Table, Rentas::IdRenta)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DETALLE_RENTAS_CODIGO_BARRAS)
                            .from(DetalleRentas::Table, DetalleRentas::CodigoBarras)
                            .to(Inventario::Table, Inventario::CodigoBarras)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DetalleRentas::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DetalleRentas {
    #[sea_orm(iden = "detalle_rentas")]
    Table,
    #[sea_orm(iden = "Id_DetalleRenta")]
    IdDetalleRenta,
    #[sea_orm(iden = "Id_Renta")]
    IdRenta,
    #[sea_orm(iden = "Codigo_Barras")]
    CodigoBarras,
    #[sea_orm(iden = "Cantidad")]
    Cantidad,
    #[sea_orm(iden = "Precio_Unitario")]
    PrecioUnitario,
    #[sea_orm(iden = "Subtotal")]
    Subtotal,
}
