use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250121_000004_inventario::Inventario, m20250121_000007_ventas::Ventas};

static FK_DETALLE_VENTAS_ID_VENTA: &str = "fk-detalle_ventas-id_venta";
static FK_DETALLE_VENTAS_CODIGO_BARRAS: &str = "fk-detalle_ventas-codigo_barras";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DetalleVentas::Table)
                    .if_not_exists()
                    .col(pk_auto(DetalleVentas::IdDetalleVenta))
                    .col(integer(DetalleVentas::IdVenta))
                    .col(string_len(DetalleVentas::CodigoBarras, 50))
                    .col(integer(DetalleVentas::Cantidad))
                    .col(decimal_len(DetalleVentas::PrecioUnitario, 10, 2))
                    .col(decimal_len(DetalleVentas::Subtotal, 10, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DETALLE_VENTAS_ID_VENTA)
                            .from(DetalleVentas::Table, DetalleVentas::IdVenta)
                            .to(Ventas::Table, Ventas::IdVenta)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DETALLE_VENTAS_CODIGO_BARRAS)
                            .from(DetalleVentas::Table, DetalleVentas::CodigoBarras)
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
            .drop_table(Table::drop().table(DetalleVentas::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DetalleVentas {
    #[sea_orm(iden = "detalle_ventas")]
    Table,
    #[sea_orm(iden = "ID_DetalleVenta")]
    IdDetalleVenta,
    #[sea_orm(iden = "Id_Venta")]
    IdVenta,
    #[sea_orm(iden = "Codigo_Barras")]
    CodigoBarras,
    #[sea_orm(iden = "Cantidad")]
    Cantidad,
    #[sea_orm(iden = "Precio_Unitario")]
    PrecioUnitario,
    #[sea_orm(iden = "Subtotal")]
    Subtotal,
}
