use sea_orm_migration::{prelude::*, schema::*};

static IDX_INVENTARIO_CATEGORIA: &str = "idx-inventario-categoria";
static IDX_INVENTARIO_ESTADO: &str = "idx-inventario-estado";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventario::Table)
                    .if_not_exists()
                    .col(string_len(Inventario::CodigoBarras, 50).primary_key())
                    .col(text(Inventario::Descripcion))
                    .col(string_len(Inventario::Talla, 20))
                    .col(string_len_null(Inventario::Color, 50))
                    .col(string_len_null(Inventario::Categoria, 100))
                    .col(decimal_len(Inventario::PrecioVenta, 10, 2))
                    .col(decimal_len(Inventario::PrecioRenta, 10, 2))
                    .col(integer(Inventario::Stock).default(0))
                    .col(integer(Inventario::Disponible).default(0))
                    .col(
                        enumeration(
                            Inventario::Estado,
                            EstadoInventario::Enum,
                            [EstadoInventario::Activo, EstadoInventario::Inactivo],
                        )
                        .default("Activo"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVENTARIO_CATEGORIA)
                    .table(Inventario::Table)
                    .col(Inventario::Categoria)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVENTARIO_ESTADO)
                    .table(Inventario::Table)
                    .col(Inventario::Estado)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVENTARIO_ESTADO)
                    .table(Inventario::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVENTARIO_CATEGORIA)
                    .table(Inventario::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Inventario::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Inventario {
    #[sea_orm(iden = "inventario")]
    Table,
    #[sea_orm(iden = "Codigo_Barras")]
    CodigoBarras,
    #[sea_orm(iden = "Descripcion")]
    Descripcion,
    #[sea_orm(iden = "Talla")]
    Talla,
    #[sea_orm(iden = "Color")]
    Color,
    #[sea_orm(iden = "Categoria")]
    Categoria,
    #[sea_orm(iden = "Precio_Venta")]
    PrecioVenta,
    #[sea_orm(iden = "Precio_Renta")]
    PrecioRenta,
    #[sea_orm(iden = "Stock")]
    Stock,
    #[sea_orm(iden = "Disponible")]
    Disponible,
    #[sea_orm(iden = "Estado")]
    Estado,
}

#[derive(DeriveIden)]
enum EstadoInventario {
    #[sea_orm(iden = "estado_inventario")]
    Enum,
    #[sea_orm(iden = "Activo")]
    Activo,
    #[sea_orm(iden = "Inactivo")]
    Inactivo,
}
