use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250121_000001_usuarios::Usuarios, m20250121_000002_clientes::Clientes};

static IDX_VENTAS_FOLIO: &str = "idx-ventas-folio";
static IDX_VENTAS_FECHA_VENTA: &str = "idx-ventas-fecha_venta";
static IDX_VENTAS_ID_CLIENTE: &str = "idx-ventas-id_cliente";
static IDX_VENTAS_ESTADO: &str = "idx-ventas-estado";
static IDX_VENTAS_MOTIVO_VENTA: &str = "idx-ventas-motivo_venta";
static FK_VENTAS_ID_CLIENTE: &str = "fk-ventas-id_cliente";
static FK_VENTAS_USUARIO_ID: &str = "fk-ventas-usuario_id";
static FK_VENTAS_CANCELADA_POR: &str = "fk-ventas-cancelada_por";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ventas::Table)
                    .if_not_exists()
                    .col(pk_auto(Ventas::IdVenta))
                    .col(string_len(Ventas::Folio, 20))
                    .col(integer(Ventas::IdCliente))
                    .col(integer(Ventas::UsuarioId))
                    .col(date_time(Ventas::FechaVenta).default(Expr::current_timestamp()))
                    .col(decimal_len(Ventas::Total, 10, 2))
                    .col(decimal_len_null(Ventas::DescuentoPorcentaje, 5, 2).default("0.00"))
                    .col(decimal_len_null(Ventas::DescuentoMonto, 10, 2).default("0.00"))
                    .col(text_null(Ventas::MotivoDescuento))
                    .col(string_len_null(Ventas::MotivoVenta, 100))
                    .col(text_null(Ventas::Notas))
                    .col(
                        enumeration(
                            Ventas::Estado,
                            EstadoVenta::Enum,
                            [EstadoVenta::Activa, EstadoVenta::Cancelada],
                        )
                        .default("Activa"),
                    )
                    .col(integer_null(Ventas::CanceladaPor))
                    .col(date_time_null(Ventas::FechaCancelacion))
                    .col(text_null(Ventas::MotivoCancelacion))
                    .col(
                        enumeration(
                            Ventas::MetodoPago,
                            MetodoPago::Enum,
                            [
                                MetodoPago::Efectivo,
                                MetodoPago::Tarjeta,
                                MetodoPago::Transferencia,
                            ],
                        )
                        .default("Efectivo"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VENTAS_ID_CLIENTE)
                            .from(Ventas::Table, Ventas::IdCliente)
                            .to(Clientes::Table, Clientes::IdCliente)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VENTAS_USUARIO_ID)
                            .from(Ventas::Table, Ventas::UsuarioId)
                            .to(Usuarios::Table, Usuarios::IdUsuario)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VENTAS_CANCELADA_POR)
                            .from(Ventas::Table, Ventas::CanceladaPor)
                            .to(Usuarios::Table, Usuarios::IdUsuario)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VENTAS_FOLIO)
                    .table(Ventas::Table)
                    .col(Ventas::Folio)
                    .unique()
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_VENTAS_FECHA_VENTA, Ventas::FechaVenta),
            (IDX_VENTAS_ID_CLIENTE, Ventas::IdCliente),
            (IDX_VENTAS_ESTADO, Ventas::Estado),
            (IDX_VENTAS_MOTIVO_VENTA, Ventas::MotivoVenta),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Ventas::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // MySQL may promote idx-ventas-id_cliente to back the foreign key, so indexes go with
        // the table instead of being dropped one by one.
        manager
            .drop_table(Table::drop().table(Ventas::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ventas {
    #[sea_orm(iden = "ventas")]
    Table,
    #[sea_orm(iden = "Id_Venta")]
    IdVenta,
    #[sea_orm(iden = "Folio")]
    Folio,
    #[sea_orm(iden = "Id_cliente")]
    IdCliente,
    #[sea_orm(iden = "Usuario_id")]
    UsuarioId,
    #[sea_orm(iden = "fecha_venta")]
    FechaVenta,
    #[sea_orm(iden = "Total")]
    Total,
    #[sea_orm(iden = "Descuento_Porcentaje")]
    DescuentoPorcentaje,
    #[sea_orm(iden = "Descuento_Monto")]
    DescuentoMonto,
    #[sea_orm(iden = "Motivo_Descuento")]
    MotivoDescuento,
    #[sea_orm(iden = "Motivo_Venta")]
    MotivoVenta,
    #[sea_orm(iden = "Notas")]
    Notas,
    #[sea_orm(iden = "Estado")]
    Estado,
    #[sea_orm(iden = "Cancelada_Por")]
    CanceladaPor,
    #[sea_orm(iden = "Fecha_Cancelacion")]
    FechaCancelacion,
    #[sea_orm(iden = "Motivo_Cancelacion")]
    MotivoCancelacion,
    #[sea_orm(iden = "metodo_pago")]
    MetodoPago,
}

#[derive(DeriveIden)]
enum EstadoVenta {
    #[sea_orm(iden = "estado_venta")]
    Enum,
    #[sea_orm(iden = "Activa")]
    Activa,
    #[sea_orm(iden = "Cancelada")]
    Cancelada,
}

#[derive(DeriveIden)]
enum MetodoPago {
    #[sea_orm(iden = "metodo_pago")]
    Enum,
    #[sea_orm(iden = "Efectivo")]
    Efectivo,
    #[sea_orm(iden = "tarjeta")]
    Tarjeta,
    #[sea_orm(iden = "Transferencia")]
    Transferencia,
}
