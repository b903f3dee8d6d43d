use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250121_000001_usuarios::Usuarios, m20250121_000002_clientes::Clientes};

static IDX_RENTAS_ESTADO_FECHA_DEVOLUCION: &str = "idx-rentas-estado-fecha_devolucion";
static FK_RENTAS_ID_CLIENTE: &str = "fk-rentas-id_cliente";
static FK_RENTAS_ID_USUARIO: &str = "fk-rentas-id_usuario";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rentas::Table)
                    .if_not_exists()
                    .col(pk_auto(Rentas::IdRenta))
                    .col(integer(Rentas::IdCliente))
                    .col(integer(Rentas::IdUsuario))
                    .col(date_time(Rentas::FechaRenta).default(Expr::current_timestamp()))
                    .col(date_time(Rentas::FechaDevolucion))
                    .col(date_time_null(Rentas::FechaDevuelto))
                    .col(decimal_len(Rentas::Penalizacion, 10, 2).default("0.00"))
                    .col(integer(Rentas::DiasRenta))
                    .col(decimal_len(Rentas::Total, 10, 2))
                    .col(decimal_len(Rentas::Deposito, 10, 2).default("0.00"))
                    .col(
                        enumeration(
                            Rentas::Estado,
                            EstadoRenta::Enum,
                            [
                                EstadoRenta::Activa,
                                EstadoRenta::Devuelto,
                                EstadoRenta::Vencida,
                            ],
                        )
                        .default("Activa"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RENTAS_ID_CLIENTE)
                            .from(Rentas::Table, Rentas::IdCliente)
                            .to(Clientes::Table, Clientes::IdCliente)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RENTAS_ID_USUARIO)
                            .from(Rentas::Table, Rentas::IdUsuario)
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
                    .name(IDX_RENTAS_ESTADO_FECHA_DEVOLUCION)
                    .table(Rentas::Table)
                    .col(Rentas::Estado)
                    .col(Rentas::FechaDevolucion)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RENTAS_ESTADO_FECHA_DEVOLUCION)
                    .table(Rentas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Rentas::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Rentas {
    #[sea_orm(iden = "rentas")]
    Table,
    #[sea_orm(iden = "Id_Renta")]
    IdRenta,
    #[sea_orm(iden = "Id_Cliente")]
    IdCliente,
    #[sea_orm(iden = "Id_Usuario")]
    IdUsuario,
    #[sea_orm(iden = "Fecha_Renta")]
    FechaRenta,
    #[sea_orm(iden = "Fecha_Devolucion")]
    FechaDevolucion,
    #[sea_orm(iden = "Fecha_Devuelto")]
    FechaDevuelto,
    #[sea_orm(iden = "Penalizacion")]
    Penalizacion,
    #[sea_orm(iden = "Dias_Renta")]
    DiasRenta,
    #[sea_orm(iden = "Total")]
    Total,
    #[sea_orm(iden = "Deposito")]
    Deposito,
    #[sea_orm(iden = "Estado")]
    Estado,
}

#[derive(DeriveIden)]
enum EstadoRenta {
    #[sea_orm(iden = "estado_renta")]
    Enum,
    #[sea_orm(iden = "Activa")]
    Activa,
    #[sea_orm(iden = "Devuelto")]
    Devuelto,
    #[sea_orm(iden = "Vencida")]
    Vencida,
}
