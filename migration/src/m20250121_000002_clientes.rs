use sea_orm_migration::{prelude::*, schema::*};

static IDX_CLIENTES_TELEFONO: &str = "idx-clientes-telefono";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clientes::Table)
                    .if_not_exists()
                    .col(pk_auto(Clientes::IdCliente))
                    .col(text(Clientes::Nombre))
                    .col(text(Clientes::ApellidoPaterno))
                    .col(string_len(Clientes::Telefono, 20))
                    .col(date_time(Clientes::FechaRegistro).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CLIENTES_TELEFONO)
                    .table(Clientes::Table)
                    .col(Clientes::Telefono)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CLIENTES_TELEFONO)
                    .table(Clientes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Clientes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Clientes {
    #[sea_orm(iden = "clientes")]
    Table,
    #[sea_orm(iden = "Id_cliente")]
    IdCliente,
    #[sea_orm(iden = "Nombre")]
    Nombre,
    #[sea_orm(iden = "Apellido_Paterno")]
    ApellidoPaterno,
    #[sea_orm(iden = "Telefono")]
    Telefono,
    #[sea_orm(iden = "Fecha_Registro")]
    FechaRegistro,
}
