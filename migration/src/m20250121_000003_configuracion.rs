use sea_orm_migration::{prelude::*, schema::*};

static IDX_CONFIGURACION_NOMBRE_CONFIG: &str = "idx-configuracion-nombre_config";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Configuracion::Table)
                    .if_not_exists()
                    .col(pk_auto(Configuracion::IdConfig))
                    .col(string_len(Configuracion::NombreConfig, 100))
                    .col(text(Configuracion::ValorConfig))
                    .col(text_null(Configuracion::Descripcion))
                    .col(
                        date_time(Configuracion::FechaModificacion)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONFIGURACION_NOMBRE_CONFIG)
                    .table(Configuracion::Table)
                    .col(Configuracion::NombreConfig)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONFIGURACION_NOMBRE_CONFIG)
                    .table(Configuracion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Configuracion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Configuracion {
    #[sea_orm(iden = "configuracion")]
    Table,
    #[sea_orm(iden = "Id_Config")]
    IdConfig,
    #[sea_orm(iden = "Nombre_Config")]
    NombreConfig,
    #[sea_orm(iden = "Valor_Config")]
    ValorConfig,
    #[sea_orm(iden = "Descripcion")]
    Descripcion,
    #[sea_orm(iden = "Fecha_Modificacion")]
    FechaModificacion,
}
