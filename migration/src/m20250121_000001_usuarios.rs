use sea_orm_migration::{prelude::*, schema::*};

static IDX_USUARIOS_USUARIO: &str = "idx-usuarios-usuario";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(pk_auto(Usuarios::IdUsuario))
                    .col(string_len(Usuarios::Usuario, 255))
                    .col(text(Usuarios::Nombre))
                    .col(text(Usuarios::ApellidoPaterno))
                    .col(string_len(Usuarios::Password, 255))
                    .col(
                        enumeration(Usuarios::Rol, Rol::Enum, [Rol::Empleado, Rol::Admin])
                            .default("empleado"),
                    )
                    .col(date_time(Usuarios::FechaRegistro).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USUARIOS_USUARIO)
                    .table(Usuarios::Table)
                    .col(Usuarios::Usuario)
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
                    .name(IDX_USUARIOS_USUARIO)
                    .table(Usuarios::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Usuarios {
    #[sea_orm(iden = "usuarios")]
    Table,
    #[sea_orm(iden = "Id_usuario")]
    IdUsuario,
    #[sea_orm(iden = "Usuario")]
    Usuario,
    #[sea_orm(iden = "Nombre")]
    Nombre,
    #[sea_orm(iden = "Apellido_Paterno")]
    ApellidoPaterno,
    #[sea_orm(iden = "Password")]
    Password,
    #[sea_orm(iden = "Rol")]
    Rol,
    #[sea_orm(iden = "Fecha_Registro")]
    FechaRegistro,
}

#[derive(DeriveIden)]
enum Rol {
    #[sea_orm(iden = "rol")]
    Enum,
    #[sea_orm(iden = "empleado")]
    Empleado,
    #[sea_orm(iden = "admin")]
    Admin,
}
