//! Declarative test builder.
//!
//! `TestBuilder` queues schema and fixture setup and runs all of it in [`TestBuilder::build`],
//! so a test can describe its starting rows in one chained expression.

use entity::sea_orm_active_enums::Rol;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Schema
    migrations: bool,
    tables: Vec<TableCreateStatement>,

    // Database fixtures to insert, in this order
    clientes: Vec<String>,            // telefono
    usuarios: Vec<(String, Rol)>,     // (usuario, rol)
    disfraces: Vec<(String, i32, i32)>, // (codigo_barras, stock, disponible)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create an empty builder with no schema and no fixtures.
    pub fn new() -> Self {
        Self {
            migrations: false,
            tables: Vec::new(),
            clientes: Vec::new(),
            usuarios: Vec::new(),
            disfraces: Vec::new(),
        }
    }

    /// Run the real migrations, including the configuration seed rows.
    pub fn with_schema(mut self) -> Self {
        self.migrations = true;
        self
    }

    /// Add a table generated from an entity definition.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use maskngo_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), maskngo_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Configuracion)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    pub fn with_mock_cliente(mut self, telefono: &str) -> Self {
        self.clientes.push(telefono.to_string());
        self
    }

    pub fn with_mock_usuario(mut self, usuario: &str, rol: Rol) -> Self {
        self.usuarios.push((usuario.to_string(), rol));
        self
    }

    pub fn with_mock_disfraz(mut self, codigo_barras: &str, stock: i32, disponible: i32) -> Self {
        self.disfraces
            .push((codigo_barras.to_string(), stock, disponible));
        self
    }

    /// Create the database, apply the schema and insert the queued fixtures.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        if self.migrations {
            setup.with_migrations().await?;
        }
        if !self.tables.is_empty() {
            setup.with_tables(self.tables).await?;
        }

        let shop = setup.shop();
        for telefono in &self.clientes {
            shop.insert_mock_cliente(telefono).await?;
        }
        for (usuario, rol) in &self.usuarios {
            shop.insert_mock_usuario(usuario, *rol).await?;
        }
        for (codigo_barras, stock, disponible) in &self.disfraces {
            shop.insert_mock_disfraz(codigo_barras, *stock, *disponible)
                .await?;
        }

        Ok(setup)
    }
}
