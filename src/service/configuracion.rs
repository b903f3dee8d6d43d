use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    data::configuracion::ConfiguracionRepository,
    error::{validation::ValidationError, Error},
    model::db::ConfiguracionModel,
    util::validation::validate_precio,
};

/// Late fee per overdue rental day.
pub static PENALIZACION_DIA: &str = "PENALIZACION_DIA";
/// Maximum discount percentage allowed on a sale.
pub static DESCUENTO_MAXIMO: &str = "DESCUENTO_MAXIMO";

/// Used when a setting is missing or unparsable; matches the seeded rows.
pub const DEFAULT_PENALIZACION_DIA: Decimal = Decimal::from_parts(5000, 0, 0, false, 2);
pub const DEFAULT_DESCUENTO_MAXIMO: Decimal = Decimal::from_parts(5000, 0, 0, false, 2);

pub struct ConfiguracionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConfiguracionService<'a> {
    /// Creates a new instance of [`ConfiguracionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn penalizacion_dia(&self) -> Result<Decimal, Error> {
        self.get_decimal(PENALIZACION_DIA, DEFAULT_PENALIZACION_DIA)
            .await
    }

    pub async fn descuento_maximo(&self) -> Result<Decimal, Error> {
        self.get_decimal(DESCUENTO_MAXIMO, DEFAULT_DESCUENTO_MAXIMO)
            .await
    }

    pub async fn set_penalizacion_dia(&self, valor: Decimal) -> Result<ConfiguracionModel, Error> {
        validate_precio("PENALIZACION_DIA", valor)?;

        self.set_decimal(PENALIZACION_DIA, valor).await
    }

    /// Stores the discount cap, a percentage between 0 and 100
    pub async fn set_descuento_maximo(&self, valor: Decimal) -> Result<ConfiguracionModel, Error> {
        validate_precio("DESCUENTO_MAXIMO", valor)?;
        if valor > Decimal::ONE_HUNDRED {
            return Err(ValidationError::field("DESCUENTO_MAXIMO", "cannot exceed 100").into());
        }

        self.set_decimal(DESCUENTO_MAXIMO, valor).await
    }

    /// Reads a decimal setting, falling back to `default` when the row is missing or unparsable
    async fn get_decimal(&self, nombre: &str, default: Decimal) -> Result<Decimal, Error> {
        let config_repo = ConfiguracionRepository::new(self.db);

        let Some(valor) = config_repo.get_value(nombre).await? else {
            tracing::warn!(nombre, default = %default, "Setting missing, using default");
            return Ok(default);
        };

        match valor.trim().parse::<Decimal>() {
            Ok(valor) => Ok(valor),
            Err(err) => {
                tracing::warn!(
                    nombre,
                    valor = %valor,
                    default = %default,
                    "Setting is not a decimal, using default: {}",
                    err
                );
                Ok(default)
            }
        }
    }

    async fn set_decimal(&self, nombre: &str, valor: Decimal) -> Result<ConfiguracionModel, Error> {
        let config_repo = ConfiguracionRepository::new(self.db);

        let config = config_repo
            .upsert(nombre, &format!("{:.2}", valor), None)
            .await?;

        tracing::info!(nombre, valor = %config.valor_config, "Updated setting");

        Ok(config)
    }
}
