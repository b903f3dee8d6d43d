use thiserror::Error;

/// A value or state change refused before reaching the database.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("Disponible ({disponible}) cannot exceed Stock ({stock})")]
    DisponibleExceedsStock { stock: i32, disponible: i32 },
    #[error("A {0} needs at least one line")]
    EmptyLines(&'static str),
    #[error("Telefono {telefono} is already registered to customer {id_cliente}")]
    DuplicateTelefono { telefono: String, id_cliente: i32 },
    #[error("Unknown inventory barcode: {0}")]
    UnknownBarcode(String),
    #[error("Inventory item {0} is inactive")]
    InactiveItem(String),
    #[error("Cannot move {entity} {id} from {from} to {to}")]
    InvalidTransition {
        entity: &'static str,
        id: i32,
        from: String,
        to: String,
    },
    #[error("No folio left for prefix {0}")]
    FolioExhausted(String),
}

impl ValidationError {
    pub(crate) fn field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
