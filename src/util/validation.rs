//! Field validation for user supplied values.
//!
//! Each check returns the value as it should be stored (trimmed, or reduced to digits for phone
//! numbers) so services never persist untrimmed input.

use rust_decimal::Decimal;

use crate::error::validation::ValidationError;

/// Sizes accepted for a costume.
pub const TALLAS: [&str; 7] = ["XS", "S", "M", "L", "XL", "XXL", "UNI"];

/// Upper bound of any price the shop records.
pub const MAX_PRECIO: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

/// Largest value of a `decimal(10,2)` column such as a subtotal or a total.
pub const MAX_IMPORTE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

pub const MAX_CANTIDAD: i32 = 9999;

/// Username: 3 to 50 characters of ASCII letters, digits and underscore.
pub fn validate_usuario(usuario: &str) -> Result<String, ValidationError> {
    let usuario = usuario.trim();
    let len = usuario.chars().count();

    if !(3..=50).contains(&len) {
        return Err(ValidationError::field(
            "usuario",
            "must be between 3 and 50 characters",
        ));
    }
    if !usuario
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ValidationError::field(
            "usuario",
            "may only contain letters, digits and underscore",
        ));
    }

    Ok(usuario.to_string())
}

/// Password: 6 to 100 characters, not blank. Returned untouched.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::field("password", "cannot be empty"));
    }

    let len = password.chars().count();
    if !(6..=100).contains(&len) {
        return Err(ValidationError::field(
            "password",
            "must be between 6 and 100 characters",
        ));
    }

    Ok(())
}

/// Person name or surname: 2 to 100 letters or spaces, accents allowed.
pub fn validate_nombre(field: &'static str, nombre: &str) -> Result<String, ValidationError> {
    let nombre = nombre.trim();
    let len = nombre.chars().count();

    if !(2..=100).contains(&len) {
        return Err(ValidationError::field(
            field,
            "must be between 2 and 100 characters",
        ));
    }
    if !nombre
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace())
    {
        return Err(ValidationError::field(
            field,
            "may only contain letters and spaces",
        ));
    }

    Ok(nombre.to_string())
}

/// Phone number: 10 to 15 digits once `-`, `+`, parentheses and spaces are removed.
///
/// Returns the digits only.
pub fn validate_telefono(telefono: &str) -> Result<String, ValidationError> {
    let digits: String = telefono
        .chars()
        .filter(|c| !matches!(c, '-' | '+' | '(' | ')') && !c.is_whitespace())
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::field(
            "telefono",
            "may only contain digits and - + ( ) or spaces",
        ));
    }
    if !(10..=15).contains(&digits.len()) {
        return Err(ValidationError::field(
            "telefono",
            "must have between 10 and 15 digits",
        ));
    }

    Ok(digits)
}

/// Barcode: non-empty, no spaces, at most 50 characters.
pub fn validate_codigo_barras(codigo: &str) -> Result<String, ValidationError> {
    let codigo = codigo.trim();

    if codigo.is_empty() {
        return Err(ValidationError::field("codigo_barras", "cannot be empty"));
    }
    if codigo.chars().any(char::is_whitespace) {
        return Err(ValidationError::field(
            "codigo_barras",
            "cannot contain spaces",
        ));
    }
    if codigo.chars().count() > 50 {
        return Err(ValidationError::field(
            "codigo_barras",
            "cannot exceed 50 characters",
        ));
    }

    Ok(codigo.to_string())
}

/// Costume description: 3 to 500 characters.
pub fn validate_descripcion(descripcion: &str) -> Result<String, ValidationError> {
    let descripcion = descripcion.trim();

    if !(3..=500).contains(&descripcion.chars().count()) {
        return Err(ValidationError::field(
            "descripcion",
            "must be between 3 and 500 characters",
        ));
    }

    Ok(descripcion.to_string())
}

/// Costume size, one of [`TALLAS`]. Returned upper-cased.
pub fn validate_talla(talla: &str) -> Result<String, ValidationError> {
    let talla = talla.trim().to_uppercase();

    if !TALLAS.contains(&talla.as_str()) {
        return Err(ValidationError::field(
            "talla",
            format!("must be one of {}", TALLAS.join(", ")),
        ));
    }

    Ok(talla)
}

/// Money amount between zero and [`MAX_PRECIO`] with at most two decimals.
pub fn validate_precio(field: &'static str, precio: Decimal) -> Result<(), ValidationError> {
    if precio < Decimal::ZERO {
        return Err(ValidationError::field(field, "cannot be negative"));
    }
    if precio > MAX_PRECIO {
        return Err(ValidationError::field(field, "exceeds the allowed limit"));
    }
    validate_scale(field, precio)
}

/// Computed amount that must fit a `decimal(10,2)` column: at most [`MAX_IMPORTE`].
pub fn validate_importe(field: &'static str, importe: Decimal) -> Result<(), ValidationError> {
    if importe > MAX_IMPORTE {
        return Err(ValidationError::field(
            field,
            format!("cannot exceed {}", MAX_IMPORTE),
        ));
    }

    Ok(())
}

/// At most two decimals, the scale of every money and percentage column.
pub fn validate_scale(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value.normalize().scale() > 2 {
        return Err(ValidationError::field(
            field,
            "cannot have more than two decimals",
        ));
    }

    Ok(())
}

/// Unit count of a line: 1 to [`MAX_CANTIDAD`].
pub fn validate_cantidad(field: &'static str, cantidad: i32) -> Result<(), ValidationError> {
    if !(1..=MAX_CANTIDAD).contains(&cantidad) {
        return Err(ValidationError::field(
            field,
            format!("must be between 1 and {}", MAX_CANTIDAD),
        ));
    }

    Ok(())
}

/// Inventory count: 0 to [`MAX_CANTIDAD`].
pub fn validate_stock(field: &'static str, stock: i32) -> Result<(), ValidationError> {
    if !(0..=MAX_CANTIDAD).contains(&stock) {
        return Err(ValidationError::field(
            field,
            format!("must be between 0 and {}", MAX_CANTIDAD),
        ));
    }

    Ok(())
}

/// Trimmed free text, or `None` when blank.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
