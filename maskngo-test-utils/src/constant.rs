//! Shared values for test fixtures.
//!
//! None of these are real customer or employee data.

/// Connection string of the per-test database.
///
/// Every `TestSetup` opens its own private in-memory SQLite database, so tests never share rows.
pub static TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Phone number given to mock customers.
pub static TEST_TELEFONO: &str = "5512345678";

/// Placeholder stored in the `Password` column of mock users.
///
/// It is not a valid Argon2 hash, so mock users can never authenticate. Tests that need a
/// working login register the user through the user service instead.
pub static TEST_PASSWORD_PLACEHOLDER: &str = "not-a-password-hash";

/// Barcode of the costume used by the rental walkthrough.
pub static TEST_CODIGO_BARRAS: &str = "DISNEY0000";
