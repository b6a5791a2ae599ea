//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum length of a formulario `numero`
pub const MIN_NUMERO_LENGTH: usize = 1;

/// Maximum length of a formulario `numero` (matches the column size)
pub const MAX_NUMERO_LENGTH: usize = 64;

// =============================================================================
// Remote entities
// =============================================================================

/// Provider entity name, used in error messages
pub const ENTITY_PROVEEDOR: &str = "proveedor";

/// Category entity name, used in error messages
pub const ENTITY_CATEGORIA: &str = "categoria";

/// Appraiser entity name, used in error messages
pub const ENTITY_PERITO: &str = "perito";

/// Check if a `numero` satisfies the length rules
pub fn is_valid_numero(numero: &str) -> bool {
    let len = numero.trim().chars().count();
    (MIN_NUMERO_LENGTH..=MAX_NUMERO_LENGTH).contains(&len)
}
