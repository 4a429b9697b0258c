//! Operation errors
//!
//! The `Display` text of each variant is exactly what the response carries.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// Operation name outside the supported set
    #[error("Operación no soportada")]
    UnsupportedOperation(String),

    #[error("Error: División por cero")]
    DivisionByZero,

    /// Value failed numeric parsing
    #[error("Error: Entrada no valida")]
    InvalidInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_text() {
        assert_eq!(
            OperationError::UnsupportedOperation("potencia".to_string()).to_string(),
            "Operación no soportada"
        );
        assert_eq!(
            OperationError::DivisionByZero.to_string(),
            "Error: División por cero"
        );
        assert_eq!(
            OperationError::InvalidInput.to_string(),
            "Error: Entrada no valida"
        );
    }
}
