use thiserror::Error;

/// Custom error type for the MicroTorch framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MicroTorchError {
    #[error("Domain error during operation {operation}: input value {value} is outside the domain")]
    DomainError { operation: String, value: f64 },

    #[error("Division by zero during operation {operation}")]
    DivisionByZero { operation: String },

    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Unsupported operand for operation {operation}: {reason}")]
    UnsupportedOperand { operation: String, reason: String },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Invalid distribution parameters: {0}")]
    InvalidDistribution(String),
}
