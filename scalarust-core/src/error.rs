use thiserror::Error;

/// Custom error type for the Scalarust engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarustError {
    #[error("Operation '{operation}' expects {expected} operand(s), got {actual}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Cycle detected in the computation graph during backward pass: discovered {discovered} nodes, ordered only {emitted}")]
    CycleDetected { discovered: usize, emitted: usize },

    #[error("Input size mismatch: expected {expected}, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Invalid hyperparameter '{name}': {value}")]
    InvalidHyperparameter { name: String, value: f32 },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Rendering with '{program}' failed: {reason}")]
    RenderFailed { program: String, reason: String },
}

impl From<std::io::Error> for ScalarustError {
    fn from(err: std::io::Error) -> Self {
        ScalarustError::Io(err.to_string())
    }
}
