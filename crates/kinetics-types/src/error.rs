use thiserror::Error;

#[derive(Error, Debug)]
pub enum KineticsError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Stoichiometric factor {numerator}/0 has a zero denominator")]
    ZeroDenominator { numerator: u32 },

    #[error("Group arity mismatch in '{name}': configured {expected}, bound {actual}")]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type KineticsResult<T> = Result<T, KineticsError>;
