use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalesCastError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No historical baseline for month {month}, weekday {weekday}")]
    MissingBaseline { month: u32, weekday: u32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, SalesCastError>;
