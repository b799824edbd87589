use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration file error: {source}")]
    ConfigFormatError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Decision sheet format error: {0}")]
    SheetFormatError(String),

    #[error("Decision store error: {0}")]
    DecisionStoreError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // Catch-all for anyhow errors that don't fit the categories above
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl From<EngineError> for tonic::Status {
    fn from(err: EngineError) -> Self {
        tracing::error!("Mapping EngineError to tonic::Status: {:?}", err);
        match err {
            EngineError::ConfigError(msg) => tonic::Status::failed_precondition(format!("Configuration error: {}", msg)),
            EngineError::ConfigFormatError { source } => tonic::Status::failed_precondition(format!("Configuration file error: {}", source)),
            EngineError::CsvSystemError { source } => tonic::Status::invalid_argument(format!("CSV parsing system error: {}", source)),
            EngineError::IoError { source } => match source.kind() {
                std::io::ErrorKind::NotFound => tonic::Status::not_found(format!("I/O error: {}", source)),
                _ => tonic::Status::internal(format!("I/O error: {}", source)),
            },
            EngineError::SheetFormatError(msg) => tonic::Status::invalid_argument(format!("Decision sheet format error: {}", msg)),
            EngineError::DecisionStoreError(msg) => tonic::Status::internal(format!("Decision store error: {}", msg)),
            EngineError::InvalidArgument(msg) => tonic::Status::invalid_argument(msg),
            EngineError::NotFound(msg) => tonic::Status::not_found(msg),
            EngineError::AnyhowError(source) => tonic::Status::internal(format!("An internal error occurred: {}", source)),
        }
    }
}
