use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown {kind} '{value}'")]
    UnknownToken { kind: String, value: String },

    #[error("Item #{id} not found")]
    ItemNotFound { id: u64 },
}

impl EstimatorError {
    pub fn unknown_token(kind: &str, value: &str) -> Self {
        EstimatorError::UnknownToken {
            kind: kind.to_string(),
            value: value.trim().to_string(),
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            EstimatorError::IoError(_) => "無法讀寫檔案".to_string(),
            EstimatorError::TomlError(_) | EstimatorError::ConfigError { .. } => {
                format!("配置檔有誤: {}", self)
            }
            EstimatorError::InvalidConfigValueError { field, value, .. } => {
                format!("{} 的值 '{}' 不正確", field, value)
            }
            EstimatorError::UnknownToken { kind, value } => {
                format!("無法識別的 {}: '{}'", kind, value)
            }
            EstimatorError::ItemNotFound { id } => format!("找不到項目 #{}", id),
            EstimatorError::CsvError(_) | EstimatorError::SerializationError(_) => {
                format!("匯出失敗: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EstimatorError::IoError(_) => "Check that the file exists and is readable",
            EstimatorError::TomlError(_) | EstimatorError::ConfigError { .. } => {
                "Fix the TOML syntax in the estimate file"
            }
            EstimatorError::InvalidConfigValueError { .. } => {
                "Use a finite number within the allowed range"
            }
            EstimatorError::UnknownToken { .. } => {
                "Units: m | ft, tiers: standard | light, fields: width | height | count"
            }
            EstimatorError::ItemNotFound { .. } => "Run 'list' to see current item ids",
            EstimatorError::CsvError(_) | EstimatorError::SerializationError(_) => {
                "Retry the export"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
