use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItineraryError {
    #[error("Missing required column: {column}")]
    SchemaError { column: String },

    #[error("Malformed record at line {line}: {reason}")]
    RecordError { line: usize, reason: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Airport lookup file not found: {path}")]
    LookupNotFound { path: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ItineraryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ItineraryError::SchemaError { .. }
            | ItineraryError::RecordError { .. }
            | ItineraryError::CsvError(_) => ErrorCategory::Lookup,
            ItineraryError::IoError(_)
            | ItineraryError::InputNotFound { .. }
            | ItineraryError::LookupNotFound { .. } => ErrorCategory::Io,
            ItineraryError::ConfigValidationError { .. }
            | ItineraryError::InvalidConfigValueError { .. }
            | ItineraryError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Lookup => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ItineraryError::InputNotFound { .. } => "Input file not found".to_string(),
            ItineraryError::LookupNotFound { .. } => "Airport lookup file not found".to_string(),
            ItineraryError::SchemaError { .. }
            | ItineraryError::RecordError { .. }
            | ItineraryError::CsvError(_) => format!("Airport lookup file is malformed: {}", self),
            ItineraryError::IoError(e) => format!("File operation failed: {}", e),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ItineraryError::InputNotFound { .. } => "Check the path of the itinerary input file",
            ItineraryError::LookupNotFound { .. } => "Check the path of the airport lookup CSV",
            ItineraryError::SchemaError { .. } => {
                "The lookup header needs name, iso_country, municipality, icao_code, iata_code and coordinates"
            }
            ItineraryError::RecordError { .. } => {
                "Every lookup row needs a name and at least one IATA or ICAO code"
            }
            ItineraryError::CsvError(_) => "Make sure the airport lookup is valid CSV",
            ItineraryError::IoError(_) => "Check file permissions and available disk space",
            _ => "Run with -h to see the expected arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, ItineraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_are_reported_as_malformed() {
        let err = ItineraryError::SchemaError {
            column: "coordinates".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Lookup);
        assert!(err
            .user_friendly_message()
            .starts_with("Airport lookup file is malformed"));
        assert!(err.to_string().contains("coordinates"));
    }

    #[test]
    fn test_missing_files_are_critical() {
        let err = ItineraryError::InputNotFound {
            path: "input.txt".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.user_friendly_message(), "Input file not found");
    }
}
