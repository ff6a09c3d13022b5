use thiserror::Error;

/// 呼叫端可見的通用錯誤訊息，處理失敗時不洩漏內部細節
pub const PROCESSING_FAILURE_MESSAGE: &str = "Calculation failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼叫端可修正的輸入錯誤 (400)
    ClientInput,
    /// 非預期的處理錯誤 (500)
    ProcessingFault,
}

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Missing request body")]
    MissingBody,

    #[error("Missing required fields")]
    MissingFields,

    #[error("Principal must be positive")]
    InvalidPrincipal,

    #[error("Interest rate must be between 0 and 100")]
    InvalidRate,

    #[error("Years must be positive")]
    InvalidYears,

    #[error("Frequency must be 1, 2, 4, 12, or 365")]
    InvalidFrequency,

    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Payload is not a JSON object (found {found})")]
    NotAnObject { found: &'static str },

    #[error("Compounded amount is not finite (principal={principal}, years={years})")]
    NonFiniteResult { principal: f64, years: f64 },
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::MissingBody
            | CalcError::MissingFields
            | CalcError::InvalidPrincipal
            | CalcError::InvalidRate
            | CalcError::InvalidYears
            | CalcError::InvalidFrequency => ErrorCategory::ClientInput,
            CalcError::MalformedPayload(_)
            | CalcError::NotAnObject { .. }
            | CalcError::NonFiniteResult { .. } => ErrorCategory::ProcessingFault,
        }
    }

    pub fn is_validation_failure(&self) -> bool {
        self.category() == ErrorCategory::ClientInput
    }

    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::ClientInput => 400,
            ErrorCategory::ProcessingFault => 500,
        }
    }

    /// The message returned to the caller. Processing faults collapse to a
    /// generic message; the `Display` output is for operator logs only.
    pub fn public_message(&self) -> String {
        match self.category() {
            ErrorCategory::ClientInput => self.to_string(),
            ErrorCategory::ProcessingFault => PROCESSING_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failures_are_client_errors() {
        let failures = [
            CalcError::MissingBody,
            CalcError::MissingFields,
            CalcError::InvalidPrincipal,
            CalcError::InvalidRate,
            CalcError::InvalidYears,
            CalcError::InvalidFrequency,
        ];

        for failure in failures {
            assert_eq!(failure.category(), ErrorCategory::ClientInput);
            assert_eq!(failure.status_code(), 400);
            assert_eq!(failure.public_message(), failure.to_string());
        }
    }

    #[test]
    fn test_processing_faults_hide_details() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let fault = CalcError::from(parse_error);

        assert_eq!(fault.category(), ErrorCategory::ProcessingFault);
        assert_eq!(fault.status_code(), 500);
        assert_eq!(fault.public_message(), "Calculation failed");
        assert!(fault.to_string().starts_with("Malformed payload"));
    }

    #[test]
    fn test_non_finite_result_is_processing_fault() {
        let fault = CalcError::NonFiniteResult {
            principal: 100.0,
            years: 1e300,
        };
        assert!(!fault.is_validation_failure());
        assert_eq!(fault.public_message(), PROCESSING_FAILURE_MESSAGE);
    }
}
