use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidValue,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidValue => "config.invalid_value",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidValueDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn config_invalid_value(
        key: impl Into<String>,
        value: Option<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = to_details(ConfigInvalidValueDetails {
            key: key.into(),
            value,
            problem: problem.into(),
        });

        Self::new(
            ErrorCode::ConfigInvalidValue,
            "Invalid configuration value",
            details,
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalIoErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalJsonErrorDetails {
            error: error.into(),
            context,
            input: None,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    /// JSON decode failure on captured command output. Keeps a short prefix of
    /// the offending text so the envelope shows what the client printed.
    pub fn command_output_not_json(
        err: serde_json::Error,
        command: impl Into<String>,
        raw: &str,
    ) -> Self {
        let details = to_details(InternalJsonErrorDetails {
            error: err.to_string(),
            context: Some(command.into()),
            input: Some(raw.chars().take(200).collect()),
        });

        Self::new(
            ErrorCode::InternalJsonError,
            "Command output is not valid JSON",
            details,
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_use_dotted_names() {
        assert_eq!(ErrorCode::ConfigInvalidValue.as_str(), "config.invalid_value");
        assert_eq!(ErrorCode::InternalJsonError.as_str(), "internal.json_error");
    }

    #[test]
    fn internal_io_carries_context() {
        let err = Error::internal_io("denied", Some("open log".to_string()));
        assert_eq!(err.code, ErrorCode::InternalIoError);
        assert_eq!(err.details["error"], "denied");
        assert_eq!(err.details["context"], "open log");
    }

    #[test]
    fn command_output_not_json_truncates_input() {
        let parse_err = serde_json::from_str::<Value>("nope").unwrap_err();
        let raw = "x".repeat(500);
        let err = Error::command_output_not_json(parse_err, "cleos get info", &raw);

        assert_eq!(err.code, ErrorCode::InternalJsonError);
        assert_eq!(err.details["context"], "cleos get info");
        assert_eq!(err.details["input"].as_str().unwrap().len(), 200);
    }

    #[test]
    fn with_hint_appends() {
        let err = Error::internal_io("boom", None).with_hint("try again");
        assert_eq!(err.hints.len(), 1);
        assert_eq!(err.hints[0].message, "try again");
        assert_eq!(err.to_string(), "IO error");
    }
}
