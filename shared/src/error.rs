use thiserror::Error;

/// Failure of a single backend call.
///
/// The dashboard only distinguishes "it worked" from "it didn't"; the variants
/// exist so the stored message says where it broke.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(err: impl ToString) -> Self {
        Self::Network(err.to_string())
    }

    pub fn decode(err: impl ToString) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_includes_code_and_body() {
        let err = ApiError::Status {
            status: 404,
            body: "Dataset not found".into(),
        };
        assert_eq!(err.to_string(), "Server error: 404 - Dataset not found");
    }

    #[test]
    fn serde_failures_become_decode_errors() {
        let err: ApiError = serde_json::from_str::<Vec<u32>>("{").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
