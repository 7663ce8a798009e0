use thiserror::Error;

/// Fallback alert text for a rejection body with no usable message.
const GENERIC_REJECTION: &str = "Something went wrong.";

/// One variant per terminal failure of a submission attempt. The `Display`
/// form is the exact text shown in the alert panel.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Please enter a question or upload a file.")]
    EmptySubmission,

    #[error("{0}")]
    Rejected(String),

    #[error("Server error.")]
    Transport,

    #[error("Request timed out.")]
    Timeout,
}

impl CheckError {
    /// Rejection from a non-OK response. The service reports failures as
    /// `{"error": "..."}`; anything else maps to the generic message.
    pub fn rejected_from_body(body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("error")
                    .and_then(|field| field.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| GENERIC_REJECTION.to_string());
        CheckError::Rejected(message)
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
