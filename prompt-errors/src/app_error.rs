#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("Model invocation failed: {0}")]
    InvocationFailed(String),

    #[error("Invalid model response: {0}")]
    InvalidResponse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::EmptyPrompt => "Please enter a prompt.",
            Self::InvocationFailed(_) => {
                "The model call failed. Check your AWS credentials, Bedrock model access and region."
            }
            Self::InvalidResponse(_) => "The model returned a response that could not be read.",
            Self::Internal(_) => "Something went wrong on the server.",
        }
    }

    /// Empty input is a warning, not a failure of the request.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::EmptyPrompt)
    }
}
