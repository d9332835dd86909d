use prompt_errors::AppError;

pub struct PromptValidator;

impl PromptValidator {
    /// Rejects empty and whitespace-only input. Accepted prompts are returned
    /// untouched so the model sees exactly what the user typed.
    pub fn validate(prompt: &str) -> Result<&str, AppError> {
        if prompt.trim().is_empty() {
            tracing::debug!("Rejected empty prompt");
            return Err(AppError::EmptyPrompt);
        }

        Ok(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_prompt() {
        assert_eq!(PromptValidator::validate("Hello").unwrap(), "Hello");
        assert_eq!(PromptValidator::validate(" Hello \n").unwrap(), " Hello \n");
    }

    #[test]
    fn test_empty_prompt() {
        assert_eq!(PromptValidator::validate(""), Err(AppError::EmptyPrompt));
        assert_eq!(PromptValidator::validate("   "), Err(AppError::EmptyPrompt));
        assert_eq!(PromptValidator::validate("\n\t \r\n"), Err(AppError::EmptyPrompt));
    }
}
