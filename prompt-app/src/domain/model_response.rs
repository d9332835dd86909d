use prompt_errors::AppError;
use serde::Deserialize;
use serde_json::Value;

/// Shown when the model answered without a `completion` field.
pub const NO_RESPONSE: &str = "No response.";

/// The only field read from the invoke-model response body. Everything else
/// in the object is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelResponse {
    #[serde(default)]
    pub completion: Option<String>,
}

impl ModelResponse {
    /// The body must be a JSON object; arrays would otherwise bind to the
    /// fields positionally.
    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| AppError::InvalidResponse(e.to_string()))?;
        if !value.is_object() {
            return Err(AppError::InvalidResponse(
                "response body is not a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|e| AppError::InvalidResponse(e.to_string()))
    }

    pub fn has_completion(&self) -> bool {
        self.completion.is_some()
    }

    pub fn into_display_text(self) -> String {
        self.completion.unwrap_or_else(|| NO_RESPONSE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_is_returned_verbatim() {
        let response = ModelResponse::from_slice(br#"{"completion": " Hi there!"}"#).unwrap();
        assert_eq!(response.into_display_text(), " Hi there!");
    }

    #[test]
    fn test_missing_completion_falls_back() {
        let response = ModelResponse::from_slice(b"{}").unwrap();
        assert!(!response.has_completion());
        assert_eq!(response.into_display_text(), "No response.");
    }

    #[test]
    fn test_null_completion_falls_back() {
        let response = ModelResponse::from_slice(br#"{"completion": null}"#).unwrap();
        assert_eq!(response.into_display_text(), NO_RESPONSE);
    }

    #[test]
    fn test_other_fields_are_ignored() {
        let body = br#"{"completion": "ok", "stop_reason": "stop_sequence", "stop": "\n\nHuman:"}"#;
        let response = ModelResponse::from_slice(body).unwrap();
        assert_eq!(response.into_display_text(), "ok");
    }

    #[test]
    fn test_array_bodies_are_invalid() {
        for body in [&br#"["x"]"#[..], b"[]", br#"[" Hi there!", null]"#] {
            let err = ModelResponse::from_slice(body).unwrap_err();
            assert!(matches!(err, AppError::InvalidResponse(_)));
        }
    }

    #[test]
    fn test_scalar_bodies_are_invalid() {
        for body in [&b"\"Hi\""[..], b"42", b"null"] {
            assert!(ModelResponse::from_slice(body).is_err());
        }
    }

    #[test]
    fn test_non_string_completion_is_invalid() {
        let err = ModelResponse::from_slice(br#"{"completion": 7}"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidResponse(_)));
    }

    #[test]
    fn test_non_json_body_is_invalid() {
        let err = ModelResponse::from_slice(b"<html>").unwrap_err();
        assert!(matches!(err, AppError::InvalidResponse(_)));
    }
}
