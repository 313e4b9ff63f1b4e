use serde::{Deserialize, Serialize};

/// One failed validation rule, named after the offending request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Uniform response wrapper used by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

pub fn success<T>(message: impl Into<String>, data: T) -> ApiResponse<T> {
    ApiResponse {
        success: true,
        message: message.into(),
        data: Some(data),
        errors: None,
    }
}

pub fn failure(message: impl Into<String>) -> ApiResponse<serde_json::Value> {
    ApiResponse {
        success: false,
        message: message.into(),
        data: None,
        errors: None,
    }
}

pub fn failure_with_errors(
    message: impl Into<String>,
    errors: Vec<FieldError>,
) -> ApiResponse<serde_json::Value> {
    ApiResponse {
        success: false,
        message: message.into(),
        data: None,
        errors: Some(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_skips_absent_errors() {
        let body = serde_json::to_value(success("Login successful", "token-value")).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["data"], "token-value");
        assert!(body.get("errors").is_none());
    }

    #[test]
    fn failure_envelope_skips_absent_data() {
        let body = serde_json::to_value(failure("User already exists")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "User already exists");
        assert!(body.get("data").is_none());
        assert!(body.get("errors").is_none());
    }

    #[test]
    fn failure_envelope_carries_field_errors() {
        let errors = vec![FieldError::new("title", "title is required")];
        let body = serde_json::to_value(failure_with_errors("Validation failed", errors)).unwrap();
        assert_eq!(body["errors"][0]["field"], "title");
        assert_eq!(body["errors"][0]["message"], "title is required");
    }

    #[test]
    fn envelope_round_trips_through_the_client_side() {
        let json = r#"{"success":true,"message":"ok","data":[1,2,3]}"#;
        let parsed: ApiResponse<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.data, Some(vec![1, 2, 3]));
        assert_eq!(parsed.errors, None);
    }
}
