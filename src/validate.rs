use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::{error::ApiError, response::FieldError};

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Declarative per-request rule set. An implementor may canonicalize fields
/// in place before its rules run; every failed rule is collected so one
/// response names all offending fields at once. Required strings deserialize
/// to empty and required numbers to `None` when absent, so a missing field
/// fails its rule under its own name instead of aborting deserialization.
pub trait Validate {
    fn validate(&mut self) -> Result<(), Vec<FieldError>>;
}

pub fn require(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{field} is required")));
    }
}

pub fn require_email(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{field} is required")));
    } else if !is_valid_email(value) {
        errors.push(FieldError::new(
            field,
            format!("{field} must be a valid email address"),
        ));
    }
}

pub fn require_present<T>(errors: &mut Vec<FieldError>, field: &str, value: &Option<T>) {
    if value.is_none() {
        errors.push(FieldError::new(field, format!("{field} is required")));
    }
}

pub fn require_non_negative(errors: &mut Vec<FieldError>, field: &str, value: Option<f64>) {
    match value {
        None => errors.push(FieldError::new(field, format!("{field} is required"))),
        Some(value) if value < 0.0 => errors.push(FieldError::new(
            field,
            format!("{field} must not be negative"),
        )),
        _ => {}
    }
}

pub fn require_non_negative_int(errors: &mut Vec<FieldError>, field: &str, value: Option<i64>) {
    match value {
        None => errors.push(FieldError::new(field, format!("{field} is required"))),
        Some(value) if value < 0 => errors.push(FieldError::new(
            field,
            format!("{field} must not be negative"),
        )),
        _ => {}
    }
}

/// Strict JSON body extractor: deserializes the typed DTO, then runs its
/// rule set. A handler behind it never sees a malformed or invalid body,
/// and the store is never touched on rejection.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(mut value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(vec![FieldError::new("body", rejection.body_text())])
        })?;
        value.validate().map_err(ApiError::Validation)?;
        Ok(Self(value))
    }
}

/// Typed path extractor whose rejection goes through the response envelope
/// instead of axum's plain-text default, so a malformed id in the URL gets
/// the same 400 shape as a malformed body.
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(vec![FieldError::new("path", rejection.body_text())])
            })?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("buyer@example.com"));
        assert!(is_valid_email("a.b+c@farm.co.uk"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn require_rejects_blank_strings() {
        let mut errors = Vec::new();
        require(&mut errors, "title", "   ");
        require(&mut errors, "category", "Vegetables");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn require_email_distinguishes_absent_from_malformed() {
        let mut errors = Vec::new();
        require_email(&mut errors, "email", "");
        require_email(&mut errors, "email", "not-an-email");
        require_email(&mut errors, "email", "ann@farm.test");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "email is required");
        assert_eq!(errors[1].message, "email must be a valid email address");
    }

    #[test]
    fn non_negative_boundaries() {
        let mut errors = Vec::new();
        require_non_negative(&mut errors, "price", Some(0.0));
        require_non_negative(&mut errors, "price", Some(12.5));
        require_non_negative_int(&mut errors, "quantity", Some(0));
        assert!(errors.is_empty());

        require_non_negative(&mut errors, "price", Some(-0.01));
        require_non_negative_int(&mut errors, "quantity", Some(-3));
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["price", "quantity"]);
    }

    #[test]
    fn absent_values_fail_under_their_own_name() {
        let mut errors = Vec::new();
        require_present::<uuid::Uuid>(&mut errors, "product", &None);
        require_non_negative(&mut errors, "price", None);
        require_non_negative_int(&mut errors, "quantity", None);
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["product", "price", "quantity"]);
        assert_eq!(errors[1].message, "price is required");
    }
}
