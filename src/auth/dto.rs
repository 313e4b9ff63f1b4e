use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo_types::{Role, User};
use crate::response::FieldError;
use crate::validate::{require, require_email, Validate};

/// Request body for user registration. Serialized on the client side,
/// deserialized on the server side; one definition keeps both in step.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

impl Validate for RegisterRequest {
    fn validate(&mut self) -> Result<(), Vec<FieldError>> {
        // Stored lowercased so lookups and the unique index see one spelling.
        self.email = self.email.trim().to_lowercase();
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name);
        require_email(&mut errors, "email", &self.email);
        require(&mut errors, "password", &self.password);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Request body for login.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&mut self) -> Result<(), Vec<FieldError>> {
        // Same canonical form the register path stored.
        self.email = self.email.trim().to_lowercase();
        let mut errors = Vec::new();
        require_email(&mut errors, "email", &self.email);
        require(&mut errors, "password", &self.password);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Public part of the user returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Response returned after a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_role_defaults_to_buyer() {
        let mut req: RegisterRequest = serde_json::from_value(serde_json::json!({
            "name": "Ann",
            "email": "ann@farm.test",
            "password": "p"
        }))
        .expect("deserialize");
        assert_eq!(req.role, Role::Buyer);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn register_rejects_unknown_fields() {
        let result: Result<RegisterRequest, _> = serde_json::from_value(serde_json::json!({
            "name": "Ann",
            "email": "ann@farm.test",
            "password": "p",
            "isAdmin": true
        }));
        assert!(result.is_err());
    }

    #[test]
    fn register_reports_every_failed_field() {
        let mut req = RegisterRequest {
            name: "  ".into(),
            email: "not-an-email".into(),
            password: "".into(),
            role: Role::Buyer,
        };
        let errors = req.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "password"]);
    }

    #[test]
    fn register_names_every_absent_field() {
        let mut req: RegisterRequest =
            serde_json::from_value(serde_json::json!({ "email": "ann@farm.test" }))
                .expect("deserialize");
        let errors = req.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "password"]);
    }

    #[test]
    fn emails_are_canonicalized_before_the_shape_check() {
        let mut req: RegisterRequest = serde_json::from_value(serde_json::json!({
            "name": "Ann",
            "email": "  Ann@Farm.Test ",
            "password": "p"
        }))
        .expect("deserialize");
        assert!(req.validate().is_ok());
        assert_eq!(req.email, "ann@farm.test");

        let mut login: LoginRequest = serde_json::from_value(serde_json::json!({
            "email": "ANN@FARM.TEST",
            "password": "p"
        }))
        .expect("deserialize");
        assert!(login.validate().is_ok());
        assert_eq!(login.email, "ann@farm.test");
    }

    #[test]
    fn login_requires_a_well_formed_email() {
        let mut req = LoginRequest {
            email: "broken@".into(),
            password: "secret".into(),
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn public_user_serializes_camel_case_without_secrets() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ann".into(),
            email: "ann@farm.test".into(),
            password_hash: "$argon2id$fake".into(),
            role: Role::Farmer,
            created_at: OffsetDateTime::now_utc(),
        };
        let value = serde_json::to_value(PublicUser::from(user)).expect("serialize");
        let obj = value.as_object().expect("object");
        assert!(obj.contains_key("createdAt"));
        assert_eq!(obj["role"], "farmer");
        assert!(!obj.contains_key("passwordHash"));
        assert!(!obj.contains_key("password"));
    }
}
