use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::response::FieldError;
use crate::validate::{require, require_email, require_present, Validate};

/// Request body for sending an inquiry. No account is involved; the buyer
/// identifies themselves by email alone.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateInquiryRequest {
    // Optional only on the wire; the rules reject absence.
    pub product: Option<Uuid>,
    #[serde(default)]
    pub buyer_email: String,
    #[serde(default)]
    pub message: String,
}

impl Validate for CreateInquiryRequest {
    fn validate(&mut self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_present(&mut errors, "product", &self.product);
        require_email(&mut errors, "buyerEmail", &self.buyer_email);
        require(&mut errors, "message", &self.message);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
