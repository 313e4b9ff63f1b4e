use serde::{Deserialize, Serialize};

use crate::response::FieldError;
use crate::validate::{require, require_non_negative, require_non_negative_int, Validate};

/// Request body for creating a product listing. Serialized on the client
/// side, deserialized on the server side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    // Optional only on the wire; the rules reject absence. Zero is a legal
    // price and quantity, so absence cannot be folded into a default.
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: String,
}

impl Validate for CreateProductRequest {
    fn validate(&mut self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "title", &self.title);
        require(&mut errors, "description", &self.description);
        require_non_negative(&mut errors, "price", self.price);
        require_non_negative_int(&mut errors, "quantity", self.quantity.map(i64::from));
        require(&mut errors, "category", &self.category);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
