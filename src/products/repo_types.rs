use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Product listing owned by a farmer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub farmer: Uuid, // owning user, role-checked at creation time
    pub title: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub image_url: Option<String>,
    pub category: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_json_uses_camel_case_field_names() {
        let now = OffsetDateTime::now_utc();
        let product = Product {
            id: Uuid::new_v4(),
            farmer: Uuid::new_v4(),
            title: "Heirloom tomatoes".into(),
            description: "Vine ripened".into(),
            price: 4.5,
            quantity: 20,
            image_url: None,
            category: "Vegetables".into(),
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&product).expect("serialize");
        let obj = value.as_object().expect("object");
        assert!(obj.contains_key("imageUrl"));
        assert!(obj.contains_key("createdAt"));
        assert!(obj.contains_key("updatedAt"));
        assert!(!obj.contains_key("image_url"));
    }
}
