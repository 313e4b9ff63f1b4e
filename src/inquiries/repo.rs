use crate::inquiries::dto::CreateInquiryRequest;
use crate::inquiries::repo_types::Inquiry;
use sqlx::PgPool;
use uuid::Uuid;

impl Inquiry {
    /// Record an inquiry exactly as submitted.
    pub async fn create(db: &PgPool, fields: &CreateInquiryRequest) -> anyhow::Result<Inquiry> {
        let inquiry = sqlx::query_as::<_, Inquiry>(
            r#"
            INSERT INTO inquiries (product, buyer_email, message)
            VALUES ($1, $2, $3)
            RETURNING id, product, buyer_email, message, created_at
            "#,
        )
        .bind(fields.product)
        .bind(&fields.buyer_email)
        .bind(&fields.message)
        .fetch_one(db)
        .await?;
        Ok(inquiry)
    }

    /// Every inquiry for one product, oldest first.
    pub async fn list_by_product(db: &PgPool, product: Uuid) -> anyhow::Result<Vec<Inquiry>> {
        let inquiries = sqlx::query_as::<_, Inquiry>(
            r#"
            SELECT id, product, buyer_email, message, created_at
            FROM inquiries
            WHERE product = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(product)
        .fetch_all(db)
        .await?;
        Ok(inquiries)
    }
}
