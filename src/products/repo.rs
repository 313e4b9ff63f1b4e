use crate::products::dto::CreateProductRequest;
use crate::products::repo_types::Product;
use sqlx::PgPool;
use uuid::Uuid;

impl Product {
    /// Insert a listing for the given farmer.
    pub async fn create(
        db: &PgPool,
        farmer: Uuid,
        fields: &CreateProductRequest,
    ) -> anyhow::Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (farmer, title, description, price, quantity, image_url, category)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, farmer, title, description, price, quantity, image_url, category,
                      created_at, updated_at
            "#,
        )
        .bind(farmer)
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.price)
        .bind(fields.quantity)
        .bind(&fields.image_url)
        .bind(&fields.category)
        .fetch_one(db)
        .await?;
        Ok(product)
    }

    /// Every listing, newest first.
    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, farmer, title, description, price, quantity, image_url, category,
                   created_at, updated_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(products)
    }
}
