use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::auth::dto::{LoginRequest, PublicUser, RegisterRequest, TokenResponse};
use crate::auth::repo_types::Role;
use crate::inquiries::dto::CreateInquiryRequest;
use crate::inquiries::repo_types::Inquiry;
use crate::products::dto::CreateProductRequest;
use crate::products::repo_types::Product;
use crate::response::{ApiResponse, FieldError};

/// Failure surface of the typed client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a failure envelope. Carries the envelope's
    /// message and any per-field validation errors.
    #[error("{message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
        errors: Vec<FieldError>,
    },
    #[error("server accepted the request but sent no data")]
    MissingData,
}

/// Typed wrapper over the marketplace REST API. Holds the session token the
/// way the browser app holds it in local storage: set on login, dropped on
/// logout, attached as a bearer header in between.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drops the held token. The server keeps no session state, so there is
    /// nothing to call remotely.
    pub fn logout(&mut self) {
        self.token = None;
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<PublicUser, ClientError> {
        let url = format!("{}/api/auth/register", self.base_url);
        let req = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        };
        let response = self.http.post(&url).json(&req).send().await?;
        read_envelope(response).await
    }

    /// Logs in and stores the returned token for subsequent calls.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<String, ClientError> {
        let url = format!("{}/api/auth/login", self.base_url);
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.http.post(&url).json(&req).send().await?;
        let token: TokenResponse = read_envelope(response).await?;
        self.token = Some(token.token.clone());
        Ok(token.token)
    }

    #[tracing::instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, ClientError> {
        let url = format!("{}/api/products", self.base_url);
        let response = self.http.get(&url).send().await?;
        read_envelope(response).await
    }

    /// Listings owned by one farmer. The server exposes no per-farmer route,
    /// so this filters the full list locally, as the farmer dashboard does.
    #[tracing::instrument(skip(self))]
    pub async fn my_products(&self, farmer_id: Uuid) -> Result<Vec<Product>, ClientError> {
        let mut products = self.products().await?;
        products.retain(|p| p.farmer == farmer_id);
        Ok(products)
    }

    #[tracing::instrument(skip(self, description, image_url))]
    pub async fn create_product(
        &self,
        title: &str,
        description: &str,
        price: f64,
        quantity: i32,
        image_url: Option<&str>,
        category: &str,
    ) -> Result<Product, ClientError> {
        let url = format!("{}/api/products", self.base_url);
        let req = CreateProductRequest {
            title: title.to_string(),
            description: description.to_string(),
            price: Some(price),
            quantity: Some(quantity),
            image_url: image_url.map(str::to_string),
            category: category.to_string(),
        };
        let mut request = self.http.post(&url).json(&req);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        let response = request.send().await?;
        read_envelope(response).await
    }

    #[tracing::instrument(skip(self, message))]
    pub async fn create_inquiry(
        &self,
        product: Uuid,
        buyer_email: &str,
        message: &str,
    ) -> Result<Inquiry, ClientError> {
        let url = format!("{}/api/inquiries", self.base_url);
        let req = CreateInquiryRequest {
            product: Some(product),
            buyer_email: buyer_email.to_string(),
            message: message.to_string(),
        };
        let response = self.http.post(&url).json(&req).send().await?;
        read_envelope(response).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn inquiries_for_product(&self, product: Uuid) -> Result<Vec<Inquiry>, ClientError> {
        let url = format!("{}/api/inquiries/{}", self.base_url, product);
        let response = self.http.get(&url).send().await?;
        read_envelope(response).await
    }
}

async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    let envelope: ApiResponse<T> = response.json().await?;
    unwrap_envelope(status, envelope)
}

/// Turns an envelope into its payload. Failure envelopes and success
/// envelopes without data both become errors, so callers only ever see a
/// typed value.
fn unwrap_envelope<T>(
    status: reqwest::StatusCode,
    envelope: ApiResponse<T>,
) -> Result<T, ClientError> {
    if !status.is_success() || !envelope.success {
        return Err(ClientError::Api {
            status,
            message: envelope.message,
            errors: envelope.errors.unwrap_or_default(),
        });
    }
    envelope.data.ok_or(ClientError::MissingData)
}
