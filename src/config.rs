use std::net::SocketAddr;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub database_url: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Reads the environment exactly once, at startup. Everything downstream
    /// receives this struct instead of consulting the environment itself.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT").unwrap_or_else(|_| "3000".into());
        let listen_addr = format!("{host}:{port}")
            .parse()
            .context("parse APP_HOST/APP_PORT into a socket address")?;

        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            // Session tokens live for one day unless overridden.
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24),
        };

        Ok(Self {
            listen_addr,
            database_url,
            jwt,
        })
    }
}
