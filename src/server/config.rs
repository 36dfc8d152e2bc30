use crate::server::error::AppError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| AppError::MissingEnvVar("DATABASE_URL"))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}
