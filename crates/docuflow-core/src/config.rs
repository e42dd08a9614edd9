//! Configuration module
//!
//! This module provides configuration structures for the document tracker
//! service, including server, intake, and processing settings.

use std::env;
use std::time::Duration;

/// Base configuration shared by service components
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

/// Document tracker configuration
#[derive(Clone, Debug)]
pub struct TrackerConfig {
    pub base: BaseConfig,
    // Intake configuration
    pub max_upload_size_bytes: usize,
    pub allowed_extensions: Vec<String>,
    pub allowed_content_types: Vec<String>,
    // Simulated analysis configuration
    pub processing_delay_ms: u64,
}

/// Application configuration (document tracker).
#[derive(Clone, Debug)]
pub struct Config(pub Box<TrackerConfig>);

impl Config {
    fn as_tracker(&self) -> &TrackerConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        self.as_tracker()
            .base
            .environment
            .to_lowercase()
            .eq("production")
            || self.as_tracker().base.environment.to_lowercase().eq("prod")
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = TrackerConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_tracker().validate()
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.as_tracker().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_tracker().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_tracker().base.environment
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.as_tracker().max_upload_size_bytes
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.as_tracker().allowed_extensions
    }

    pub fn allowed_content_types(&self) -> &[String] {
        &self.as_tracker().allowed_content_types
    }

    pub fn processing_delay_ms(&self) -> u64 {
        self.as_tracker().processing_delay_ms
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.as_tracker().processing_delay_ms)
    }
}

impl TrackerConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        const MAX_UPLOAD_SIZE_MB: usize = 10;
        const PROCESSING_DELAY_MS: u64 = 3000;

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let max_upload_size_mb = env::var("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|_| MAX_UPLOAD_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_UPLOAD_SIZE_MB);

        let allowed_extensions = env::var("ALLOWED_EXTENSIONS")
            .unwrap_or_else(|_| "pdf,png,jpg,jpeg,txt".to_string())
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .collect();

        let allowed_content_types = env::var("ALLOWED_CONTENT_TYPES")
            .unwrap_or_else(|_| "application/pdf,image/*,text/*".to_string())
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .collect();

        let base = BaseConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
        };

        Ok(TrackerConfig {
            base,
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            allowed_extensions,
            allowed_content_types,
            processing_delay_ms: env::var("PROCESSING_DELAY_MS")
                .unwrap_or_else(|_| PROCESSING_DELAY_MS.to_string())
                .parse()
                .unwrap_or(PROCESSING_DELAY_MS),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!(
                "MAX_UPLOAD_SIZE_MB must be greater than zero"
            ));
        }

        if self.allowed_extensions.is_empty() {
            return Err(anyhow::anyhow!(
                "ALLOWED_EXTENSIONS must list at least one extension"
            ));
        }

        if self.allowed_content_types.is_empty() {
            return Err(anyhow::anyhow!(
                "ALLOWED_CONTENT_TYPES must list at least one content type"
            ));
        }

        Ok(())
    }
}
