//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! Everything here is immutable after startup except the metrics counters,
//! which are atomic. Handlers never read the process environment; the
//! dispatch decision comes from [`AppConfig::dispatch`].

use std::sync::Arc;

use folio_core::dispatch::UnimplementedDelivery;
use folio_core::{ContentError, Delivery, DispatchConfig, SiteContent};
use thiserror::Error;

use crate::middleware::metrics::ApiMetrics;

/// Environment value of `APP_ENV` that enables production mode.
pub const PRODUCTION_ENV: &str = "production";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Inputs to the dispatch decision, fixed at startup.
    pub dispatch: DispatchConfig,
    /// Mount `/metrics` and the request metrics middleware.
    pub metrics_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            dispatch: DispatchConfig::default(),
            metrics_enabled: true,
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment.
    ///
    /// Variables:
    /// - `PORT` (default: 8080)
    /// - `APP_ENV`: `production` enables production mode
    /// - `RESEND_API_KEY`: a non-empty value marks the delivery credential present
    /// - `FOLIO_METRICS_ENABLED`: anything but `false` (default: enabled)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let production_mode = lookup("APP_ENV").is_some_and(|v| v == PRODUCTION_ENV);
        let delivery_credential_present =
            lookup("RESEND_API_KEY").is_some_and(|v| !v.is_empty());
        let metrics_enabled = lookup("FOLIO_METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        Self {
            port,
            dispatch: DispatchConfig::new(production_mode, delivery_credential_present),
            metrics_enabled,
        }
    }
}

/// Startup failures while assembling [`AppState`].
#[derive(Error, Debug)]
pub enum StateError {
    #[error("site content: {0}")]
    Content(#[from] ContentError),

    #[error("metrics registry: {0}")]
    Metrics(#[from] prometheus::Error),
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub content: Arc<SiteContent>,
    /// Provider for `queued` submissions. Not invoked yet.
    pub delivery: Arc<dyn Delivery>,
    pub metrics: ApiMetrics,
}

impl AppState {
    /// State with the embedded site content.
    pub fn new(config: AppConfig) -> Result<Self, StateError> {
        Self::with_content(config, SiteContent::embedded()?)
    }

    /// State with explicit site content.
    pub fn with_content(config: AppConfig, content: SiteContent) -> Result<Self, StateError> {
        Ok(Self {
            config,
            content: Arc::new(content),
            delivery: Arc::new(UnimplementedDelivery),
            metrics: ApiMetrics::new()?,
        })
    }

    /// Replace the delivery provider.
    pub fn with_delivery(mut self, delivery: Arc<dyn Delivery>) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn dispatch(&self) -> &DispatchConfig {
        &self.config.dispatch
    }
}
