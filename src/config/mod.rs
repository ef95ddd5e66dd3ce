use crate::core::timezone::IST_OFFSET_MINUTES;
use crate::core::{AppError, Result, ShopClock};
use crate::modules::taxes::{TaxMode, TaxPolicy};
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

pub mod server;

pub use server::ServerConfig;

/// Origin of the dashboard frontend, always allowed by CORS
pub const DASHBOARD_ORIGIN: &str = "http://localhost:3000";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub billing: BillingConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub name: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Printed at the top of invoices
    pub shop_name: String,
    pub gst_rate: Decimal,
    pub tax_mode: TaxMode,
    pub invoice_prefix: String,
    pub seed_catalog: bool,
    pub shop_utc_offset_minutes: i32,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl BillingConfig {
    pub fn tax_policy(&self) -> TaxPolicy {
        TaxPolicy::new(self.tax_mode, self.gst_rate)
    }

    pub fn shop_clock(&self) -> Result<ShopClock> {
        ShopClock::from_offset_minutes(self.shop_utc_offset_minutes).map_err(AppError::Configuration)
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            shop_name: "Retail Boss".to_string(),
            gst_rate: TaxPolicy::default_gst_rate(),
            tax_mode: TaxMode::Flat,
            invoice_prefix: "INV-".to_string(),
            seed_catalog: true,
            shop_utc_offset_minutes: IST_OFFSET_MINUTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_source(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_source<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let log_format = match get("LOG_FORMAT", "pretty").to_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(AppError::Configuration(format!(
                    "Invalid LOG_FORMAT: {}",
                    other
                )))
            }
        };

        let config = Config {
            app: AppConfig {
                env: get("APP_ENV", "development"),
                name: get("APP_NAME", "Retail Boss API"),
                log_level: get("LOG_LEVEL", "info"),
                log_format,
            },
            server: ServerConfig::from_source(&lookup)?,
            billing: BillingConfig {
                shop_name: get("SHOP_NAME", "Retail Boss"),
                gst_rate: Decimal::from_str(&get("GST_RATE", "0.05"))
                    .map_err(|_| AppError::Configuration("Invalid GST_RATE".to_string()))?,
                tax_mode: get("TAX_MODE", "flat")
                    .parse()
                    .map_err(AppError::Configuration)?,
                invoice_prefix: get("INVOICE_PREFIX", "INV-"),
                seed_catalog: parse_bool(&get("SEED_CATALOG", "true")).ok_or_else(|| {
                    AppError::Configuration("Invalid SEED_CATALOG".to_string())
                })?,
                shop_utc_offset_minutes: get(
                    "SHOP_UTC_OFFSET_MINUTES",
                    &IST_OFFSET_MINUTES.to_string(),
                )
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid SHOP_UTC_OFFSET_MINUTES".to_string())
                })?,
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(&get("CORS_ORIGINS", DASHBOARD_ORIGIN)),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.billing.gst_rate < Decimal::ZERO || self.billing.gst_rate > Decimal::ONE {
            return Err(AppError::Configuration(
                "GST rate must be between 0 and 1".to_string(),
            ));
        }

        if self.billing.invoice_prefix.trim().is_empty() {
            return Err(AppError::Configuration(
                "Invoice prefix cannot be empty".to_string(),
            ));
        }

        self.billing.shop_clock()?;

        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Port must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parse comma-separated CORS origins; the dashboard origin is always included
fn parse_origins(raw: &str) -> Vec<String> {
    let mut origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if !origins.iter().any(|origin| origin == DASHBOARD_ORIGIN) {
        origins.push(DASHBOARD_ORIGIN.to_string());
    }

    origins
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
