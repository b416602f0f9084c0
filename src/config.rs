//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use rust_decimal::Decimal;

use crate::cache::DEFAULT_TTL_SECS;
use crate::pricing::ShippingPolicy;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Product cache TTL in seconds
    pub cache_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Active shipping policy
    pub shipping: ShippingPolicy,
    /// Optional path to a catalog JSON file used to seed the store at boot
    pub catalog_path: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL` - Product cache TTL in seconds (default: 60)
    /// - `CLEANUP_INTERVAL` - Cache sweep frequency in seconds (default: 30)
    /// - `SHIPPING_POLICY` - `threshold` or `flat` (default: threshold)
    /// - `SHIPPING_FEE` - Shipping fee (default: 10)
    /// - `FREE_SHIPPING_THRESHOLD` - Subtotal at which the fee is waived
    ///   under the threshold policy (default: 500)
    /// - `CATALOG_PATH` - Optional catalog JSON file to seed the store
    pub fn from_env() -> Self {
        let fee = env::var("SHIPPING_FEE")
            .ok()
            .and_then(|v| v.parse::<Decimal>().ok())
            .unwrap_or(ShippingPolicy::DEFAULT_FEE);

        // Exactly one policy is active; `flat` disables the waiver entirely.
        let shipping = match env::var("SHIPPING_POLICY").as_deref() {
            Ok("flat") => ShippingPolicy::Flat { fee },
            _ => ShippingPolicy::Threshold {
                fee,
                free_at_or_above: env::var("FREE_SHIPPING_THRESHOLD")
                    .ok()
                    .and_then(|v| v.parse::<Decimal>().ok())
                    .unwrap_or(ShippingPolicy::DEFAULT_FREE_THRESHOLD),
            },
        };

        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            shipping,
            catalog_path: env::var("CATALOG_PATH").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl: DEFAULT_TTL_SECS,
            cleanup_interval: 30,
            shipping: ShippingPolicy::default(),
            catalog_path: None,
        }
    }
}
