//! Configuración por variables de entorno.
//!
//! Las claves VAPID son obligatorias; el resto tiene valores por defecto.

use anyhow::{Context, Result};
use std::env;

/// Identificador de contacto exigido por el protocolo VAPID.
pub const VAPID_CONTACT: &str = "mailto:alertas@stockapp.com";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_THRESHOLD: f64 = 5.0;

/// Configuración de arranque, leída una sola vez del entorno.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Clave pública VAPID (base64 URL-safe).
    pub vapid_public_key: String,
    /// Clave privada VAPID (base64 URL-safe).
    pub vapid_private_key: String,
    /// Puerto de escucha HTTP.
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let vapid_public_key =
            env::var("VAPID_PUBLIC_KEY").context("VAPID_PUBLIC_KEY no está definida")?;
        let vapid_private_key =
            env::var("VAPID_PRIVATE_KEY").context("VAPID_PRIVATE_KEY no está definida")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT inválido: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            vapid_public_key,
            vapid_private_key,
            port,
        })
    }
}

/// Umbrales de compra/venta en porcentaje.
///
/// Se vuelven a leer del entorno en cada ciclo de consulta, no se cachean
/// al arranque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub buy: f64,
    pub sell: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            buy: DEFAULT_THRESHOLD,
            sell: DEFAULT_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn from_env() -> Self {
        Self {
            buy: parse_threshold(env::var("BUY_THRESHOLD").ok()),
            sell: parse_threshold(env::var("SELL_THRESHOLD").ok()),
        }
    }
}

fn parse_threshold(raw: Option<String>) -> f64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_defaults_to_five() {
        assert_eq!(parse_threshold(None), 5.0);
    }

    #[test]
    fn threshold_parses_configured_value() {
        assert_eq!(parse_threshold(Some("7.5".to_string())), 7.5);
        assert_eq!(parse_threshold(Some("0".to_string())), 0.0);
    }

    #[test]
    fn threshold_falls_back_on_garbage() {
        assert_eq!(parse_threshold(Some("cinco".to_string())), 5.0);
        assert_eq!(parse_threshold(Some("".to_string())), 5.0);
    }
}
