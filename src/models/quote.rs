//! Modelos de cotización y estado de precios.

use serde::Serialize;

/// Acción vigilada por el ciclo de consulta.
#[derive(Debug, Clone, Copy)]
pub struct Stock {
    /// Símbolo bursátil.
    pub symbol: &'static str,
    /// Nombre para mostrar en las alertas.
    pub name: &'static str,
}

/// Lista fija de acciones vigiladas, definida al arranque.
pub const STOCKS: &[Stock] = &[
    Stock { symbol: "AMZN", name: "Amazon" },
    Stock { symbol: "NVDA", name: "NVIDIA" },
    Stock { symbol: "BRK-B", name: "Berkshire Hathaway" },
];

/// Una observación de la fuente de datos para un símbolo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerQuote {
    /// Precio actual de mercado.
    pub price: f64,
    /// Cierre de la sesión anterior.
    pub prev_close: f64,
}

/// Últimos valores observados de un símbolo.
///
/// Se sobrescribe entero en cada consulta exitosa; no hay histórico.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerState {
    /// Variación porcentual de la última observación.
    pub change_percent: f64,
    /// Precio absoluto de la última observación.
    pub price: f64,
}

/// Entrada de la respuesta de `GET /precios`.
///
/// Ambos campos son `null` hasta la primera consulta exitosa del símbolo.
#[derive(Debug, Serialize)]
pub struct TickerSnapshot {
    pub price: Option<f64>,
    #[serde(rename = "changePercent")]
    pub change_percent: Option<f64>,
}
