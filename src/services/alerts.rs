//! Evaluación de umbrales sobre la variación porcentual.

use crate::config::Thresholds;
use crate::models::{Stock, TickerState};

/// Lado del cruce de umbral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Buy,
    Sell,
}

/// Variación porcentual de `price` respecto a `prev_close`.
pub fn percent_change(price: f64, prev_close: f64) -> f64 {
    (price - prev_close) / prev_close * 100.0
}

/// Clasifica una variación porcentual contra los umbrales.
///
/// La compra se comprueba antes que la venta, así que una misma variación
/// nunca produce ambas señales.
pub fn classify(change_percent: f64, thresholds: &Thresholds) -> Option<Signal> {
    if change_percent <= -thresholds.buy {
        Some(Signal::Buy)
    } else if change_percent >= thresholds.sell {
        Some(Signal::Sell)
    } else {
        None
    }
}

/// Evalúa una observación contra el estado almacenado del símbolo.
///
/// La primera observación de un símbolo nunca genera alerta: todavía no hay
/// variación previa con la que comparar.
pub fn evaluate(
    previous: Option<&TickerState>,
    change_percent: f64,
    thresholds: &Thresholds,
) -> Option<Signal> {
    previous?;
    classify(change_percent, thresholds)
}

/// Mensaje de alerta que reciben los suscriptores.
pub fn alert_message(stock: &Stock, change_percent: f64, signal: Signal) -> String {
    match signal {
        Signal::Buy => format!(
            "{}: ¡Oportunidad de compra! Bajó {:.2}%",
            stock.name, change_percent
        ),
        Signal::Sell => format!(
            "{}: ¡Momento de vender! Subió {:.2}%",
            stock.name, change_percent
        ),
    }
}
