//! Ciclo programado de consulta, evaluación y notificación.

use std::sync::Arc;
use std::time::Duration;

use tokio::time;

use crate::config::Thresholds;
use crate::models::{TickerState, STOCKS};
use crate::services::alerts;
use crate::state::AppState;

/// Periodo fijo de consulta.
const POLL_PERIOD: Duration = Duration::from_secs(5 * 60);

/// Bucle del temporizador: un ciclo por tick, sin exclusión mutua.
///
/// Cada ciclo se lanza como tarea propia, así que un ciclo que dure más que
/// el periodo se solapa con el siguiente en lugar de retrasarlo.
pub async fn run(state: Arc<AppState>) {
    let mut ticker = time::interval(POLL_PERIOD);
    // El primer tick del interval es inmediato; el primer ciclo debe
    // ejecutarse un periodo completo después del arranque.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let state = Arc::clone(&state);
        tokio::spawn(async move {
            check_stocks(&state).await;
        });
    }
}

/// Un ciclo de consulta sobre la lista fija, símbolo a símbolo.
///
/// Los umbrales se releen del entorno al comienzo de cada ciclo.
pub async fn check_stocks(state: &AppState) {
    let thresholds = Thresholds::from_env();

    for stock in STOCKS {
        let quote = match state.quotes.fetch(stock.symbol).await {
            Ok(quote) => quote,
            Err(err) => {
                // Mejor esfuerzo: el siguiente ciclo lo reintenta solo.
                log::debug!("consulta de {} omitida: {err}", stock.symbol);
                continue;
            }
        };

        let change_percent = alerts::percent_change(quote.price, quote.prev_close);
        let previous = state.prices.lock().get(stock.symbol).copied();

        if let Some(signal) = alerts::evaluate(previous.as_ref(), change_percent, &thresholds) {
            let message = alerts::alert_message(stock, change_percent, signal);
            log::debug!("alerta de {}: {message}", stock.symbol);
            state.push.send_alert(&state.store, &message).await;
        }

        // El estado se sobrescribe siempre, haya alerta o no.
        state.prices.lock().insert(
            stock.symbol.to_string(),
            TickerState {
                change_percent,
                price: quote.price,
            },
        );
    }
}
