//! Estado compartido de la aplicación.

use std::collections::HashMap;

use anyhow::Result;
use parking_lot::Mutex;

use crate::config::AppConfig;
use crate::models::TickerState;
use crate::services::push::PushService;
use crate::services::quotes::QuoteClient;
use crate::services::store::SubscriptionStore;

/// Todo lo que comparten los manejadores HTTP y el ciclo de consulta.
///
/// Se construye una vez al arranque y circula detrás de `web::Data`/`Arc`.
/// Los mutex preservan la atomicidad entre escritores que el original de un
/// solo hilo daba por supuesta.
pub struct AppState {
    /// Suscripciones push registradas.
    pub store: SubscriptionStore,
    /// Última variación porcentual y precio observados por símbolo.
    pub prices: Mutex<HashMap<String, TickerState>>,
    /// Cliente de cotizaciones.
    pub quotes: QuoteClient,
    /// Transporte de notificaciones push.
    pub push: PushService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            store: SubscriptionStore::new(),
            prices: Mutex::new(HashMap::new()),
            quotes: QuoteClient::new(),
            push: PushService::new(&config)?,
        })
    }
}
