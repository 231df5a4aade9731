//! Modelo de suscripción Web Push.

use serde::{Deserialize, Serialize};
use web_push::SubscriptionInfo;

/// Registro de suscripción tal como lo produce el flujo de registro push
/// del navegador. Se guarda literalmente, sin validar ni deduplicar; la
/// identidad es por igualdad estructural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushSubscription {
    /// URL del endpoint asignado por el servicio push.
    pub endpoint: String,
    /// Claves de cifrado del cliente.
    pub keys: SubscriptionKeys,
}

/// Claves de cifrado que acompañan al endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionKeys {
    pub p256dh: String,
    pub auth: String,
}

impl PushSubscription {
    /// Conversión al tipo de suscripción del transporte.
    pub fn to_subscription_info(&self) -> SubscriptionInfo {
        SubscriptionInfo::new(&self.endpoint, &self.keys.p256dh, &self.keys.auth)
    }
}
