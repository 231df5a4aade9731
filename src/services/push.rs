//! Entrega de notificaciones Web Push con firma VAPID.

use anyhow::{Context, Result};
use web_push::{
    ContentEncoding, IsahcWebPushClient, VapidSignatureBuilder, WebPushClient, WebPushError,
    WebPushMessageBuilder, URL_SAFE_NO_PAD,
};

use crate::config::{AppConfig, VAPID_CONTACT};
use crate::models::PushSubscription;
use crate::services::store::SubscriptionStore;

/// Título fijo de las alertas programadas.
const ALERT_TITLE: &str = "Alerta de acciones";

pub struct PushService {
    client: IsahcWebPushClient,
    vapid_private_key: String,
}

impl PushService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client =
            IsahcWebPushClient::new().context("no se pudo crear el cliente Web Push")?;

        Ok(Self {
            client,
            vapid_private_key: config.vapid_private_key.clone(),
        })
    }

    /// Un único intento de entrega a una suscripción.
    async fn deliver(
        &self,
        subscription: &PushSubscription,
        payload: &str,
    ) -> Result<(), WebPushError> {
        let info = subscription.to_subscription_info();

        let mut signature = VapidSignatureBuilder::from_base64(&self.vapid_private_key, URL_SAFE_NO_PAD, &info)?;
        signature.add_claim("sub", VAPID_CONTACT);

        let mut builder = WebPushMessageBuilder::new(&info);
        builder.set_payload(ContentEncoding::Aes128Gcm, payload.as_bytes());
        builder.set_vapid_signature(signature.build()?);

        self.client.send(builder.build()?).await
    }

    /// Ruta programada: entrega `{"title":"Alerta de acciones","body":...}`
    /// a cada suscripción y elimina las que fallan.
    ///
    /// Todo fallo de entrega se trata como registro muerto; no se distingue
    /// entre fallos transitorios y permanentes.
    pub async fn send_alert(&self, store: &SubscriptionStore, message: &str) {
        let payload = serde_json::json!({ "title": ALERT_TITLE, "body": message }).to_string();

        for subscription in store.all() {
            if let Err(err) = self.deliver(&subscription, &payload).await {
                log::debug!(
                    "suscripción {} eliminada tras fallo de entrega: {err}",
                    subscription.endpoint
                );
                store.remove(&subscription);
            }
        }
    }

    /// Ruta manual de prueba: entrega `{title, body}` tal cual, conserva
    /// las suscripciones fallidas y propaga el primer error de entrega.
    pub async fn notify_all(
        &self,
        store: &SubscriptionStore,
        title: &str,
        body: &str,
    ) -> Result<()> {
        let payload = serde_json::json!({ "title": title, "body": body }).to_string();

        for subscription in store.all() {
            self.deliver(&subscription, &payload)
                .await
                .with_context(|| format!("fallo al notificar a {}", subscription.endpoint))?;
        }

        Ok(())
    }
}
