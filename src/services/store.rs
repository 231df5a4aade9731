//! Almacén de suscripciones en memoria.
//!
//! Sin persistencia y sin deduplicación: la lista queda vacía en cada
//! reinicio y los registros duplicados se acumulan.

use parking_lot::Mutex;

use crate::models::PushSubscription;

#[derive(Default)]
pub struct SubscriptionStore {
    subscriptions: Mutex<Vec<PushSubscription>>,
}

impl SubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade sin comprobar unicidad.
    pub fn add(&self, subscription: PushSubscription) {
        self.subscriptions.lock().push(subscription);
    }

    /// Elimina todas las entradas estructuralmente iguales a `subscription`.
    pub fn remove(&self, subscription: &PushSubscription) {
        self.subscriptions.lock().retain(|s| s != subscription);
    }

    /// Copia de la lista actual, para iterar fuera del candado.
    pub fn all(&self) -> Vec<PushSubscription> {
        self.subscriptions.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.subscriptions.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubscriptionKeys;

    fn subscription(endpoint: &str) -> PushSubscription {
        PushSubscription {
            endpoint: endpoint.to_string(),
            keys: SubscriptionKeys {
                p256dh: "p256dh".to_string(),
                auth: "auth".to_string(),
            },
        }
    }

    #[test]
    fn add_accumulates_duplicates() {
        let store = SubscriptionStore::new();
        store.add(subscription("https://push.example/a"));
        store.add(subscription("https://push.example/a"));
        store.add(subscription("https://push.example/b"));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_deletes_every_equal_entry() {
        let store = SubscriptionStore::new();
        store.add(subscription("https://push.example/a"));
        store.add(subscription("https://push.example/b"));
        store.add(subscription("https://push.example/a"));

        store.remove(&subscription("https://push.example/a"));

        let rest = store.all();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].endpoint, "https://push.example/b");
    }

    #[test]
    fn remove_of_unknown_subscription_is_a_noop() {
        let store = SubscriptionStore::new();
        store.add(subscription("https://push.example/a"));
        store.remove(&subscription("https://push.example/otro"));
        assert_eq!(store.len(), 1);
    }
}
