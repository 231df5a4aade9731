pub mod health;
pub mod notifications;
pub mod prices;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::config)
        .configure(notifications::config)
        .configure(prices::config);
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use crate::config::AppConfig;
    use crate::models::{TickerState, STOCKS};
    use crate::state::AppState;

    fn test_state() -> web::Data<AppState> {
        let config = AppConfig {
            vapid_public_key: "clave-publica-de-prueba".to_string(),
            vapid_private_key: "clave-privada-de-prueba".to_string(),
            port: 0,
        };
        web::Data::new(AppState::new(config).unwrap())
    }

    fn subscription_body() -> Value {
        json!({
            "endpoint": "https://push.example/reg/abc",
            "keys": { "p256dh": "p256dh", "auth": "auth" }
        })
    }

    #[actix_web::test]
    async fn root_returns_liveness_text() {
        let app =
            test::init_service(App::new().app_data(test_state()).configure(super::config)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), "Stock Alert Backend funcionando".as_bytes());
    }

    #[actix_web::test]
    async fn subscribe_stores_every_registration() {
        let state = test_state();
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(super::config)).await;

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/subscribe")
                .set_json(subscription_body())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Suscripción guardada");
        }

        // Los duplicados se acumulan, no se deduplican.
        assert_eq!(state.store.len(), 2);
    }

    #[actix_web::test]
    async fn subscribe_rejects_malformed_body() {
        let state = test_state();
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(super::config)).await;

        let req = test::TestRequest::post()
            .uri("/subscribe")
            .insert_header(("content-type", "application/json"))
            .set_payload("{esto no es json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_client_error());
        assert_eq!(state.store.len(), 0);
    }

    #[actix_web::test]
    async fn precios_is_all_null_before_first_poll() {
        let app =
            test::init_service(App::new().app_data(test_state()).configure(super::config)).await;

        let req = test::TestRequest::get().uri("/precios").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        for stock in STOCKS {
            assert_eq!(body[stock.symbol]["price"], Value::Null);
            assert_eq!(body[stock.symbol]["changePercent"], Value::Null);
        }
    }

    #[actix_web::test]
    async fn precios_reflects_observed_state() {
        let state = test_state();
        state.prices.lock().insert(
            "AMZN".to_string(),
            TickerState {
                change_percent: 1.58,
                price: 150.25,
            },
        );

        let app =
            test::init_service(App::new().app_data(state.clone()).configure(super::config)).await;

        let req = test::TestRequest::get().uri("/precios").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["AMZN"]["price"], 150.25);
        assert_eq!(body["AMZN"]["changePercent"], 1.58);
        // Los símbolos aún no observados siguen en null.
        assert_eq!(body["NVDA"]["price"], Value::Null);
    }

    #[actix_web::test]
    async fn notify_with_empty_store_sends_nothing_and_succeeds() {
        let app =
            test::init_service(App::new().app_data(test_state()).configure(super::config)).await;

        let req = test::TestRequest::post()
            .uri("/notify")
            .set_json(json!({ "title": "Prueba", "body": "Hola" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Notificaciones enviadas");
    }
}
