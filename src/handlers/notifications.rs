use actix_web::{web, HttpResponse, Result};

use crate::models::{MessageResponse, NotifyRequest, PushSubscription};
use crate::state::AppState;

/// `POST /subscribe`: guarda la suscripción tal cual llega.
pub async fn subscribe(
    state: web::Data<AppState>,
    subscription: web::Json<PushSubscription>,
) -> Result<HttpResponse> {
    state.store.add(subscription.into_inner());
    log::debug!("suscripciones registradas: {}", state.store.len());

    Ok(HttpResponse::Created().json(MessageResponse::new("Suscripción guardada")))
}

/// `POST /notify`: envío manual de prueba a todas las suscripciones.
pub async fn notify(
    state: web::Data<AppState>,
    request: web::Json<NotifyRequest>,
) -> Result<HttpResponse> {
    match state
        .push
        .notify_all(&state.store, &request.title, &request.body)
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(MessageResponse::new("Notificaciones enviadas"))),
        Err(e) => {
            Ok(HttpResponse::InternalServerError().json(MessageResponse::new(&e.to_string())))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/subscribe", web::post().to(subscribe))
        .route("/notify", web::post().to(notify));
}
