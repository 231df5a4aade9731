//! Stock Alert Backend
//!
//! Consulta precios de acciones en Yahoo Finance cada 5 minutos, detecta
//! cruces de umbral de compra/venta y envía notificaciones Web Push a las
//! suscripciones registradas.

mod config;   // configuración por variables de entorno
mod handlers; // manejadores de rutas HTTP
mod models;   // modelos de datos
mod services; // lógica de negocio
mod state;    // estado compartido de la aplicación

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use crate::config::AppConfig;
use crate::services::watcher;
use crate::state::AppState;

/// Punto de entrada de la aplicación.
///
/// Arranca el ciclo de consulta programado y el servidor HTTP.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env()?;
    let port = config.port;

    log::info!("Usando clave pública VAPID {}", config.vapid_public_key);

    let state = web::Data::new(AppState::new(config)?);

    // Ciclo de consulta programado, independiente del servidor HTTP.
    tokio::spawn(watcher::run(state.clone().into_inner()));

    log::info!("Servidor escuchando en puerto {}", port);

    HttpServer::new({
        let state = state.clone();
        move || {
            App::new()
                .wrap(Logger::default())
                .app_data(state.clone())
                .configure(handlers::config)
        }
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
