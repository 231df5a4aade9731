//! Cuerpos de petición y respuesta de la API HTTP.

use serde::{Deserialize, Serialize};

/// Respuesta de las rutas de escritura.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Cuerpo de `POST /notify`.
#[derive(Debug, Deserialize)]
pub struct NotifyRequest {
    pub title: String,
    pub body: String,
}
