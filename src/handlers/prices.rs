use std::collections::HashMap;

use actix_web::{web, HttpResponse, Result};

use crate::models::{TickerSnapshot, STOCKS};
use crate::state::AppState;

/// `GET /precios`: último precio y variación de cada símbolo vigilado.
///
/// Los símbolos sin consulta exitosa todavía aparecen con ambos campos en
/// `null`.
pub async fn precios(state: web::Data<AppState>) -> Result<HttpResponse> {
    let prices = state.prices.lock();

    let snapshot: HashMap<&str, TickerSnapshot> = STOCKS
        .iter()
        .map(|stock| {
            let entry = prices.get(stock.symbol);
            (
                stock.symbol,
                TickerSnapshot {
                    price: entry.map(|e| e.price),
                    change_percent: entry.map(|e| e.change_percent),
                },
            )
        })
        .collect();

    Ok(HttpResponse::Ok().json(snapshot))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/precios", web::get().to(precios));
}
