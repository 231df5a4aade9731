//! Cliente del endpoint de gráficos de Yahoo Finance.
//!
//! Una petición por símbolo y ciclo contra
//! `https://query1.finance.yahoo.com/v8/finance/chart/{symbol}`.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::models::TickerQuote;

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

pub struct QuoteClient {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    // Yahoo devuelve result=null cuando el símbolo no existe.
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: f64,
    #[serde(rename = "chartPreviousClose")]
    chart_previous_close: f64,
}

impl QuoteClient {
    /// Cliente sin timeout de petición: un upstream colgado retrasa el
    /// ciclo, que se retoma en el siguiente tick.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Obtiene precio actual y cierre anterior de `symbol`.
    ///
    /// Cualquier error de red, estado no-2xx o campo ausente devuelve `Err`
    /// y el llamador omite el símbolo durante este ciclo.
    pub async fn fetch(&self, symbol: &str) -> Result<TickerQuote> {
        let url = format!("{CHART_URL}/{symbol}");

        let response = self
            .client
            .get(&url)
            .query(&[("interval", "1d"), ("range", "1d")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("estado HTTP {} para {}", response.status(), symbol));
        }

        let body: ChartResponse = response.json().await?;
        parse_chart(body)
    }
}

fn parse_chart(body: ChartResponse) -> Result<TickerQuote> {
    let first = body
        .chart
        .result
        .and_then(|mut results| {
            if results.is_empty() {
                None
            } else {
                Some(results.remove(0))
            }
        })
        .ok_or_else(|| anyhow!("respuesta sin chart.result[0]"))?;

    Ok(TickerQuote {
        price: first.meta.regular_market_price,
        prev_close: first.meta.chart_previous_close,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<TickerQuote> {
        let body: ChartResponse = serde_json::from_str(json)?;
        parse_chart(body)
    }

    #[test]
    fn extracts_price_and_previous_close() {
        let json = r#"{
            "chart": {
                "result": [
                    {
                        "meta": {
                            "currency": "USD",
                            "symbol": "AMZN",
                            "regularMarketPrice": 110.5,
                            "chartPreviousClose": 100.0
                        }
                    }
                ],
                "error": null
            }
        }"#;

        let quote = parse(json).unwrap();
        assert_eq!(quote.price, 110.5);
        assert_eq!(quote.prev_close, 100.0);
    }

    #[test]
    fn null_result_is_an_error() {
        let json = r#"{"chart":{"result":null,"error":{"code":"Not Found"}}}"#;
        assert!(parse(json).is_err());
    }

    #[test]
    fn empty_result_is_an_error() {
        let json = r#"{"chart":{"result":[],"error":null}}"#;
        assert!(parse(json).is_err());
    }

    #[test]
    fn missing_field_is_an_error() {
        let json = r#"{"chart":{"result":[{"meta":{"regularMarketPrice":110.5}}],"error":null}}"#;
        assert!(parse(json).is_err());
    }
}
