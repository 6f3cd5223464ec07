//! Request handlers for the gateway endpoints.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::GatewayResult;
use crate::http::server::AppState;
use crate::providers::{Quote, WeatherQuery, WeatherReport};

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>skygate</title></head>
<body>
<h1>skygate</h1>
<p>A small JSON gateway.</p>
<ul>
<li><code>GET /weather?city=London</code> &mdash; current conditions for a place</li>
<li><code>GET /quote</code> &mdash; a quote from the quotes provider</li>
<li><code>GET /metrics</code> &mdash; Prometheus metrics</li>
</ul>
</body>
</html>
"#;

/// Query parameters accepted by `GET /weather`.
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub city: String,
    pub state_code: Option<String>,
    pub country_code: Option<String>,
}

/// Success body for `GET /weather`.
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub city: String,
    pub temperature: f64,
    pub description: String,
    pub humidity: u8,
    pub status: &'static str,
}

impl From<WeatherReport> for WeatherResponse {
    fn from(report: WeatherReport) -> Self {
        Self {
            city: report.city_name,
            temperature: report.temperature_celsius,
            description: report.description,
            humidity: report.humidity_percent,
            status: "success",
        }
    }
}

/// Success body for `GET /quote`.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: &'static str,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            quote: quote.text,
            author: quote.author,
            category: quote.category,
            status: "success",
        }
    }
}

/// `GET /` — static home page.
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// `GET /weather` — geocode the query, then fetch current conditions.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> GatewayResult<Json<WeatherResponse>> {
    let query = WeatherQuery {
        city: params.city,
        state_code: params.state_code,
        country_code: params.country_code,
    };

    let report = state.weather.lookup(&query).await?;
    Ok(Json(report.into()))
}

/// `GET /quote` — fetch one quote from the provider.
pub async fn get_quote(State(state): State<AppState>) -> GatewayResult<Json<QuoteResponse>> {
    let quote = state.quotes.fetch_one().await?;
    Ok(Json(quote.into()))
}

/// `GET /metrics` — Prometheus text exposition of the registry.
pub async fn get_metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        state.metrics.render(),
    )
}
