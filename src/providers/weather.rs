//! Weather lookup chain: geocode a free-text place, then fetch current
//! conditions for the resolved coordinates.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::config::{CredentialsConfig, UpstreamConfig};
use crate::error::{GatewayError, GatewayResult};

/// A free-text weather lookup request.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub city: String,
    pub state_code: Option<String>,
    pub country_code: Option<String>,
}

impl WeatherQuery {
    /// Composite location string understood by the geocoding provider:
    /// city plus any non-empty state/country codes, comma-joined.
    pub fn location(&self) -> String {
        let mut parts = vec![self.city.as_str()];
        for code in [self.state_code.as_deref(), self.country_code.as_deref()] {
            if let Some(code) = code {
                if !code.is_empty() {
                    parts.push(code);
                }
            }
        }
        parts.join(",")
    }
}

/// Coordinates resolved for a location query.
#[derive(Debug, Clone)]
pub struct GeoResult {
    pub latitude: f64,
    pub longitude: f64,
    pub resolved_name: String,
}

/// Current conditions for a resolved location.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub city_name: String,
    pub temperature_celsius: f64,
    pub description: String,
    pub humidity_percent: u8,
}

/// Client for the geocoding + current-conditions provider pair.
#[derive(Debug, Clone)]
pub struct WeatherService {
    api_key: Option<String>,
    geocoding_url: String,
    weather_url: String,
    http: Client,
}

impl WeatherService {
    pub fn new(upstream: &UpstreamConfig, credentials: &CredentialsConfig, http: Client) -> Self {
        Self {
            api_key: credentials.weather_api_key.clone(),
            geocoding_url: upstream.geocoding_url.clone(),
            weather_url: upstream.weather_url.clone(),
            http,
        }
    }

    /// Resolve a query to current conditions.
    ///
    /// Fails with `Configuration` before any outbound call when no API key
    /// is set. Geocoding misses map to `NotFound`; a non-200 conditions
    /// response mirrors the upstream status.
    pub async fn lookup(&self, query: &WeatherQuery) -> GatewayResult<WeatherReport> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GatewayError::Configuration("Weather API key not configured".to_string())
        })?;

        let geo = self.geocode(&query.location(), &query.city, api_key).await?;

        tracing::debug!(
            city = %geo.resolved_name,
            latitude = geo.latitude,
            longitude = geo.longitude,
            "Location resolved"
        );

        self.current_conditions(&geo, api_key).await
    }

    async fn geocode(&self, location: &str, city: &str, api_key: &str) -> GatewayResult<GeoResult> {
        let response = self
            .http
            .get(&self.geocoding_url)
            .query(&[("q", location), ("limit", "1"), ("appid", api_key)])
            .send()
            .await?;

        // The provider answers errors with a JSON object rather than a
        // result list; both that and an empty list mean no match.
        let payload: Value = response.json().await?;
        parse_geo_payload(&payload, city)
    }

    async fn current_conditions(&self, geo: &GeoResult, api_key: &str) -> GatewayResult<WeatherReport> {
        let response = self
            .http
            .get(&self.weather_url)
            .query(&[
                ("lat", geo.latitude.to_string()),
                ("lon", geo.longitude.to_string()),
                ("appid", api_key.to_string()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                message: "Weather data not available".to_string(),
            });
        }

        let payload: ConditionsPayload = response.json().await?;
        let description = payload
            .weather
            .first()
            .map(|w| w.description.clone())
            .ok_or_else(|| {
                GatewayError::Unexpected("Weather provider returned no conditions".to_string())
            })?;

        Ok(WeatherReport {
            city_name: geo.resolved_name.clone(),
            temperature_celsius: payload.main.temp,
            description,
            humidity_percent: payload.main.humidity,
        })
    }
}

/// Interpret a geocoding payload: a non-empty list whose first element is
/// an object yields coordinates; anything else is a miss.
fn parse_geo_payload(payload: &Value, city: &str) -> GatewayResult<GeoResult> {
    let first = payload.as_array().and_then(|list| list.first());
    let entry = match first {
        Some(value) if value.is_object() => value.clone(),
        _ => return Err(GatewayError::NotFound("Location not found".to_string())),
    };

    let entry: GeoEntry = serde_json::from_value(entry)?;

    Ok(GeoResult {
        latitude: entry.lat,
        longitude: entry.lon,
        resolved_name: entry.name.unwrap_or_else(|| city.to_string()),
    })
}

#[derive(Debug, Deserialize)]
struct GeoEntry {
    lat: f64,
    lon: f64,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConditionsMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ConditionsWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ConditionsPayload {
    main: ConditionsMain,
    weather: Vec<ConditionsWeather>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_city_only() {
        let query = WeatherQuery {
            city: "London".into(),
            state_code: None,
            country_code: None,
        };
        assert_eq!(query.location(), "London");
    }

    #[test]
    fn test_location_with_codes() {
        let query = WeatherQuery {
            city: "Springfield".into(),
            state_code: Some("IL".into()),
            country_code: Some("US".into()),
        };
        assert_eq!(query.location(), "Springfield,IL,US");
    }

    #[test]
    fn test_location_skips_empty_codes() {
        let query = WeatherQuery {
            city: "Lviv".into(),
            state_code: Some("".into()),
            country_code: Some("UA".into()),
        };
        assert_eq!(query.location(), "Lviv,UA");
    }

    #[test]
    fn test_geo_payload_first_element() {
        let payload = json!([{"lat": 51.5, "lon": -0.12, "name": "London"}]);
        let geo = parse_geo_payload(&payload, "london").unwrap();
        assert_eq!(geo.latitude, 51.5);
        assert_eq!(geo.longitude, -0.12);
        assert_eq!(geo.resolved_name, "London");
    }

    #[test]
    fn test_geo_payload_name_falls_back_to_query_city() {
        let payload = json!([{"lat": 1.0, "lon": 2.0}]);
        let geo = parse_geo_payload(&payload, "Nowhereville").unwrap();
        assert_eq!(geo.resolved_name, "Nowhereville");
    }

    #[test]
    fn test_geo_payload_empty_list_is_not_found() {
        let err = parse_geo_payload(&json!([]), "x").unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(_)));
        assert_eq!(err.to_string(), "Location not found");
    }

    #[test]
    fn test_geo_payload_object_is_not_found() {
        // Provider error shape, e.g. {"cod": 401, "message": "..."}.
        let payload = json!({"cod": 401, "message": "Invalid API key"});
        let err = parse_geo_payload(&payload, "x").unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(_)));
    }

    #[test]
    fn test_geo_payload_null_first_element_is_not_found() {
        let err = parse_geo_payload(&json!([null]), "x").unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(_)));
    }

    #[test]
    fn test_geo_payload_malformed_entry_is_unexpected() {
        let payload = json!([{"lat": "not-a-number", "lon": 2.0}]);
        let err = parse_geo_payload(&payload, "x").unwrap_err();
        assert!(matches!(err, GatewayError::Unexpected(_)));
    }

    #[test]
    fn test_conditions_payload_parses() {
        let payload: ConditionsPayload = serde_json::from_value(json!({
            "main": {"temp": 15.2, "humidity": 70},
            "weather": [{"description": "clear sky"}],
        }))
        .unwrap();

        assert_eq!(payload.main.temp, 15.2);
        assert_eq!(payload.main.humidity, 70);
        assert_eq!(payload.weather[0].description, "clear sky");
    }
}
