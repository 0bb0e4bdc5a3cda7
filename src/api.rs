//! Weather backend client
//!
//! The backend exposes two read endpoints per city:
//! `GET {base}/weather/{city}` and `GET {base}/forecast/{city}`.

use serde::de::DeserializeOwned;

use crate::state::{CityReport, ForecastList, WeatherSnapshot};

/// Fetch error type
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// The weather endpoint answered with a non-success status
    #[error("City not found!")]
    CityNotFound,
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for one backend deployment
#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, resource: &str, city: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            resource,
            urlencoding::encode(city)
        )
    }

    /// Fetch current weather and forecast for `city` concurrently.
    ///
    /// Both responses are awaited before anything is decoded, so callers get
    /// either a complete report or an error. Only the weather status decides
    /// whether the city exists; the forecast body is decoded as-is.
    pub async fn fetch_report(&self, city: &str) -> Result<CityReport, FetchError> {
        let weather_url = self.endpoint("weather", city);
        let forecast_url = self.endpoint("forecast", city);
        tracing::debug!(%city, %weather_url, %forecast_url, "fetching report");

        let (weather_response, forecast_response) = tokio::join!(
            self.http.get(&weather_url).send(),
            self.http.get(&forecast_url).send()
        );
        let weather_response = weather_response?;
        let forecast_response = forecast_response?;
        tracing::debug!(
            weather_status = %weather_response.status(),
            forecast_status = %forecast_response.status(),
            "backend responded"
        );

        if !weather_response.status().is_success() {
            tracing::warn!(%city, status = %weather_response.status(), "city not found");
            return Err(FetchError::CityNotFound);
        }

        let weather: WeatherSnapshot = decode(weather_response).await?;
        let forecast: ForecastList = decode(forecast_response).await?;

        Ok(CityReport { weather, forecast })
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "malformed response body");
        FetchError::Decode(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = WeatherClient::new("http://localhost:3001/api/");
        assert_eq!(client.base_url(), "http://localhost:3001/api");
    }

    #[test]
    fn test_endpoint_encodes_city() {
        let client = WeatherClient::new("http://localhost:3001/api");
        assert_eq!(
            client.endpoint("weather", "New York"),
            "http://localhost:3001/api/weather/New%20York"
        );
        assert_eq!(
            client.endpoint("forecast", "İzmir"),
            "http://localhost:3001/api/forecast/%C4%B0zmir"
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(FetchError::CityNotFound.to_string(), "City not found!");
    }
}
