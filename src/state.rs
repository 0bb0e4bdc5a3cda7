//! Application state - single source of truth

use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// City fetched on startup when nothing else is configured
pub const DEFAULT_CITY: &str = "Istanbul";

/// Current conditions as served by `GET {base}/weather/{city}`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub city: String,
    /// ISO country code, e.g. "TR"
    pub country: String,
    pub description: String,
    /// OpenWeatherMap icon code, e.g. "01d"
    pub icon: String,
    pub temperature: f64,
    pub feels_like: f64,
    /// Relative humidity, 0-100. Averaged forecasts may be fractional.
    pub humidity: f64,
    /// m/s
    pub wind_speed: f64,
    /// km
    pub visibility: f64,
    pub sunrise: String,
    pub sunset: String,
}

/// One forecast day
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastEntry {
    pub date: String,
    pub icon: String,
    pub description: String,
    pub temperature: f64,
    pub humidity: f64,
}

/// Forecast as served by `GET {base}/forecast/{city}`, in display order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastList {
    pub forecasts: Vec<ForecastEntry>,
}

/// Everything one successful fetch cycle produced.
///
/// Weather and forecast travel together so the view can never pair a new
/// snapshot with an old forecast.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CityReport {
    pub weather: WeatherSnapshot,
    pub forecast: ForecastList,
}

/// Temperature color band, lower band inclusive at each threshold
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TempBand {
    /// t <= 0
    Freezing,
    /// 0 < t <= 10
    Cold,
    /// 10 < t <= 20
    Mild,
    /// 20 < t <= 30
    Warm,
    /// t > 30
    Hot,
}

impl TempBand {
    pub fn from_celsius(celsius: f64) -> Self {
        match celsius {
            t if t <= 0.0 => TempBand::Freezing,
            t if t <= 10.0 => TempBand::Cold,
            t if t <= 20.0 => TempBand::Mild,
            t if t <= 30.0 => TempBand::Warm,
            _ => TempBand::Hot,
        }
    }

    pub fn color(self) -> Color {
        match self {
            TempBand::Freezing => Color::Rgb(37, 99, 235), // blue-600
            TempBand::Cold => Color::Rgb(96, 165, 250),    // blue-400
            TempBand::Mild => Color::Rgb(34, 197, 94),     // green-500
            TempBand::Warm => Color::Rgb(249, 115, 22),    // orange-500
            TempBand::Hot => Color::Rgb(239, 68, 68),      // red-500
        }
    }
}

/// Format a temperature the way the backend sent it: `22°C`, `-3.5°C`
pub fn format_celsius(celsius: f64) -> String {
    format!("{}°C", celsius)
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// City input text
    #[debug(section = "Search", label = "City")]
    pub city: String,

    /// A fetch cycle is in flight (previous report stays visible)
    #[debug(section = "Search", label = "Loading")]
    pub loading: bool,

    /// Last fetch error; `None` once a cycle starts or succeeds
    #[debug(section = "Weather", label = "Error", debug_fmt)]
    pub error: Option<String>,

    /// Weather + forecast from the last successful cycle
    #[debug(section = "Weather", label = "Report", debug_fmt)]
    pub report: Option<CityReport>,

    /// Id of the most recently started fetch cycle
    #[debug(skip)]
    pub request_seq: u64,
}

impl AppState {
    /// Create state with the given city in the input
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            loading: false,
            error: None,
            report: None,
            request_seq: 0,
        }
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.report.as_ref().map(|r| &r.weather)
    }

    pub fn forecast(&self) -> Option<&ForecastList> {
        self.report.as_ref().map(|r| &r.forecast)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_CITY)
    }
}
