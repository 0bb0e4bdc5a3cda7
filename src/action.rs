//! Actions - every input into the store

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::CityReport;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Intent: fetch the city currently in the input (startup, refresh)
    WeatherFetch,

    /// Result: both endpoints answered for fetch cycle `.0`
    WeatherDidLoad(u64, CityReport),

    /// Result: fetch cycle `.0` failed with the given message
    WeatherDidError(u64, String),

    // ===== City category =====
    /// City input text changed
    CityInputChange(String),

    /// Submit a city name (blank input is ignored)
    CitySubmit(String),

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Exit the application
    Quit,
}
