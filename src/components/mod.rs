pub mod city_banner;
pub mod city_input;
pub mod conditions_card;
pub mod forecast_strip;
pub mod weather_view;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use city_banner::{CityBanner, CityBannerProps};
pub use city_input::{CityInput, CityInputProps};
pub use conditions_card::{ConditionsCard, ConditionsCardProps};
pub use forecast_strip::{ForecastStrip, ForecastStripProps};
pub use weather_view::{ERROR_ICON, WeatherView, WeatherViewProps};
