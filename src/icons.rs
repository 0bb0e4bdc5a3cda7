//! Weather icons keyed by OpenWeatherMap icon codes
//!
//! Codes look like `01d` / `10n`: two digits for the condition and a
//! day/night suffix. The terminal can't show the PNGs, so each condition
//! also gets an emoji glyph.

const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";

/// Image URL for an icon code
pub fn icon_url(code: &str) -> String {
    format!("{}/{}@2x.png", ICON_URL_BASE, code)
}

/// Weather condition categories for display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    ClearNight,
    PartlyCloudy,
    Cloudy,
    Showers,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    Unknown,
}

impl WeatherCondition {
    pub fn from_icon(code: &str) -> Self {
        let night = code.ends_with('n');
        match code.get(..2) {
            Some("01") if night => WeatherCondition::ClearNight,
            Some("01") => WeatherCondition::ClearSky,
            Some("02") => WeatherCondition::PartlyCloudy,
            Some("03") | Some("04") => WeatherCondition::Cloudy,
            Some("09") => WeatherCondition::Showers,
            Some("10") => WeatherCondition::Rain,
            Some("11") => WeatherCondition::Thunderstorm,
            Some("13") => WeatherCondition::Snow,
            Some("50") => WeatherCondition::Mist,
            _ => WeatherCondition::Unknown,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            WeatherCondition::ClearSky => "\u{2600}\u{fe0f}",
            WeatherCondition::ClearNight => "\u{1f319}",
            WeatherCondition::PartlyCloudy => "\u{26c5}",
            WeatherCondition::Cloudy | WeatherCondition::Unknown => "\u{2601}\u{fe0f}",
            WeatherCondition::Showers => "\u{1f327}\u{fe0f}",
            WeatherCondition::Rain => "\u{1f326}\u{fe0f}",
            WeatherCondition::Thunderstorm => "\u{26c8}\u{fe0f}",
            WeatherCondition::Snow => "\u{2744}\u{fe0f}",
            WeatherCondition::Mist => "\u{1f32b}\u{fe0f}",
        }
    }
}

/// Emoji for the given icon code.
pub fn icon_emoji(code: &str) -> &'static str {
    WeatherCondition::from_icon(code).emoji()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_url_template() {
        assert_eq!(
            icon_url("10d"),
            "https://openweathermap.org/img/wn/10d@2x.png"
        );
    }

    #[test]
    fn test_condition_from_icon() {
        assert_eq!(WeatherCondition::from_icon("01d"), WeatherCondition::ClearSky);
        assert_eq!(
            WeatherCondition::from_icon("01n"),
            WeatherCondition::ClearNight
        );
        assert_eq!(
            WeatherCondition::from_icon("02n"),
            WeatherCondition::PartlyCloudy
        );
        assert_eq!(WeatherCondition::from_icon("04d"), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_icon("09d"), WeatherCondition::Showers);
        assert_eq!(WeatherCondition::from_icon("10n"), WeatherCondition::Rain);
        assert_eq!(
            WeatherCondition::from_icon("11d"),
            WeatherCondition::Thunderstorm
        );
        assert_eq!(WeatherCondition::from_icon("13d"), WeatherCondition::Snow);
        assert_eq!(WeatherCondition::from_icon("50d"), WeatherCondition::Mist);
        assert_eq!(WeatherCondition::from_icon(""), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_icon("ö"), WeatherCondition::Unknown);
    }

    #[test]
    fn test_icon_emoji_never_empty() {
        for code in ["01d", "03n", "99x", ""] {
            assert!(!icon_emoji(code).is_empty());
        }
    }
}
