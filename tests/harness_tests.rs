//! Fetch cycle tests using EffectStoreTestHarness
//!
//! The harness plays the runtime: actions go in, effects come out, and the
//! test completes effects by feeding result actions back in.

use tui_dispatch::testing::*;
use weather_view::{
    action::Action,
    api::WeatherClient,
    components::{Component, WeatherView, WeatherViewProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, CityReport, ForecastEntry, ForecastList, WeatherSnapshot},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn mock_report(city: &str, temperature: f64) -> CityReport {
    CityReport {
        weather: WeatherSnapshot {
            city: city.into(),
            country: "TR".into(),
            description: "clear sky".into(),
            icon: "01d".into(),
            temperature,
            feels_like: temperature - 1.0,
            humidity: 50.0,
            wind_speed: 2.0,
            visibility: 10.0,
            sunrise: "06:00".into(),
            sunset: "20:00".into(),
        },
        forecast: ForecastList {
            forecasts: vec![ForecastEntry {
                date: "Mon".into(),
                icon: "02d".into(),
                description: "few clouds".into(),
                temperature: temperature + 1.0,
                humidity: 45.0,
            }],
        },
    }
}

/// The single FetchReport effect a dispatch produced
fn take_fetch(effects: Vec<Effect>) -> (u64, String) {
    effects.effects_count(1);
    match effects.into_iter().next() {
        Some(Effect::FetchReport { seq, city }) => (seq, city),
        None => panic!("expected a fetch effect"),
    }
}

// ============================================================================
// Success / failure
// ============================================================================

#[test]
fn test_fetch_success_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::WeatherFetch);
    harness.assert_state(|s| s.loading);
    let (seq, city) = take_fetch(harness.drain_effects());
    assert_eq!(city, "Istanbul");

    harness.complete_action(Action::WeatherDidLoad(seq, mock_report("Istanbul", 22.0)));
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (1, 1));

    harness.assert_state(|s| !s.loading);
    harness.assert_state(|s| s.error.is_none());
    harness.assert_state(|s| s.report == Some(mock_report("Istanbul", 22.0)));
}

#[test]
fn test_fetch_error_flow_clears_report() {
    let mut harness = EffectStoreTestHarness::new(
        AppState {
            report: Some(mock_report("Istanbul", 22.0)),
            ..Default::default()
        },
        reducer,
    );

    harness.dispatch_collect(Action::CitySubmit("Zzzzz".into()));
    let (seq, _) = take_fetch(harness.drain_effects());

    harness.complete_action(Action::WeatherDidError(seq, "City not found!".into()));
    harness.process_emitted();

    harness.assert_state(|s| s.error.as_deref() == Some("City not found!"));
    harness.assert_state(|s| s.weather().is_none() && s.forecast().is_none());
    harness.assert_state(|s| !s.loading);
}

#[test]
fn test_resubmit_after_error_recovers() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::CitySubmit("Zzzzz".into()));
    let (seq, _) = take_fetch(harness.drain_effects());
    harness.complete_action(Action::WeatherDidError(seq, "City not found!".into()));
    harness.process_emitted();

    harness.dispatch_collect(Action::CitySubmit("Ankara".into()));
    harness.assert_state(|s| s.loading && s.error.is_none());
    let (seq, city) = take_fetch(harness.drain_effects());
    assert_eq!(city, "Ankara");

    harness.complete_action(Action::WeatherDidLoad(seq, mock_report("Ankara", 15.0)));
    harness.process_emitted();
    harness.assert_state(|s| s.weather().map(|w| w.city.as_str()) == Some("Ankara"));
}

// ============================================================================
// Overlapping cycles
// ============================================================================

#[test]
fn test_latest_submission_wins() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::CitySubmit("Ankara".into()));
    let (first, _) = take_fetch(harness.drain_effects());
    harness.dispatch_collect(Action::CitySubmit("Izmir".into()));
    let (second, _) = take_fetch(harness.drain_effects());
    assert!(second > first);

    // The newer cycle finishes first, then the stale one arrives
    harness.complete_action(Action::WeatherDidLoad(second, mock_report("Izmir", 25.0)));
    harness.complete_action(Action::WeatherDidLoad(first, mock_report("Ankara", 12.0)));
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 2);
    assert_eq!(changed, 1);
    harness.assert_state(|s| s.weather().map(|w| w.city.as_str()) == Some("Izmir"));
}

#[test]
fn test_stale_error_does_not_clobber_report() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::CitySubmit("Zzzzz".into()));
    let (first, _) = take_fetch(harness.drain_effects());
    harness.dispatch_collect(Action::CitySubmit("Ankara".into()));
    let (second, _) = take_fetch(harness.drain_effects());

    harness.complete_action(Action::WeatherDidLoad(second, mock_report("Ankara", 15.0)));
    harness.complete_action(Action::WeatherDidError(first, "City not found!".into()));
    harness.process_emitted();

    harness.assert_state(|s| s.error.is_none());
    harness.assert_state(|s| s.report.is_some());
}

// ============================================================================
// End to end against a mock backend
// ============================================================================

#[tokio::test]
async fn test_unknown_city_scenario() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/weather/Zzzzz"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/forecast/Zzzzz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "forecasts": [
                { "date": "Mon", "icon": "01d", "description": "clear sky", "temperature": 23, "humidity": 55 }
            ]
        })))
        .mount(&server)
        .await;
    let client = WeatherClient::new(format!("{}/api", server.uri()));

    let mut harness = EffectStoreTestHarness::new(
        AppState {
            report: Some(mock_report("Istanbul", 22.0)),
            ..Default::default()
        },
        reducer,
    );
    harness.dispatch_collect(Action::CitySubmit("Zzzzz".into()));
    let (seq, city) = take_fetch(harness.drain_effects());

    let result = match client.fetch_report(&city).await {
        Ok(report) => Action::WeatherDidLoad(seq, report),
        Err(e) => Action::WeatherDidError(seq, e.to_string()),
    };
    harness.complete_action(result);
    harness.process_emitted();

    harness.assert_state(|s| !s.loading && s.report.is_none());

    let mut view = WeatherView::new();
    let output = harness.render_plain(100, 30, |frame, area, state| {
        let props = WeatherViewProps {
            state,
            is_focused: true,
        };
        view.render(frame, area, props);
    });
    assert!(output.contains("City not found!"), "output:\n{output}");
    assert!(!output.contains("Feels like"), "no weather card:\n{output}");
    assert!(!output.contains("Day Forecast"), "no forecast:\n{output}");
}
