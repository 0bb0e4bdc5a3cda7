//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherFetch => {
            let city = state.city.clone();
            begin_fetch(state, &city)
        }

        Action::WeatherDidLoad(seq, report) => {
            if seq != state.request_seq {
                return DispatchResult::unchanged();
            }
            state.report = Some(report);
            state.error = None;
            state.loading = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError(seq, msg) => {
            if seq != state.request_seq {
                return DispatchResult::unchanged();
            }
            state.report = None;
            state.error = Some(msg);
            state.loading = false;
            DispatchResult::changed()
        }

        // ===== City actions =====
        Action::CityInputChange(city) => {
            if city == state.city {
                return DispatchResult::unchanged();
            }
            state.city = city;
            DispatchResult::changed()
        }

        Action::CitySubmit(city) => begin_fetch(state, &city),

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Start a fetch cycle. The previous report stays on screen until the
/// cycle completes.
fn begin_fetch(state: &mut AppState, city: &str) -> DispatchResult<Effect> {
    let city = city.trim();
    if city.is_empty() {
        return DispatchResult::unchanged();
    }

    state.request_seq = state.request_seq.wrapping_add(1);
    state.loading = true;
    state.error = None;
    DispatchResult::changed_with(Effect::FetchReport {
        seq: state.request_seq,
        city: city.to_string(),
    })
}
