//! Weather View - current weather and forecast for a city

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_view::action::Action;
use weather_view::api::WeatherClient;
use weather_view::components::{Component, WeatherView, WeatherViewProps};
use weather_view::config::{Config, Overrides};
use weather_view::effect::Effect;
use weather_view::logging;
use weather_view::reducer::reducer;
use weather_view::state::AppState;

/// Current weather and a multi-day forecast for any city
#[derive(Parser, Debug)]
#[command(name = "weather-view")]
#[command(about = "Current weather and forecast for a city, in the terminal")]
struct Args {
    /// City fetched on startup (overrides `default_city` from the config file)
    #[arg(long, short)]
    city: Option<String>,

    /// Backend base URL, e.g. http://localhost:3001/api
    #[arg(long)]
    base_url: Option<String>,

    /// Config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum ViewComponentId {
    View,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum ViewContext {
    Main,
}

impl EventRoutingState<ViewComponentId, ViewContext> for AppState {
    fn focused(&self) -> Option<ViewComponentId> {
        Some(ViewComponentId::View)
    }

    fn modal(&self) -> Option<ViewComponentId> {
        None
    }

    fn binding_context(&self, _id: ViewComponentId) -> ViewContext {
        ViewContext::Main
    }

    fn default_context(&self) -> ViewContext {
        ViewContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        city,
        base_url,
        config,
        log_file,
        debug: debug_args,
    } = Args::parse();

    let config = Config::load(config.as_deref())
        .map_err(io::Error::other)?
        .apply(Overrides {
            base_url,
            city,
            log_file,
        });
    logging::init(config.log_file.as_deref())?;
    tracing::info!(base_url = %config.base_url, city = %config.default_city, "starting");

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let default_city = config.default_city.clone();
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(default_city))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);
    let client = WeatherClient::new(config.base_url);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, client, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct ViewUi {
    view: WeatherView,
}

impl ViewUi {
    fn new() -> Self {
        Self {
            view: WeatherView::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<ViewComponentId>,
    ) {
        event_ctx.set_component_area(ViewComponentId::View, area);

        let props = WeatherViewProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.view.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = WeatherViewProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.view.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    client: WeatherClient,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(ViewUi::new()));
    let mut bus: EventBus<AppState, Action, ViewComponentId, ViewContext> = EventBus::new();
    let keybindings: Keybindings<ViewContext> = Keybindings::new();

    let ui_view = Rc::clone(&ui);
    bus.register(ViewComponentId::View, move |event, state| {
        ui_view.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::WeatherFetch),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(&client, effect, ctx),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(client: &WeatherClient, effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::FetchReport { seq, city } => {
            let client = client.clone();
            // Same key: a newer cycle replaces one still in flight
            ctx.tasks().spawn("weather", async move {
                match client.fetch_report(&city).await {
                    Ok(report) => Action::WeatherDidLoad(seq, report),
                    Err(e) => {
                        tracing::warn!(%city, error = %e, "fetch failed");
                        Action::WeatherDidError(seq, e.to_string())
                    }
                }
            });
        }
    }
}
