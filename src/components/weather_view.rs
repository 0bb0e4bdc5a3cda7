use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::conditions_card::CARD_HEIGHT;
use super::forecast_strip::STRIP_HEIGHT;
use super::{
    CityBanner, CityBannerProps, CityInput, CityInputProps, Component, ConditionsCard,
    ConditionsCardProps, ForecastStrip, ForecastStripProps,
};
use crate::action::Action;
use crate::state::{AppState, CityReport};

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

const TITLE: &str = "\u{1f324} Weather View";
const SUBTITLE: &str = "Current conditions for your city";
const ATTRIBUTION: &str = "Weather data provided by OpenWeatherMap";

/// Props for WeatherView - read-only view of state
pub struct WeatherViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole screen: header, city input, error line, report, footer
#[derive(Default)]
pub struct WeatherView {
    city_input: CityInput,
}

impl WeatherView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherView {
    type Props<'a> = WeatherViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::Quit];
            }
            KeyCode::F(5) => return vec![Action::WeatherFetch],
            _ => {}
        }

        self.city_input
            .handle_event(
                event,
                CityInputProps {
                    value: &props.state.city,
                    loading: props.state.loading,
                    is_focused: true,
                    on_change: Action::CityInputChange,
                    on_submit: Action::CitySubmit,
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherViewProps<'_>) {
        let state = props.state;
        let error_height = if state.error.is_some() { 1 } else { 0 };
        let chunks = Layout::vertical([
            Constraint::Length(1),            // Header
            Constraint::Length(3),            // City input
            Constraint::Length(error_height), // Error line
            Constraint::Min(1),               // Report
            Constraint::Length(1),            // Attribution
            Constraint::Length(1),            // Help bar
        ])
        .split(area);

        let header = Line::from(vec![
            Span::styled(TITLE, Style::default().fg(Color::White).bold()),
            Span::styled(format!("  {SUBTITLE}"), Style::default().fg(Color::DarkGray)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(header), chunks[0]);

        self.city_input.render(
            frame,
            chunks[1],
            CityInputProps {
                value: &state.city,
                loading: state.loading,
                is_focused: props.is_focused,
                on_change: Action::CityInputChange,
                on_submit: Action::CitySubmit,
            },
        );

        if let Some(error) = &state.error {
            render_error(frame, chunks[2], error);
        }

        match &state.report {
            Some(report) => render_report(frame, chunks[3], report),
            None if state.loading => render_placeholder(
                frame,
                chunks[3],
                Line::from(Span::styled(
                    format!("Loading weather for {}...", state.city.trim()),
                    Style::default().fg(Color::DarkGray),
                )),
            ),
            None if state.error.is_none() => render_placeholder(
                frame,
                chunks[3],
                Line::from(vec![
                    Span::styled("Type a city and press ", Style::default().fg(Color::DarkGray)),
                    Span::styled("enter", Style::default().fg(Color::Cyan).bold()),
                ]),
            ),
            None => {}
        }

        let footer = Line::from(Span::styled(
            ATTRIBUTION,
            Style::default().fg(Color::DarkGray),
        ))
        .centered();
        frame.render_widget(Paragraph::new(footer), chunks[4]);

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[5],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("F5", "refresh"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn render_report(frame: &mut Frame, area: Rect, report: &CityReport) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),             // Banner
        Constraint::Length(CARD_HEIGHT), // Current conditions
        Constraint::Length(STRIP_HEIGHT), // Forecast
    ])
    .split(area);

    let mut banner = CityBanner;
    banner.render(
        frame,
        chunks[0],
        CityBannerProps {
            weather: &report.weather,
        },
    );

    let mut card = ConditionsCard;
    card.render(
        frame,
        chunks[1],
        ConditionsCardProps {
            weather: &report.weather,
        },
    );

    let mut strip = ForecastStrip;
    strip.render(
        frame,
        chunks[2],
        ForecastStripProps {
            entries: &report.forecast.forecasts,
        },
    );
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let line = Line::from(vec![
        Span::raw(format!("{} ", ERROR_ICON)),
        Span::styled(
            error.to_string(),
            Style::default().fg(Color::Rgb(200, 100, 100)).bold(),
        ),
    ])
    .centered();
    frame.render_widget(Paragraph::new(line), area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, message: Line<'_>) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    frame.render_widget(Paragraph::new(message.centered()), chunks[0]);
}
