use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::icons::icon_emoji;
use crate::state::{TempBand, WeatherSnapshot, format_celsius};

/// Rows the card needs: three content lines plus borders.
pub const CARD_HEIGHT: u16 = 5;

/// Current conditions: temperature, feels-like and the detail readings
pub struct ConditionsCard;

pub struct ConditionsCardProps<'a> {
    pub weather: &'a WeatherSnapshot,
}

fn label(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::DarkGray))
}

fn value(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::White).bold())
}

impl Component<Action> for ConditionsCard {
    type Props<'a> = ConditionsCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let w = props.weather;
        let band = TempBand::from_celsius(w.temperature);

        let lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", icon_emoji(&w.icon))),
                Span::styled(
                    format_celsius(w.temperature),
                    Style::default()
                        .fg(band.color())
                        .add_modifier(Modifier::BOLD),
                ),
                label("   Feels like "),
                value(format_celsius(w.feels_like)),
            ]),
            Line::from(vec![
                label("Humidity "),
                value(format!("{}%", w.humidity)),
                label("   Wind "),
                value(format!("{} m/s", w.wind_speed)),
                label("   Visibility "),
                value(format!("{} km", w.visibility)),
            ]),
            Line::from(vec![
                label("Sunrise "),
                value(w.sunrise.clone()),
                label("   Sunset "),
                value(w.sunset.clone()),
            ]),
        ];

        let block = Block::bordered()
            .title(" Now ")
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}
