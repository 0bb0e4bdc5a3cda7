use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::icons::icon_emoji;
use crate::state::{ForecastEntry, TempBand, format_celsius};

/// Rows the strip needs: five lines per card plus borders.
pub const STRIP_HEIGHT: u16 = 7;

/// One card per forecast entry, left to right in the order received
pub struct ForecastStrip;

pub struct ForecastStripProps<'a> {
    pub entries: &'a [ForecastEntry],
}

fn entry_lines(entry: &ForecastEntry) -> Vec<Line<'static>> {
    let band = TempBand::from_celsius(entry.temperature);
    vec![
        Line::from(Span::styled(
            entry.date.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(icon_emoji(&entry.icon)),
        Line::from(Span::styled(
            format_celsius(entry.temperature),
            Style::default()
                .fg(band.color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            entry.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("Humidity {}%", entry.humidity),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

impl Component<Action> for ForecastStrip {
    type Props<'a> = ForecastStripProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::bordered()
            .title(" 5-Day Forecast ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if props.entries.is_empty() {
            let empty = Line::from(Span::styled(
                "No forecast available",
                Style::default().fg(Color::DarkGray),
            ))
            .centered();
            frame.render_widget(Paragraph::new(empty), inner);
            return;
        }

        let count = props.entries.len() as u32;
        let columns = Layout::horizontal(
            props
                .entries
                .iter()
                .map(|_| Constraint::Ratio(1, count)),
        )
        .split(inner);

        for (entry, column) in props.entries.iter().zip(columns.iter()) {
            frame.render_widget(
                Paragraph::new(entry_lines(entry)).alignment(Alignment::Center),
                *column,
            );
        }
    }
}
