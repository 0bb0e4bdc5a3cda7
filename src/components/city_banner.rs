use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::{TempBand, WeatherSnapshot};

/// FIGlet city name over a "city, country · description" line
pub struct CityBanner;

pub struct CityBannerProps<'a> {
    pub weather: &'a WeatherSnapshot,
}

/// Rows besides the FIGlet art: the subtitle line.
pub const BANNER_OVERHEAD: u16 = 1;

fn gradient_colors(band: TempBand) -> (ArtColor, ArtColor) {
    match band {
        TempBand::Freezing => (
            ArtColor::rgb(37, 99, 235),   // Deep blue
            ArtColor::rgb(147, 197, 253), // Ice
        ),
        TempBand::Cold => (
            ArtColor::rgb(96, 165, 250),  // Sky blue
            ArtColor::rgb(165, 243, 252), // Cyan
        ),
        TempBand::Mild => (
            ArtColor::rgb(34, 197, 94),   // Green
            ArtColor::rgb(253, 224, 71),  // Yellow
        ),
        TempBand::Warm => (
            ArtColor::rgb(249, 115, 22),  // Orange
            ArtColor::rgb(251, 191, 36),  // Amber
        ),
        TempBand::Hot => (
            ArtColor::rgb(239, 68, 68),   // Red
            ArtColor::rgb(249, 115, 22),  // Orange
        ),
    }
}

impl Component<Action> for CityBanner {
    type Props<'a> = CityBannerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),                  // FIGlet city name
            Constraint::Length(BANNER_OVERHEAD), // Subtitle
        ])
        .split(area);

        let weather = props.weather;
        let (start, end) = gradient_colors(TempBand::from_celsius(weather.temperature));
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(Fill::Linear(LinearGradient::horizontal(start, end)));
        frame.render_widget(ArtBox::new(&renderer, &weather.city), chunks[0]);

        let subtitle = Line::from(vec![
            Span::styled(
                format!("{}, {}", weather.city, weather.country),
                Style::default().fg(Color::White),
            ),
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                weather.description.clone(),
                Style::default().fg(Color::Gray),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(subtitle), chunks[1]);
    }
}
