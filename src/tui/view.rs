use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use crate::format::{Panel, Tone};

const ACCENT: Color = Color::Rgb(0x7d, 0xd3, 0xfc);
const BACKDROP: Color = Color::Rgb(0x0b, 0x10, 0x20);
const PAD_X: u16 = 2;
const PAD_Y: u16 = 1;

pub(crate) fn draw_panel(frame: &mut Frame<'_>, panel: &Panel) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BACKDROP)), area);

    let lines: Vec<Line> = panel
        .lines
        .iter()
        .map(|line| Line::from(Span::styled(line.text.clone(), tone_style(line.tone))))
        .collect();
    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .padding(Padding::new(PAD_X, PAD_X, PAD_Y, PAD_Y)),
    );
    frame.render_widget(widget, centered_box(panel, area));
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Title => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        Tone::Separator => Style::default().fg(ACCENT),
        Tone::Plain => Style::default(),
        Tone::Success => Style::default().fg(Color::Green),
        Tone::Warning => Style::default().fg(Color::Yellow),
        Tone::Hint => Style::default().add_modifier(Modifier::DIM),
    }
}

fn centered_box(panel: &Panel, area: Rect) -> Rect {
    let width = (panel.width() as u16 + 2 * PAD_X + 2).min(area.width);
    let height = (panel.height() as u16 + 2 * PAD_Y + 2).min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}
