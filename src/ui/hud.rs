use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::renderer::power_up_color;
use crate::snapshot::Snapshot;

const HUD_MARGIN_X: u16 = 1;
const EFFECT_BAR_WIDTH: usize = 10;
const SEPARATOR: &str = " │ ";

/// Renders the two-line score panel and returns the play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) -> Rect {
    let [play_area, score_area, status_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(snapshot))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        inset_horizontal(score_area, HUD_MARGIN_X),
    );
    frame.render_widget(
        Paragraph::new(status_line(snapshot))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        inset_horizontal(status_area, HUD_MARGIN_X),
    );

    play_area
}

fn score_line(snapshot: &Snapshot) -> Line<'static> {
    let value = Style::default().fg(Color::White);
    let high_style = if snapshot.new_high_score {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    Line::from(vec![
        Span::raw("Length: "),
        Span::styled(snapshot.length().to_string(), value),
        Span::raw(SEPARATOR),
        Span::raw("Score: "),
        Span::styled(snapshot.score.to_string(), value),
        Span::raw(SEPARATOR),
        Span::raw("Hi: "),
        Span::styled(snapshot.high_score.to_string(), high_style),
    ])
}

fn status_line(snapshot: &Snapshot) -> Line<'static> {
    let mut spans = Vec::new();

    if let Some((kind, fraction)) = snapshot.active_effect {
        spans.push(Span::styled(
            format!("{} ", kind.label()),
            Style::default().fg(power_up_color(kind)),
        ));
        spans.push(Span::styled(
            effect_bar(fraction),
            Style::default().fg(power_up_color(kind)),
        ));
        spans.push(Span::raw(SEPARATOR));
    }

    spans.push(Span::raw(format!("{}ms", snapshot.tick_interval_ms)));
    spans.push(Span::raw(SEPARATOR));
    spans.push(Span::raw(format!(
        "{}x{}",
        snapshot.grid_size, snapshot.grid_size
    )));

    Line::from(spans)
}

/// Fixed-width bar showing the share of the effect left.
fn effect_bar(fraction: f32) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * EFFECT_BAR_WIDTH as f32).ceil() as usize;
    let mut bar = "▮".repeat(filled);
    bar.push_str(&"▯".repeat(EFFECT_BAR_WIDTH - filled));
    bar
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}
