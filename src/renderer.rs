use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::direction::Direction;
use crate::game::GameStatus;
use crate::power_up::PowerUpKind;
use crate::snake::Position;
use crate::snapshot::Snapshot;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Terminal columns per grid cell; two keeps cells roughly square.
const CELL_WIDTH: u16 = 2;

const GLYPH_APPLE: &str = "()";
const GLYPH_SNAKE_BODY: &str = "██";
const GLYPH_SNAKE_HEAD_UP: &str = "▲▲";
const GLYPH_SNAKE_HEAD_DOWN: &str = "▼▼";
const GLYPH_SNAKE_HEAD_LEFT: &str = "◀█";
const GLYPH_SNAKE_HEAD_RIGHT: &str = "█▶";

/// Renders the full game frame from one snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot);

    let border_color = if snapshot.effects.wall_pass {
        Color::Cyan
    } else {
        Color::White
    };
    let block = Block::bordered().border_style(Style::new().fg(border_color));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_apple(frame, inner, snapshot);
    render_power_up(frame, inner, snapshot);
    render_snake(frame, inner, snapshot);

    match snapshot.status {
        GameStatus::Ready => render_start_menu(frame, play_area, snapshot.high_score),
        GameStatus::GameOver => render_game_over_menu(frame, play_area, snapshot),
        GameStatus::Running => {}
    }
}

fn render_apple(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot) {
    let Some(apple) = snapshot.apple else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, snapshot.grid_size, apple) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_APPLE, Style::new().fg(Color::Red));
}

fn render_power_up(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot) {
    let Some(power_up) = snapshot.power_up else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, snapshot.grid_size, power_up.position) else {
        return;
    };

    let mut style = Style::new().fg(power_up_color(power_up.kind));
    // Blink once the pickup is about to vanish.
    if power_up.remaining_fraction < 0.25 {
        style = style.add_modifier(Modifier::SLOW_BLINK);
    }
    frame
        .buffer_mut()
        .set_string(x, y, power_up_glyph(power_up.kind), style);
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot) {
    let body_color = if snapshot.effects.reverse_control {
        Color::Magenta
    } else {
        Color::Green
    };

    let buffer = frame.buffer_mut();
    // Tail first so the head wins when it overlaps the body on the fatal tick.
    for (index, segment) in snapshot.snake.iter().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid_size, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                head_glyph(snapshot.direction),
                Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(body_color));
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

#[must_use]
pub fn power_up_glyph(kind: PowerUpKind) -> &'static str {
    match kind {
        PowerUpKind::SpeedUp => ">>",
        PowerUpKind::SpeedDown => "<<",
        PowerUpKind::WallPass => "[]",
        PowerUpKind::ReverseControl => "<>",
    }
}

#[must_use]
pub fn power_up_color(kind: PowerUpKind) -> Color {
    match kind {
        PowerUpKind::SpeedUp => Color::Yellow,
        PowerUpKind::SpeedDown => Color::Blue,
        PowerUpKind::WallPass => Color::Cyan,
        PowerUpKind::ReverseControl => Color::Magenta,
    }
}

/// Maps a grid cell (row `x`, column `y`) to the terminal cell of its left half.
fn logical_to_terminal(inner: Rect, grid_size: u16, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(grid_size) {
        return None;
    }

    let row = u16::try_from(position.x).ok()?;
    let column = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(column.saturating_mul(CELL_WIDTH));
    let y = inner.y.saturating_add(row);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
