//! Scene layout drawn with ratatui widgets.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TuiColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use reverse_brainrot_rendering::{
    Color, FocusReadout, Scene, BADGE_TEXT, XP_BAR_FILL, XP_BAR_TRACK,
};

const HELP_LINE: &str = "c claim · q quit";

/// Palette resolved once when the backend starts.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) foreground: Color,
}

pub(crate) fn to_tui_color(color: Color) -> TuiColor {
    TuiColor::Rgb(color.red, color.green, color.blue)
}

pub(crate) fn draw_scene(frame: &mut Frame, palette: Palette, title: &str, scene: &Scene) {
    let base = Style::default()
        .fg(to_tui_color(palette.foreground))
        .bg(to_tui_color(palette.background));
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(title.to_owned())
        .style(base);
    let area = outer.inner(frame.size());
    frame.render_widget(outer, frame.size());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_badge(frame, rows[0], scene);
    draw_pet(frame, rows[1], scene);
    frame.render_widget(
        Paragraph::new(scene.status_line.as_str()).alignment(Alignment::Center),
        rows[2],
    );
    draw_focus(frame, rows[3], scene.focus);
    draw_xp_bar(frame, rows[4], scene);
    draw_claim_button(frame, rows[5], scene);
    frame.render_widget(
        Paragraph::new(HELP_LINE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(TuiColor::DarkGray)),
        rows[6],
    );
}

fn draw_badge(frame: &mut Frame, area: Rect, scene: &Scene) {
    let label = Span::styled(
        format!(" {} ", scene.badge.name),
        Style::default()
            .fg(to_tui_color(BADGE_TEXT))
            .bg(to_tui_color(scene.badge.color))
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(
        Paragraph::new(Line::from(label)).alignment(Alignment::Right),
        area,
    );
}

fn draw_pet(frame: &mut Frame, area: Rect, scene: &Scene) {
    let padding = area.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::default(); usize::from(padding)];
    lines.push(Line::from(scene.pet_glyph));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_focus(frame: &mut Frame, area: Rect, focus: FocusReadout) {
    let color = match focus {
        FocusReadout::Focused => XP_BAR_FILL,
        FocusReadout::Unfocused { .. } => Color::from_rgb_u8(0xe0, 0x5a, 0x47),
    };
    frame.render_widget(
        Paragraph::new(focus.label())
            .alignment(Alignment::Center)
            .style(Style::default().fg(to_tui_color(color))),
        area,
    );
}

fn draw_xp_bar(frame: &mut Frame, area: Rect, scene: &Scene) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("XP"))
        .gauge_style(
            Style::default()
                .fg(to_tui_color(XP_BAR_FILL))
                .bg(to_tui_color(XP_BAR_TRACK)),
        )
        .ratio(scene.xp_bar.ratio())
        .label(scene.xp_bar.label());
    frame.render_widget(gauge, area);
}

fn draw_claim_button(frame: &mut Frame, area: Rect, scene: &Scene) {
    let style = if scene.claim_button.enabled {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TuiColor::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(scene.claim_button.label.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style)),
        area,
    );
}
