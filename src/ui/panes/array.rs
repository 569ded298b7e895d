//! Array pane: one bar per slot, colored by the role the slot plays in the frame
//!
//! Used by the sort and search screens and by merge sort before its log is recorded.
//! Search frames additionally dim every slot outside the live `[start..end]` bounds.

use crate::model::sequence::format_value;
use crate::snapshot::Role;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the array pane
pub struct ArrayRenderData<'a> {
    pub title: &'a str,
    pub values: &'a [f64],
    /// Role of each slot, `None` for plain slots
    pub roles: Vec<Option<Role>>,
    /// Inclusive bounds of the live search range, if any
    pub bounds: Option<(usize, usize)>,
}

/// Render the array pane
pub fn render_array_pane(frame: &mut Frame, area: Rect, data: ArrayRenderData) {
    let block = Block::default()
        .title(format!(" {} ", data.title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    if data.values.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let bars: Vec<Bar> = data
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let color = slot_color(index, data.roles.get(index).copied().flatten(), data.bounds);
            Bar::default()
                .value(value.max(0.0).round() as u64)
                .text_value(format_value(*value))
                .label(Line::from(index.to_string()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    // Fit the bars to the pane: borders take 2 columns, each gap 1
    let count = data.values.len() as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width.saturating_sub(count.saturating_sub(1)) / count.max(1)).clamp(3, 9);

    let max = data
        .values
        .iter()
        .copied()
        .fold(1.0_f64, f64::max)
        .round() as u64;

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(max);

    frame.render_widget(chart, area);
}

fn slot_color(index: usize, role: Option<Role>, bounds: Option<(usize, usize)>) -> Color {
    if let Some(role) = role {
        return DEFAULT_THEME.role_color(role);
    }
    match bounds {
        Some((start, end)) if index < start || index > end => DEFAULT_THEME.excluded,
        _ => DEFAULT_THEME.bar,
    }
}
