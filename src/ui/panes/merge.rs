//! Merge sort replay pane
//!
//! Left: the step under the cursor, with its segment and (for merges) the two halves and
//! the merged result. Right: the whole log, one line per step, with the cursor row
//! highlighted and kept in view.

use crate::model::sequence::format_values;
use crate::snapshot::{MergeStepKind, StepLog};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn kind_label(kind: MergeStepKind) -> (&'static str, Color) {
    match kind {
        MergeStepKind::Initial => ("INIT", DEFAULT_THEME.primary),
        MergeStepKind::Split => ("SPLIT", DEFAULT_THEME.secondary),
        MergeStepKind::Merged => ("MERGE", DEFAULT_THEME.success),
    }
}

/// Render the merge pane. `log` is `None` until the user starts the replay.
pub fn render_merge_pane(frame: &mut Frame, area: Rect, log: Option<&StepLog>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let strong = Style::default()
        .fg(DEFAULT_THEME.fg)
        .add_modifier(Modifier::BOLD);

    let Some(log) = log else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Press Enter to record the merge sort steps",
            label,
        )))
        .block(
            Block::default()
                .title(" Merge sort ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        );
        frame.render_widget(hint, area);
        return;
    };

    // Current step
    let mut lines = Vec::new();
    if let Some(step) = log.current() {
        let (tag, color) = kind_label(step.kind);
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", tag),
                Style::default()
                    .bg(color)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(step.action.clone(), strong),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Range:   ", label),
            Span::styled(format!("[{}..{}]", step.range.0, step.range.1), strong),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Segment: ", label),
            Span::styled(format_values(&step.segment), strong),
        ]));
        if !step.left.is_empty() || !step.right.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Left:    ", label),
                Span::styled(
                    format_values(&step.left),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Right:   ", label),
                Span::styled(
                    format_values(&step.right),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
            ]));
        }
        if step.kind == MergeStepKind::Merged {
            lines.push(Line::from(vec![
                Span::styled("Merged:  ", label),
                Span::styled(
                    format_values(&step.merged),
                    Style::default()
                        .fg(DEFAULT_THEME.success)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
    }

    let current = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" Step {}/{} ", log.position() + 1, log.len()))
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD),
            ),
    );
    frame.render_widget(current, columns[0]);

    // Step list, scrolled so the cursor stays visible
    let visible = columns[1].height.saturating_sub(2) as usize;
    let scroll = if visible == 0 {
        0
    } else {
        (log.position() + 1).saturating_sub(visible)
    };

    let lines: Vec<Line> = log
        .steps()
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible.max(1))
        .map(|(index, step)| {
            let (tag, color) = kind_label(step.kind);
            let selected = index == log.position();
            let bg = if selected {
                DEFAULT_THEME.current_line_bg
            } else {
                Color::Reset
            };
            Line::from(vec![
                Span::styled(
                    if selected { "▶ " } else { "  " },
                    Style::default().fg(DEFAULT_THEME.border_focused).bg(bg),
                ),
                Span::styled(format!("{:<6}", tag), Style::default().fg(color).bg(bg)),
                Span::styled(
                    step.action.clone(),
                    Style::default().fg(DEFAULT_THEME.fg).bg(bg),
                ),
            ])
        })
        .collect();

    let list = Paragraph::new(lines).block(
        Block::default()
            .title(" Log ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
    );
    frame.render_widget(list, columns[1]);
}
