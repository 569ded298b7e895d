//! Search detail pane: the key, the live bounds and the binary-search probe history

use crate::model::sequence::{format_value, format_values};
use crate::snapshot::{SearchFrame, SearchStatus};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the search detail pane.
///
/// `key` is the key the session will search for next; once a frame exists its own key
/// is shown instead.
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    search: Option<&SearchFrame>,
    key: Option<f64>,
) {
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let strong = Style::default()
        .fg(DEFAULT_THEME.fg)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    let key_text = match (search, key) {
        (Some(sf), _) => format_value(sf.key),
        (None, Some(k)) => format_value(k),
        (None, None) => "(none, press k)".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("Key: ", label),
        Span::styled(key_text, strong),
    ]));

    if let Some(sf) = search {
        if let Some((start, end)) = sf.bounds {
            lines.push(Line::from(vec![
                Span::styled("Range: ", label),
                Span::styled(format!("[{}..{}]", start, end), strong),
            ]));
        }

        let (status, color) = match sf.status {
            SearchStatus::Probing => ("searching".to_string(), DEFAULT_THEME.secondary),
            SearchStatus::Found(index) => (format!("found at index {}", index), DEFAULT_THEME.success),
            SearchStatus::NotFound => ("not found".to_string(), DEFAULT_THEME.error),
        };
        lines.push(Line::from(vec![
            Span::styled("Status: ", label),
            Span::styled(status, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]));

        if !sf.history.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Probes:", label)));
        }
        for (n, probe) in sf.history.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{:>2}. ", n + 1), label),
                Span::styled(
                    format!("[{}..{}] mid {}", probe.start, probe.end, probe.mid),
                    strong,
                ),
                Span::styled(
                    format!(" = {} ", format_value(probe.value_at_mid)),
                    Style::default().fg(DEFAULT_THEME.compare),
                ),
                Span::styled(probe.comparison.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("      {}", format_values(&probe.subrange)),
                label,
            )));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
    );
    frame.render_widget(paragraph, area);
}
