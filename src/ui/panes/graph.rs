//! Graph pane rendering: adjacency list plus the traversal's frontier state
//!
//! The top half lists every node with its successors, colored by the node's status in
//! the latest traversal frame (on the path, current, visited, waiting in the frontier).
//! The bottom half shows the frontier itself, the last frontier action, the visited
//! order and the reconstructed path once the target is found.

use crate::algorithms::traversal::Discipline;
use crate::model::{Graph, NodeId};
use crate::snapshot::TraversalFrame;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the graph pane
pub struct GraphRenderData<'a> {
    pub graph: &'a Graph,
    pub frame: Option<&'a TraversalFrame>,
    pub discipline: Discipline,
    pub start: Option<NodeId>,
    pub target: Option<NodeId>,
}

fn node_color(node: NodeId, frame: Option<&TraversalFrame>) -> Color {
    let Some(frame) = frame else {
        return DEFAULT_THEME.fg;
    };
    if frame.path.contains(&node) {
        DEFAULT_THEME.success
    } else if frame.current == Some(node) {
        DEFAULT_THEME.compare
    } else if frame.visited.contains(&node) {
        DEFAULT_THEME.visited
    } else if frame.frontier.contains(&node) {
        DEFAULT_THEME.frontier
    } else {
        DEFAULT_THEME.fg
    }
}

fn node_span(node: NodeId, frame: Option<&TraversalFrame>) -> Span<'static> {
    Span::styled(
        node.to_string(),
        Style::default()
            .fg(node_color(node, frame))
            .add_modifier(Modifier::BOLD),
    )
}

fn node_list(nodes: &[NodeId], separator: &'static str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(separator, Style::default().fg(DEFAULT_THEME.comment)));
        }
        spans.push(Span::styled(
            node.to_string(),
            Style::default().fg(DEFAULT_THEME.fg).add_modifier(Modifier::BOLD),
        ));
    }
    if spans.is_empty() {
        spans.push(Span::styled("(empty)", Style::default().fg(DEFAULT_THEME.comment)));
    }
    spans
}

/// Render the graph pane
pub fn render_graph_pane(frame: &mut Frame, area: Rect, data: GraphRenderData) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let border = Style::default().fg(DEFAULT_THEME.border_normal);

    // Adjacency list
    let mut lines = Vec::new();
    for (node, successors) in data.graph.iter() {
        let mut spans = vec![Span::raw(" "), node_span(node, data.frame)];
        spans.push(Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)));
        if successors.is_empty() {
            spans.push(Span::styled("∅", Style::default().fg(DEFAULT_THEME.comment)));
        }
        for (i, next) in successors.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(", ", Style::default().fg(DEFAULT_THEME.comment)));
            }
            spans.push(node_span(*next, data.frame));
        }
        if data.start == Some(node) {
            spans.push(Span::styled("  ◀ start", Style::default().fg(DEFAULT_THEME.secondary)));
        }
        if data.target == Some(node) {
            spans.push(Span::styled("  ◎ target", Style::default().fg(DEFAULT_THEME.error)));
        }
        lines.push(Line::from(spans));
    }

    let adjacency = Paragraph::new(lines).block(
        Block::default()
            .title(format!(
                " Graph ({} nodes, {} edges) ",
                data.graph.len(),
                data.graph.edge_count()
            ))
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD),
            ),
    );
    frame.render_widget(adjacency, rows[0]);

    // Frontier state
    let label = match data.discipline {
        Discipline::Queue => "Queue (front → back): ",
        Discipline::Stack => "Stack (bottom → top): ",
    };
    let label_style = Style::default().fg(DEFAULT_THEME.comment);

    let mut lines = Vec::new();
    match data.frame {
        None => lines.push(Line::from(Span::styled(
            "Press Enter to start the traversal",
            label_style,
        ))),
        Some(tf) => {
            let mut frontier = vec![Span::styled(label, label_style)];
            frontier.extend(node_list(&tf.frontier, " "));
            lines.push(Line::from(frontier));

            if let Some((action, node)) = tf.action {
                lines.push(Line::from(vec![
                    Span::styled("Action: ", label_style),
                    Span::styled(
                        format!("{} {}", action.label(), node),
                        Style::default()
                            .fg(DEFAULT_THEME.secondary)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            }

            if let Some(current) = tf.current {
                lines.push(Line::from(vec![
                    Span::styled("Current: ", label_style),
                    Span::styled(
                        current.to_string(),
                        Style::default()
                            .fg(DEFAULT_THEME.compare)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            }

            let mut visited = vec![Span::styled("Visited: ", label_style)];
            visited.extend(node_list(&tf.visited, ", "));
            lines.push(Line::from(visited));

            if tf.found {
                let mut path = vec![Span::styled("Path: ", label_style)];
                path.extend(node_list(&tf.path, " → "));
                lines.push(Line::from(path));
            }
        }
    }

    let state = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Frontier ")
                .borders(Borders::ALL)
                .border_style(border),
        );
    frame.render_widget(state, rows[1]);
}
