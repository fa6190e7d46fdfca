//! Menu pane: operations, settings, input prompt and the last result

use crate::algorithms::Order;
use crate::shell::{Report, MENU};
use crate::ui::app::InputMode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct MenuRenderData<'a> {
    pub values: Option<&'a [i32]>,
    pub order: Order,
    pub presort: bool,
    pub report: Option<&'a Report>,
    pub input_mode: Option<InputMode>,
    pub input_buffer: &'a str,
    pub input_error: Option<&'a str>,
}

fn label(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(DEFAULT_THEME.comment))
}

/// Render the menu pane
pub fn render_menu_pane(frame: &mut Frame, area: Rect, data: &MenuRenderData) {
    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let mut lines: Vec<Line> = Vec::new();

    let array_text = match data.values {
        Some(values) => values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        None => "(none)".to_string(),
    };
    lines.push(Line::from(vec![
        label("Array: "),
        Span::styled(array_text, Style::default().fg(DEFAULT_THEME.number)),
    ]));
    lines.push(Line::from(vec![
        label("Binary search presort: "),
        Span::styled(
            if data.presort { "on" } else { "off" },
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ]));
    lines.push(Line::default());

    for (i, item) in MENU.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", i + 1),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(item.label(data.order), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    if let Some(mode) = data.input_mode {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            mode.prompt(),
            Style::default().fg(DEFAULT_THEME.secondary),
        )));
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(data.input_buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled("█", Style::default().fg(DEFAULT_THEME.secondary)),
        ]));
        if let Some(error) = data.input_error {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(DEFAULT_THEME.error),
            )));
        }
    }

    if let Some(report) = data.report {
        let stats = report.trace.stats();
        let result_color = if report.is_error() {
            DEFAULT_THEME.error
        } else {
            DEFAULT_THEME.success
        };

        lines.push(Line::default());
        lines.push(Line::from(vec![
            label("Ran: "),
            Span::styled(report.operation.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
        if report.presorted {
            lines.push(Line::from(label("(array sorted ascending first)")));
        }
        lines.push(Line::from(vec![
            label("Result: "),
            Span::styled(report.summary(), Style::default().fg(result_color)),
        ]));
        lines.push(Line::from(vec![
            label("Comparisons: "),
            Span::raw(stats.comparisons.to_string()),
            label("  Swaps: "),
            Span::raw(stats.swaps.to_string()),
            label("  Probes: "),
            Span::raw(stats.inspections.to_string()),
        ]));
        lines.push(Line::from(vec![
            label("Multiset preserved: "),
            if report.trace.preserves_multiset() {
                Span::styled("yes", Style::default().fg(DEFAULT_THEME.success))
            } else {
                Span::styled("NO", Style::default().fg(DEFAULT_THEME.error))
            },
        ]));
        if let Some(e) = report.trace.truncation() {
            lines.push(Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(DEFAULT_THEME.error),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
