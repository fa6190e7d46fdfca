//! Trace pane rendering

use crate::trace::{Step, StepEvent};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

use super::{border_style, clamp_scroll};

fn event_color(event: &StepEvent) -> ratatui::style::Color {
    match event {
        StepEvent::Start | StepEvent::Note(_) => DEFAULT_THEME.primary,
        StepEvent::Compare { .. } => DEFAULT_THEME.compare,
        StepEvent::Swap { .. } => DEFAULT_THEME.swap,
        StepEvent::Inspect { .. } | StepEvent::Bisect { .. } => DEFAULT_THEME.probe,
        StepEvent::Settle { .. } => DEFAULT_THEME.settled,
    }
}

/// Render the step list, marking the step at `position`
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &[Step],
    position: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Trace ({} steps) ", steps.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if steps.is_empty() {
        let paragraph = Paragraph::new("(run an operation to record steps)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let follow = if is_focused { None } else { Some(position) };
    clamp_scroll(scroll_offset, steps.len(), visible_height, follow);

    let number_width = steps.len().to_string().len();

    // Only build the rows that are on screen; traces can be long
    let items: Vec<ListItem> = steps
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, step)| {
            let is_current = i == position;
            let marker = if is_current { "▶ " } else { "  " };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.border_focused)),
                Span::styled(
                    format!("{:>width$} ", i + 1, width = number_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    step.event.to_string(),
                    Style::default().fg(event_color(&step.event)),
                ),
            ]);

            let item = ListItem::new(line);
            if is_current {
                item.style(
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
