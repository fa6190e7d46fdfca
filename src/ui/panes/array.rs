//! Array pane rendering
//!
//! Draws one row per element: index, value, and a horizontal bar scaled to
//! the largest magnitude in the array. Negative values use a lighter fill.
//!
//! # Highlighting
//!
//! - compared pair: yellow
//! - swapped pair: pink
//! - search probe: cyan
//! - outside the binary search window: grey
//! - settled (final) position: green
//! - found index on the last step: green, bold

use crate::trace::{Step, StepEvent};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

use super::{border_style, clamp_scroll};

/// Everything the array pane needs for one frame
pub struct ArrayRenderData<'a> {
    pub values: &'a [i32],
    pub step: Option<&'a Step>,
    pub settled: &'a FxHashSet<usize>,
    pub found: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellRole {
    Normal,
    Compared,
    Swapped,
    Probed,
    OutsideWindow,
    Settled,
    Found,
}

impl CellRole {
    fn style(self) -> Style {
        let style = Style::default();
        match self {
            CellRole::Normal => style.fg(DEFAULT_THEME.fg),
            CellRole::Compared => style.fg(DEFAULT_THEME.compare).add_modifier(Modifier::BOLD),
            CellRole::Swapped => style.fg(DEFAULT_THEME.swap).add_modifier(Modifier::BOLD),
            CellRole::Probed => style.fg(DEFAULT_THEME.probe).add_modifier(Modifier::BOLD),
            CellRole::OutsideWindow => style.fg(DEFAULT_THEME.comment),
            CellRole::Settled => style.fg(DEFAULT_THEME.settled),
            CellRole::Found => style
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        }
    }
}

/// Positions settled at or before step `position`
pub fn settled_positions(steps: &[Step], position: usize) -> FxHashSet<usize> {
    steps
        .iter()
        .take(position + 1)
        .filter_map(|step| match step.event {
            StepEvent::Settle { index } => Some(index),
            _ => None,
        })
        .collect()
}

fn cell_role(index: usize, data: &ArrayRenderData) -> CellRole {
    if data.found == Some(index) {
        return CellRole::Found;
    }

    if let Some(step) = data.step {
        match step.event {
            StepEvent::Swap { a, b } if index == a || index == b => return CellRole::Swapped,
            StepEvent::Compare { left, right } if index == left || index == right => {
                return CellRole::Compared
            }
            StepEvent::Inspect { index: probe } | StepEvent::Bisect { mid: probe, .. }
                if index == probe =>
            {
                return CellRole::Probed
            }
            _ => {}
        }

        if let Some((left, right)) = step.window {
            if index < left || index > right {
                return CellRole::OutsideWindow;
            }
        }
    }

    if data.settled.contains(&index) {
        CellRole::Settled
    } else {
        CellRole::Normal
    }
}

/// Render the array pane
pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    data: &ArrayRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match data.step {
        Some(step) => format!(" Array: {} ", step.event),
        None => " Array ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if data.values.is_empty() {
        let paragraph = Paragraph::new("(no array yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let index_width = (data.values.len() - 1).to_string().len();
    let value_width = data
        .values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);
    let max_magnitude = data
        .values
        .iter()
        .map(|v| v.unsigned_abs())
        .max()
        .unwrap_or(0)
        .max(1);

    // Borders plus "idx │ value │ "
    let prefix_width = index_width + value_width + 6;
    let bar_space = (area.width as usize).saturating_sub(2 + prefix_width);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    // Keep the touched element on screen unless the user is scrolling here
    let follow = if is_focused {
        None
    } else {
        data.found
            .or_else(|| data.step.and_then(|s| s.event.indices().first().copied()))
    };
    clamp_scroll(scroll_offset, data.values.len(), visible_height, follow);

    let lines: Vec<Line> = data
        .values
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(index, &value)| {
            let role = cell_role(index, data);
            let bar_len = (u64::from(value.unsigned_abs()) * bar_space as u64
                / u64::from(max_magnitude)) as usize;
            let fill = if value < 0 { "░" } else { "█" };

            Line::from(vec![
                Span::styled(
                    format!("{:>width$}", index, width = index_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(" │ ", Style::default().fg(DEFAULT_THEME.border_normal)),
                Span::styled(
                    format!("{:>width$}", value, width = value_width),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
                Span::styled(" │ ", Style::default().fg(DEFAULT_THEME.border_normal)),
                Span::styled(fill.repeat(bar_len), role.style()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(event: StepEvent, window: Option<(usize, usize)>) -> Step {
        Step {
            event,
            state: vec![1, 2, 3, 4],
            window,
        }
    }

    #[test]
    fn test_roles_follow_event() {
        let settled: FxHashSet<usize> = [3].into_iter().collect();
        let swap = step(StepEvent::Swap { a: 0, b: 1 }, None);
        let data = ArrayRenderData {
            values: &swap.state,
            step: Some(&swap),
            settled: &settled,
            found: None,
        };

        assert_eq!(cell_role(0, &data), CellRole::Swapped);
        assert_eq!(cell_role(1, &data), CellRole::Swapped);
        assert_eq!(cell_role(2, &data), CellRole::Normal);
        assert_eq!(cell_role(3, &data), CellRole::Settled);
    }

    #[test]
    fn test_window_dims_outside_positions() {
        let settled = FxHashSet::default();
        let bisect = step(
            StepEvent::Bisect {
                left: 1,
                mid: 2,
                right: 3,
            },
            Some((1, 3)),
        );
        let data = ArrayRenderData {
            values: &bisect.state,
            step: Some(&bisect),
            settled: &settled,
            found: Some(3),
        };

        assert_eq!(cell_role(0, &data), CellRole::OutsideWindow);
        assert_eq!(cell_role(1, &data), CellRole::Normal);
        assert_eq!(cell_role(2, &data), CellRole::Probed);
        assert_eq!(cell_role(3, &data), CellRole::Found);
    }

    #[test]
    fn test_settled_positions_up_to_step() {
        let steps = vec![
            step(StepEvent::Start, None),
            step(StepEvent::Settle { index: 3 }, None),
            step(StepEvent::Settle { index: 2 }, None),
        ];
        assert!(settled_positions(&steps, 0).is_empty());
        assert_eq!(settled_positions(&steps, 1).len(), 1);
        assert_eq!(settled_positions(&steps, 5).len(), 2);
    }
}
