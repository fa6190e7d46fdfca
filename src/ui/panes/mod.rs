//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`array`]: the array at the current step, one bar per element, with the
//!   touched positions highlighted
//! - [`menu`]: numbered operations, sort order, input prompt and last result
//! - [`trace`]: the recorded step list with the current step marked
//! - [`status`]: Status bar with keybindings and playback state
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area and a borrowed view of the data it shows. Scroll offsets are
//! owned by [`App`](crate::ui::App) and passed in mutably.

pub mod array;
pub mod menu;
pub mod status;
pub mod trace;

// Re-export render functions for convenience
pub use array::{render_array_pane, settled_positions, ArrayRenderData};
pub use menu::{render_menu_pane, MenuRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use trace::render_trace_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by the focusable panes
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `scroll` so a list of `total` rows fills `visible` rows, and pull
/// `follow` into view when given.
pub(crate) fn clamp_scroll(
    scroll: &mut usize,
    total: usize,
    visible: usize,
    follow: Option<usize>,
) {
    let visible = visible.max(1);
    if let Some(row) = follow {
        if row < *scroll {
            *scroll = row;
        } else if row >= *scroll + visible {
            *scroll = row + 1 - visible;
        }
    }
    *scroll = (*scroll).min(total.saturating_sub(visible));
}
