//! Interactive shell around the algorithms
//!
//! - [`input`]: parsing and validating user-entered lines
//! - [`session`]: running one [`Operation`] on a copy of the array
//! - [`console`]: the plain line-oriented menu (`--plain`)
//!
//! The ratatui front-end in [`crate::ui`] drives the same [`Session`] and
//! [`MenuItem`] list, so both front-ends offer identical operations.

pub mod console;
pub mod input;
pub mod session;

use crate::algorithms::{Order, SearchAlgorithm, SortAlgorithm};

pub use session::{Operation, OperationResult, Report, Session};

/// One entry of the numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Sort(SortAlgorithm),
    Search(SearchAlgorithm),
    ToggleOrder,
    Exit,
}

/// Menu entries in display order; entry `i` is chosen with number `i + 1`
pub const MENU: [MenuItem; 7] = [
    MenuItem::Sort(SortAlgorithm::Bubble),
    MenuItem::Sort(SortAlgorithm::Selection),
    MenuItem::Sort(SortAlgorithm::Insertion),
    MenuItem::Search(SearchAlgorithm::Linear),
    MenuItem::Search(SearchAlgorithm::Binary),
    MenuItem::ToggleOrder,
    MenuItem::Exit,
];

impl MenuItem {
    /// Look up a 1-based menu number
    pub fn from_choice(choice: u32) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        MENU.get(index).copied()
    }

    pub fn label(self, order: Order) -> String {
        match self {
            MenuItem::Sort(algorithm) => algorithm.to_string(),
            MenuItem::Search(algorithm) => algorithm.to_string(),
            MenuItem::ToggleOrder => format!("Toggle order (currently {})", order),
            MenuItem::Exit => "Exit".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_choice() {
        assert_eq!(
            MenuItem::from_choice(1),
            Some(MenuItem::Sort(SortAlgorithm::Bubble))
        );
        assert_eq!(
            MenuItem::from_choice(5),
            Some(MenuItem::Search(SearchAlgorithm::Binary))
        );
        assert_eq!(MenuItem::from_choice(7), Some(MenuItem::Exit));
        assert_eq!(MenuItem::from_choice(0), None);
        assert_eq!(MenuItem::from_choice(8), None);
    }

    #[test]
    fn test_toggle_label_mentions_order() {
        assert_eq!(
            MenuItem::ToggleOrder.label(Order::Descending),
            "Toggle order (currently descending)"
        );
    }
}
