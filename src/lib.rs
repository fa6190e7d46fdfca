//! # Introduction
//!
//! Sortty implements the classic array algorithms (bubble, selection and
//! insertion sort, linear and binary search) over `i32` slices, and replays
//! every comparison and swap they make in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Session (copy) → Algorithm → Trace → TUI / console
//! ```
//!
//! 1. [`algorithms`]: in-place sorts, searches and the shared
//!    predicates. No I/O, no allocation; results are `Result`s, never
//!    sentinel integers.
//! 2. [`trace`]: a [`algorithms::StepObserver`] that records each step
//!    with the array state, under a memory budget.
//! 3. [`shell`]: input validation, per-operation sessions and the plain
//!    console menu.
//! 4. [`config`]: command-line options.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use sortty::algorithms::{binary_search, selection_sort, Order, SearchOutcome};
//!
//! let mut seq = vec![5, 1, 2, 3, 4];
//! selection_sort(&mut seq, Order::Ascending);
//! assert_eq!(binary_search(4, &seq), Ok(SearchOutcome::Found(3)));
//! ```

pub mod algorithms;
pub mod config;
pub mod shell;
pub mod trace;
pub mod ui;
