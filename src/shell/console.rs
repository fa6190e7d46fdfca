//! Plain console front-end
//!
//! Prompts for the array size and elements, then loops over the numbered
//! menu until the user picks Exit or input ends. Reads and writes through
//! generic `BufRead`/`Write` handles so the whole dialogue can be driven from
//! tests.

use super::input::{
    format_array, parse_choice, parse_elements, parse_integer, parse_length, InputError,
};
use super::session::{Operation, Session, PRESORT_NOTE};
use super::{MenuItem, MENU};
use crate::algorithms::{Order, SortAlgorithm};
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    order: Order,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            order: Order::Ascending,
        }
    }

    /// Give back the output handle (used by tests to inspect the transcript)
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt for the array interactively
    pub fn read_array(&mut self) -> io::Result<Option<Vec<i32>>> {
        let Some(length) = self.prompt("Enter a positive array size: ", parse_length)? else {
            return Ok(None);
        };
        let text = format!("Enter {} integers separated by spaces: ", length);
        self.prompt(&text, |line| parse_elements(line, length))
    }

    /// Run the menu loop over `session` until Exit or end of input
    pub fn run(&mut self, session: &Session) -> io::Result<()> {
        writeln!(self.output)?;

        loop {
            for (i, item) in MENU.iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, item.label(self.order))?;
            }
            writeln!(self.output)?;

            let text = format!("Enter your choice (1-{}): ", MENU.len());
            let Some(choice) = self.prompt(&text, |line| parse_choice(line, MENU.len() as u32))?
            else {
                return Ok(());
            };
            writeln!(self.output)?;

            let operation = match MenuItem::from_choice(choice) {
                Some(MenuItem::Sort(algorithm)) => Operation::Sort {
                    algorithm,
                    order: self.order,
                },
                Some(MenuItem::Search(algorithm)) => {
                    // Show the sorted copy before asking what to look for
                    if algorithm.requires_sorted() && session.presort() {
                        let mut sorted = session.values().to_vec();
                        SortAlgorithm::Selection.run(&mut sorted, Order::Ascending);
                        writeln!(self.output, "{}", format_array(session.values()))?;
                        writeln!(self.output, "{}", PRESORT_NOTE)?;
                        writeln!(self.output, "{}", format_array(&sorted))?;
                        writeln!(self.output)?;
                    }
                    let Some(value) = self.prompt("Enter an integer: ", parse_integer)? else {
                        return Ok(());
                    };
                    Operation::Search { algorithm, value }
                }
                Some(MenuItem::ToggleOrder) => {
                    self.order = self.order.toggled();
                    writeln!(self.output, "Sort order is now {}.", self.order)?;
                    writeln!(self.output)?;
                    continue;
                }
                Some(MenuItem::Exit) | None => return Ok(()),
            };

            let report = session.run(operation);
            writeln!(self.output, "{}", report.summary())?;
            writeln!(self.output)?;
        }
    }

    /// Ask until `parse` accepts a line. `None` means input ended.
    fn prompt<T, F>(&mut self, text: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, InputError>,
    {
        loop {
            write!(self.output, "{}", text)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}
