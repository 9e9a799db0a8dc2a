//! # Text Menu
//!
//! The interactive loop. Generic over its input and output so tests can
//! drive it with a `Cursor` and read back what was printed.
//!
//! ## Menu Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. List all products in store  ──► commands::list_products            │
//! │  2. Show total amount in store  ──► commands::total_products           │
//! │  3. Make an order               ──► name/quantity prompts until "done" │
//! │                                     └─► commands::place_order          │
//! │  4. Quit                                                               │
//! │                                                                         │
//! │  Anything else: "Invalid choice", loop continues.                      │
//! │  Command errors are printed; the loop continues.                       │
//! │  End of input behaves like Quit.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use storefront_core::{OrderLine, Store};
use tracing::debug;

use crate::commands;

/// Drives one interactive session against a store.
pub struct Menu<'a, R, W> {
    store: &'a mut Store,
    store_name: String,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut Store, store_name: impl Into<String>, input: R, output: W) -> Self {
        Menu {
            store,
            store_name: store_name.into(),
            input,
            output,
        }
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to {}!", self.store_name)?;

        loop {
            writeln!(self.output, "\nMenu:")?;
            writeln!(self.output, "1. List all products in store")?;
            writeln!(self.output, "2. Show total amount in store")?;
            writeln!(self.output, "3. Make an order")?;
            writeln!(self.output, "4. Quit")?;

            let Some(choice) = self.prompt("Please choose an option (1-4): ")? else {
                debug!("Input closed, leaving menu");
                return Ok(());
            };

            match choice.trim() {
                "1" => self.list_products()?,
                "2" => self.show_total()?,
                "3" => {
                    if !self.make_order()? {
                        return Ok(());
                    }
                }
                "4" => {
                    writeln!(self.output, "Thank you for visiting the store!")?;
                    return Ok(());
                }
                other => {
                    debug!(choice = other, "Invalid menu choice");
                    writeln!(self.output, "Invalid choice. Please select a valid option.")?;
                }
            }
        }
    }

    fn list_products(&mut self) -> io::Result<()> {
        match commands::list_products(self.store) {
            Ok(lines) => {
                writeln!(self.output, "\nProducts in Store:")?;
                for line in lines {
                    writeln!(self.output, "{}", line)?;
                }
            }
            Err(err) => writeln!(self.output, "{}", err.message)?,
        }
        Ok(())
    }

    fn show_total(&mut self) -> io::Result<()> {
        let total = commands::total_products(self.store);
        writeln!(self.output, "\nTotal amount of products in store: {}", total)
    }

    /// Collects order lines and places the order.
    ///
    /// Returns `false` when input ended mid-entry; nothing is ordered then.
    fn make_order(&mut self) -> io::Result<bool> {
        let mut lines = Vec::new();

        loop {
            let Some(name) = self.prompt("Enter product name (or type 'done' to finish): ")?
            else {
                return Ok(false);
            };
            if name.to_lowercase() == "done" {
                break;
            }

            let Some(raw_quantity) = self.prompt(&format!("Enter quantity for {}: ", name))?
            else {
                return Ok(false);
            };
            let Ok(quantity) = raw_quantity.trim().parse::<i64>() else {
                writeln!(self.output, "Please enter a valid integer for quantity.")?;
                continue;
            };

            match self.store.find_by_name(&name) {
                Some(product) => lines.push(OrderLine::new(product.id(), quantity)),
                None => writeln!(self.output, "Product not found.")?,
            }
        }

        match commands::place_order(self.store, &lines) {
            Ok(total) => writeln!(self.output, "Total price of your order: {:.2}", total)?,
            Err(err) => writeln!(self.output, "{}", err.message)?,
        }
        Ok(true)
    }

    /// Prints `text` and reads one line without its line ending.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
